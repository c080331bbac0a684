//! One play session: entities, economy, wave clock and the per-frame step.
//!
//! The browser side only feeds key presses and one tick per animation
//! frame; everything here is deterministic given the spawn rolls and frame
//! timings passed in.

use std::collections::HashMap;

use crate::collision::{self, HitReport};
use crate::config::GameConfig;
use crate::economy::Economy;
use crate::input::{Command, HeldKeys};
use crate::model::{ENEMY_SIZE, Enemy, Fortress, Guardian, Projectile};
use crate::shop::{PurchaseOutcome, Shop, UpgradeId};
use crate::spawner::{Spawner, WavePhase};
use crate::util::clog;

/// Longest real gap one frame may add to the wave clock. Covers the first
/// frame after a resume and hitches without letting a wave start early.
pub const MAX_FRAME_GAP_MS: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame simulated, schedule the next one.
    Continue,
    /// Shop open or session not started; nothing moved.
    Suspended,
    /// Fortress fell on this frame. Reported once.
    GameOver,
    /// Session already over.
    Halted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellOutcome {
    Cleared(usize),
    NotEnoughMana { cost: u32, mana: u32 },
    Disabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    Ignored,
    Moving,
    Fired,
    Spell(SpellOutcome),
    ShopToggled { open: bool },
    Navigated(usize),
    Purchase(PurchaseOutcome),
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub guardian: Guardian,
    pub fortress: Fortress,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub economy: Economy,
    pub shop: Shop,
    pub keys: HeldKeys,
    pub wave: u32,
    pub spawner: Spawner,
    /// Elapsed play time; only advances on simulated frames.
    pub clock_ms: f64,
    pub last_wave_ms: f64,
    pub shots_fired: u64,
    pub hits_landed: u64,
    pub spawned_total: u64,
    pub started: bool,
    pub game_over: bool,
    pub purchases: HashMap<UpgradeId, u32>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            guardian: Guardian::new(&config),
            fortress: Fortress::new(config.fortress_health),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            economy: Economy::new(config.starting_mana),
            shop: Shop::default(),
            keys: HeldKeys::default(),
            wave: 0,
            spawner: Spawner::Idle,
            clock_ms: 0.0,
            last_wave_ms: 0.0,
            shots_fired: 0,
            hits_landed: 0,
            spawned_total: 0,
            started: false,
            game_over: false,
            purchases: HashMap::new(),
            config,
        }
    }

    /// Kicks off the first wave. Called once the sprites are loaded.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.start_wave();
    }

    pub fn wave_phase(&self) -> WavePhase {
        self.spawner.phase(self.enemies.len())
    }

    /// Whether the frame loop should keep re-arming itself.
    pub fn is_running(&self) -> bool {
        self.started && !self.game_over && !self.shop.open
    }

    fn start_wave(&mut self) {
        self.wave += 1;
        let quota = self.config.wave_quota(self.wave);
        self.spawner = Spawner::begin_burst(quota, self.config.spawn_interval_frames);
        self.last_wave_ms = self.clock_ms;
        clog(&format!("Wave {} started ({} enemies)", self.wave, quota));
    }

    fn spawn_enemy(&mut self, roll: f64) {
        let cfg = &self.config;
        let x = roll.clamp(0.0, 1.0) * (cfg.canvas_width - ENEMY_SIZE);
        let sprite = if cfg.enemy_sprites.is_empty() {
            0
        } else {
            (self.spawned_total % cfg.enemy_sprites.len() as u64) as usize
        };
        self.enemies.push(Enemy::new(x, -ENEMY_SIZE, cfg.enemy_speed, cfg.enemy_health, sprite));
        self.spawned_total += 1;
    }

    pub fn shoot(&mut self) {
        let (x, y) = self.guardian.muzzle();
        self.projectiles.push(Projectile::new(x, y, self.config.projectile_speed));
        self.shots_fired += 1;
    }

    /// Spends mana to wipe the whole field. Kills from the spell award
    /// nothing.
    pub fn cast_spell(&mut self) -> SpellOutcome {
        if !self.config.spell_enabled {
            return SpellOutcome::Disabled;
        }
        let cost = self.config.spell_cost;
        if !self.economy.use_mana(cost) {
            clog(&format!("Spell needs {} mana, have {}", cost, self.economy.mana()));
            return SpellOutcome::NotEnoughMana { cost, mana: self.economy.mana() };
        }
        let cleared = self.enemies.len();
        self.enemies.clear();
        clog(&format!("Spell cleared {} enemies", cleared));
        SpellOutcome::Cleared(cleared)
    }

    pub fn press(&mut self, cmd: Command) -> PressOutcome {
        if !self.started || self.game_over {
            return PressOutcome::Ignored;
        }
        if cmd == Command::ToggleShop {
            if !self.config.shop_enabled {
                return PressOutcome::Ignored;
            }
            self.shop.toggle();
            // Held movement must not carry across the pause.
            self.keys = HeldKeys::default();
            return PressOutcome::ShopToggled { open: self.shop.open };
        }
        if self.shop.open {
            return match cmd {
                Command::ShopUp => {
                    self.shop.move_up();
                    PressOutcome::Navigated(self.shop.selected)
                }
                Command::ShopDown => {
                    self.shop.move_down();
                    PressOutcome::Navigated(self.shop.selected)
                }
                Command::ShopConfirm => {
                    let outcome = self.shop.purchase(&mut self.economy);
                    if let PurchaseOutcome::Bought(id) = outcome {
                        *self.purchases.entry(id).or_insert(0) += 1;
                    }
                    PressOutcome::Purchase(outcome)
                }
                _ => PressOutcome::Ignored,
            };
        }
        match cmd {
            Command::MoveLeft | Command::MoveRight => {
                self.keys.press(cmd);
                PressOutcome::Moving
            }
            Command::Shoot => {
                if self.keys.press(cmd) {
                    self.shoot();
                    PressOutcome::Fired
                } else {
                    PressOutcome::Ignored
                }
            }
            Command::CastSpell => PressOutcome::Spell(self.cast_spell()),
            _ => PressOutcome::Ignored,
        }
    }

    pub fn release(&mut self, cmd: Command) {
        self.keys.release(cmd);
    }

    /// Simulates one frame of nominal length `frame_ms`.
    pub fn tick(&mut self, roll: f64) -> TickOutcome {
        self.tick_elapsed(roll, self.config.frame_ms)
    }

    /// Simulates one frame. `roll` in [0, 1) places an enemy if one spawns on
    /// this frame; `elapsed_ms` is the real time since the previous frame and
    /// only feeds the wave clock. Movement and spawn cadence stay per frame.
    pub fn tick_elapsed(&mut self, roll: f64, elapsed_ms: f64) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Halted;
        }
        if !self.started || self.shop.open {
            return TickOutcome::Suspended;
        }
        let elapsed_ms = if elapsed_ms.is_finite() { elapsed_ms.clamp(0.0, MAX_FRAME_GAP_MS) } else { self.config.frame_ms };
        self.clock_ms += elapsed_ms;

        let cfg = &self.config;
        self.guardian.steer(self.keys.left, self.keys.right, cfg.guardian_speed, cfg.canvas_width);

        for p in self.projectiles.iter_mut() {
            p.advance();
        }
        self.projectiles.retain(|p| !p.is_off_screen());

        let HitReport { hits, kills } =
            collision::resolve_hits(&mut self.projectiles, &mut self.enemies, self.config.projectile_damage);
        self.hits_landed += hits as u64;
        if kills > 0 {
            self.economy.add_score(self.config.score_per_kill * kills as u64);
            self.economy.add_gold(self.config.gold_per_kill * kills as u64);
        }

        if self.spawner.step() {
            self.spawn_enemy(roll);
        }

        let floor = self.config.canvas_height;
        let mut breaches = 0;
        for e in self.enemies.iter_mut() {
            e.advance();
        }
        self.enemies.retain(|e| {
            let through = e.y > floor;
            if through {
                breaches += 1;
            }
            !through
        });
        if breaches > 0 {
            self.fortress.damage(self.config.fortress_breach_damage.saturating_mul(breaches));
        }

        if self.wave_phase() == WavePhase::Idle
            && self.clock_ms - self.last_wave_ms > self.config.wave_interval_ms
        {
            self.start_wave();
        }

        if self.fortress.is_destroyed() {
            self.game_over = true;
            clog(&format!("Game over on wave {} with score {}", self.wave, self.economy.score()));
            return TickOutcome::GameOver;
        }
        TickOutcome::Continue
    }
}
