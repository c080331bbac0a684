//! Tunables for a session. The two presets cover the plain arcade build and
//! the build with the shop, spell and gold-on-kill turned on.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Classic,
    #[default]
    Extended,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub variant: Variant,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Horizontal guardian movement in px per frame.
    pub guardian_speed: f64,
    pub projectile_damage: u32,
    /// Vertical projectile velocity in px per frame (negative = up).
    pub projectile_speed: f64,
    pub enemy_speed: f64,
    pub enemy_health: u32,
    /// Wave N spawns `enemies_per_wave * N` enemies.
    pub enemies_per_wave: u32,
    pub spawn_interval_frames: u32,
    pub wave_interval_ms: f64,
    /// Nominal frame length; the wave clock falls back to it when no real
    /// frame timing is available.
    pub frame_ms: f64,
    pub fortress_health: i32,
    pub fortress_breach_damage: i32,
    pub score_per_kill: u64,
    /// Zero disables gold on kill.
    pub gold_per_kill: u64,
    pub starting_mana: u32,
    pub spell_cost: u32,
    pub spell_enabled: bool,
    pub shop_enabled: bool,
    pub enemy_sprites: Vec<String>,
    pub background_sprite: String,
    pub guardian_sprite: String,
}

impl GameConfig {
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            canvas_width: 800.0,
            canvas_height: 600.0,
            guardian_speed: 5.0,
            projectile_damage: 50,
            projectile_speed: -5.0,
            enemy_speed: 1.0,
            enemy_health: 100,
            enemies_per_wave: 5,
            spawn_interval_frames: 30,
            wave_interval_ms: 5000.0,
            frame_ms: 1000.0 / 60.0,
            fortress_health: 100,
            fortress_breach_damage: 10,
            score_per_kill: 10,
            gold_per_kill: 0,
            starting_mana: 100,
            spell_cost: 50,
            spell_enabled: false,
            shop_enabled: false,
            enemy_sprites: vec!["images/enemy1.png".to_string()],
            background_sprite: "images/battlefield_landscape.png".to_string(),
            guardian_sprite: "images/guardian.png".to_string(),
        }
    }

    pub fn extended() -> Self {
        Self {
            variant: Variant::Extended,
            gold_per_kill: 20,
            spell_enabled: true,
            shop_enabled: true,
            enemy_sprites: vec![
                "images/enemy1.png".to_string(),
                "images/enemy2.png".to_string(),
                "images/enemy3.png".to_string(),
            ],
            ..Self::classic()
        }
    }

    pub fn preset(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Extended => Self::extended(),
        }
    }

    /// Parses a possibly partial JSON object. Fields left out are taken from
    /// the preset named by `variant` (extended when absent).
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let overrides: serde_json::Value = serde_json::from_str(raw)?;
        let variant = match overrides.get("variant") {
            Some(v) => serde_json::from_value(v.clone())?,
            None => Variant::default(),
        };
        let mut merged = serde_json::to_value(Self::preset(variant))?;
        if let (Some(base), serde_json::Value::Object(extra)) = (merged.as_object_mut(), overrides) {
            for (k, v) in extra {
                base.insert(k, v);
            }
        }
        let cfg: Self = serde_json::from_value(merged)?;
        cfg.validate().map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(cfg)
    }

    /// Rejects values the simulation cannot honor: health and damage must fit
    /// the signed health counters, breaches may not heal, and projectiles
    /// must travel upward so they eventually leave the screen.
    pub fn validate(&self) -> Result<(), String> {
        let max = i32::MAX as u32;
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(format!("canvas must be positive, got {}x{}", self.canvas_width, self.canvas_height));
        }
        if self.enemy_health == 0 || self.enemy_health > max {
            return Err(format!("enemy_health must be in 1..={}, got {}", max, self.enemy_health));
        }
        if self.projectile_damage > max {
            return Err(format!("projectile_damage must be at most {}, got {}", max, self.projectile_damage));
        }
        if self.fortress_health <= 0 {
            return Err(format!("fortress_health must be positive, got {}", self.fortress_health));
        }
        if self.fortress_breach_damage < 0 {
            return Err(format!("fortress_breach_damage may not be negative, got {}", self.fortress_breach_damage));
        }
        if !(self.projectile_speed < 0.0) {
            return Err(format!("projectile_speed must be negative (upward), got {}", self.projectile_speed));
        }
        if !(self.frame_ms > 0.0) {
            return Err(format!("frame_ms must be positive, got {}", self.frame_ms));
        }
        Ok(())
    }

    /// How many enemies wave `wave` spawns.
    pub fn wave_quota(&self, wave: u32) -> u32 {
        self.enemies_per_wave.saturating_mul(wave)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::extended()
    }
}
