//! Entity records for a session: the guardian, the fortress, enemies and
//! projectiles. All of them are axis-aligned rectangles in canvas pixels.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

pub const GUARDIAN_SIZE: f64 = 100.0;
pub const ENEMY_SIZE: f64 = 50.0;
pub const PROJECTILE_WIDTH: f64 = 5.0;
pub const PROJECTILE_HEIGHT: f64 = 10.0;
pub const PROJECTILE_COLOR: &str = "red";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: rectangles that only share an edge do not touch.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guardian {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Guardian {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            x: cfg.canvas_width / 2.0,
            y: cfg.canvas_height - GUARDIAN_SIZE,
            width: GUARDIAN_SIZE,
            height: GUARDIAN_SIZE,
        }
    }

    /// Applies one frame of held movement. The guardian may overshoot the
    /// edge by at most one step, the same as the bounds check before moving.
    pub fn steer(&mut self, left: bool, right: bool, speed: f64, canvas_width: f64) {
        if right && self.x < canvas_width - self.width {
            self.x += speed;
        }
        if left && self.x > 0.0 {
            self.x -= speed;
        }
    }

    /// Where a freshly fired projectile starts: horizontally centred, at the
    /// guardian's top edge.
    pub fn muzzle(&self) -> (f64, f64) {
        (self.x + self.width / 2.0 - PROJECTILE_WIDTH / 2.0, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortress {
    pub health: i32,
    pub max_health: i32,
}

impl Fortress {
    pub fn new(max_health: i32) -> Self {
        Self { health: max_health, max_health }
    }

    /// Negative amounts are ignored; the fortress is never healed.
    pub fn damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount.max(0));
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pixels per frame, downward.
    pub speed: f64,
    pub health: i32,
    pub max_health: i32,
    /// Index into the configured enemy sprite list.
    pub sprite: usize,
}

impl Enemy {
    pub fn new(x: f64, y: f64, speed: f64, health: u32, sprite: usize) -> Self {
        let health = i32::try_from(health).unwrap_or(i32::MAX);
        Self {
            x,
            y,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
            speed,
            health,
            max_health: health,
            sprite,
        }
    }

    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    pub fn take_hit(&mut self, damage: u32) {
        let damage = i32::try_from(damage).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(damage);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Remaining health as a fraction of max, clamped for drawing.
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f64 / self.max_health as f64).clamp(0.0, 1.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub velocity: f64,
}

impl Projectile {
    pub fn new(x: f64, y: f64, velocity: f64) -> Self {
        Self {
            x,
            y,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            color: PROJECTILE_COLOR.to_string(),
            velocity,
        }
    }

    pub fn advance(&mut self) {
        self.y += self.velocity;
    }

    /// Entirely above the top edge.
    pub fn is_off_screen(&self) -> bool {
        self.y + self.height < 0.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict_on_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(Rect::new(2.0, 2.0, 5.0, 10.0).overlaps(&Rect::new(2.0, 2.0, 50.0, 50.0)));
    }

    #[test]
    fn guardian_starts_centred_above_bottom() {
        let g = Guardian::new(&GameConfig::default());
        assert_eq!((g.x, g.y), (400.0, 500.0));
        assert_eq!(g.muzzle(), (447.5, 500.0));
    }

    #[test]
    fn guardian_stops_at_edges() {
        let mut g = Guardian::new(&GameConfig::default());
        g.x = 700.0;
        g.steer(false, true, 5.0, 800.0);
        assert_eq!(g.x, 700.0);
        g.x = 0.0;
        g.steer(true, false, 5.0, 800.0);
        assert_eq!(g.x, 0.0);
        g.steer(false, true, 5.0, 800.0);
        assert_eq!(g.x, 5.0);
    }

    #[test]
    fn both_directions_cancel() {
        let mut g = Guardian::new(&GameConfig::default());
        g.steer(true, true, 5.0, 800.0);
        assert_eq!(g.x, 400.0);
    }

    #[test]
    fn enemy_health_only_goes_down() {
        let mut e = Enemy::new(0.0, -50.0, 1.0, 100, 0);
        assert_eq!(e.health, e.max_health);
        e.take_hit(50);
        assert_eq!(e.health, 50);
        assert!(!e.is_dead());
        assert_eq!(e.health_ratio(), 0.5);
        e.take_hit(50);
        assert!(e.is_dead());
        assert!(e.health <= e.max_health);
    }

    #[test]
    fn oversized_hit_kills_without_wrapping() {
        let mut e = Enemy::new(0.0, 0.0, 1.0, 100, 0);
        e.take_hit(3_000_000_000);
        assert!(e.is_dead());
        assert!(e.health <= e.max_health);
        e.take_hit(u32::MAX);
        assert!(e.is_dead());
        assert_eq!(e.health_ratio(), 0.0);
    }

    #[test]
    fn oversized_health_spawns_alive() {
        let e = Enemy::new(0.0, 0.0, 1.0, 3_000_000_000, 0);
        assert!(!e.is_dead());
        assert_eq!(e.health, e.max_health);
    }

    #[test]
    fn fortress_damage_never_heals() {
        let mut f = Fortress::new(100);
        f.damage(-10);
        assert_eq!(f.health, 100);
        f.damage(10);
        assert_eq!(f.health, 90);
        f.damage(i32::MAX);
        f.damage(i32::MAX);
        assert!(f.is_destroyed());
        assert!(f.health <= 90);
    }

    #[test]
    fn projectile_leaves_top_only_when_fully_above() {
        let mut p = Projectile::new(0.0, -5.0, -5.0);
        assert!(!p.is_off_screen());
        p.advance();
        assert!(!p.is_off_screen());
        p.advance();
        assert!(p.is_off_screen());
    }
}
