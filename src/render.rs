//! Frame drawing against an abstract 2D surface. The canvas implementation
//! lives in `state::canvas`; tests record the calls instead.

use crate::game::GameState;
use crate::model::Enemy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Guardian,
    Enemy(usize),
}

pub trait Surface {
    fn clear(&mut self, w: f64, h: f64);
    fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, color: &str, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, color: &str, font: &str, text: &str, x: f64, y: f64);
}

const HUD_FONT: &str = "20px Arial";
const BANNER_FONT: &str = "40px Arial";
const HEALTH_BAR_HEIGHT: f64 = 10.0;

pub fn draw_frame<S: Surface>(gs: &GameState, s: &mut S) {
    let (w, h) = (gs.config.canvas_width, gs.config.canvas_height);
    s.clear(w, h);
    s.draw_sprite(Sprite::Background, 0.0, 0.0, w, h);

    let g = &gs.guardian;
    s.draw_sprite(Sprite::Guardian, g.x, g.y, g.width, g.height);

    for p in &gs.projectiles {
        s.fill_rect(&p.color, p.x, p.y, p.width, p.height);
    }

    for e in &gs.enemies {
        s.draw_sprite(Sprite::Enemy(e.sprite), e.x, e.y, e.width, e.height);
        draw_health_bar(e, s);
    }

    draw_hud(gs, s);

    if gs.game_over {
        s.fill_text("black", BANNER_FONT, "Game Over", w / 2.0 - 100.0, h / 2.0);
    }
}

fn draw_health_bar<S: Surface>(e: &Enemy, s: &mut S) {
    let y = e.y - HEALTH_BAR_HEIGHT;
    s.fill_rect("red", e.x, y, e.width, HEALTH_BAR_HEIGHT);
    s.fill_rect("green", e.x, y, e.health_ratio() * e.width, HEALTH_BAR_HEIGHT);
}

fn draw_hud<S: Surface>(gs: &GameState, s: &mut S) {
    let eco = &gs.economy;
    s.fill_text("gold", HUD_FONT, &format!("Gold: {}", eco.gold()), 20.0, 30.0);
    s.fill_text("blue", HUD_FONT, &format!("Mana: {}", eco.mana()), 20.0, 60.0);
    s.fill_text("black", HUD_FONT, &format!("Score: {}", eco.score()), 20.0, 90.0);
    s.fill_text("black", HUD_FONT, &format!("Wave: {}", gs.wave), 20.0, 120.0);
    let fortress = gs.fortress.health.max(0);
    s.fill_text(
        "darkred",
        HUD_FONT,
        &format!("Fortress: {}/{}", fortress, gs.fortress.max_health),
        20.0,
        150.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::model::Projectile;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Sprite(Sprite, f64, f64),
        Rect(String, f64, f64, f64),
        Text(String),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl Surface for Recorder {
        fn clear(&mut self, _w: f64, _h: f64) {
            self.0.push(Call::Clear);
        }
        fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64, _w: f64, _h: f64) {
            self.0.push(Call::Sprite(sprite, x, y));
        }
        fn fill_rect(&mut self, color: &str, x: f64, y: f64, w: f64, _h: f64) {
            self.0.push(Call::Rect(color.to_string(), x, y, w));
        }
        fn fill_text(&mut self, _color: &str, _font: &str, text: &str, _x: f64, _y: f64) {
            self.0.push(Call::Text(text.to_string()));
        }
    }

    #[test]
    fn layers_are_drawn_back_to_front() {
        let mut gs = GameState::new(GameConfig::extended());
        gs.projectiles.push(Projectile::new(10.0, 20.0, -5.0));
        gs.enemies.push(Enemy::new(100.0, 50.0, 1.0, 100, 2));
        let mut rec = Recorder::default();
        draw_frame(&gs, &mut rec);
        assert_eq!(rec.0[0], Call::Clear);
        assert_eq!(rec.0[1], Call::Sprite(Sprite::Background, 0.0, 0.0));
        assert_eq!(rec.0[2], Call::Sprite(Sprite::Guardian, 400.0, 500.0));
        assert_eq!(rec.0[3], Call::Rect("red".into(), 10.0, 20.0, 5.0));
        assert_eq!(rec.0[4], Call::Sprite(Sprite::Enemy(2), 100.0, 50.0));
        assert_eq!(rec.0[5], Call::Rect("red".into(), 100.0, 40.0, 50.0));
        assert_eq!(rec.0[6], Call::Rect("green".into(), 100.0, 40.0, 50.0));
        assert_eq!(rec.0[7], Call::Text("Gold: 0".into()));
        assert_eq!(rec.0[10], Call::Text("Wave: 0".into()));
        assert_eq!(rec.0.len(), 12);
    }

    #[test]
    fn health_bar_shrinks_with_damage() {
        let mut gs = GameState::new(GameConfig::classic());
        let mut e = Enemy::new(0.0, 100.0, 1.0, 100, 0);
        e.take_hit(50);
        gs.enemies.push(e);
        let mut rec = Recorder::default();
        draw_frame(&gs, &mut rec);
        assert!(rec.0.contains(&Call::Rect("green".into(), 0.0, 90.0, 25.0)));
    }

    #[test]
    fn banner_only_after_game_over() {
        let mut gs = GameState::new(GameConfig::classic());
        let mut rec = Recorder::default();
        draw_frame(&gs, &mut rec);
        assert!(!rec.0.contains(&Call::Text("Game Over".into())));
        gs.fortress.health = -10;
        gs.game_over = true;
        let mut rec = Recorder::default();
        draw_frame(&gs, &mut rec);
        assert_eq!(rec.0.last(), Some(&Call::Text("Game Over".into())));
        assert!(rec.0.contains(&Call::Text("Fortress: 0/100".into())));
    }
}
