//! Keyboard keys to logical commands.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Shoot,
    CastSpell,
    ToggleShop,
    ShopUp,
    ShopDown,
    ShopConfirm,
}

/// Maps a `KeyboardEvent.key` value. Spell and shop keys only exist when the
/// config turns those features on.
pub fn command_for_key(key: &str, cfg: &GameConfig) -> Option<Command> {
    let cmd = match key {
        "ArrowLeft" | "Left" => Command::MoveLeft,
        "ArrowRight" | "Right" => Command::MoveRight,
        " " | "Spacebar" => Command::Shoot,
        "m" | "M" => Command::CastSpell,
        "s" | "S" | "Escape" => Command::ToggleShop,
        "ArrowUp" | "Up" => Command::ShopUp,
        "ArrowDown" | "Down" => Command::ShopDown,
        "Enter" => Command::ShopConfirm,
        _ => return None,
    };
    match cmd {
        Command::CastSpell if !cfg.spell_enabled => None,
        Command::ToggleShop | Command::ShopUp | Command::ShopDown | Command::ShopConfirm
            if !cfg.shop_enabled =>
        {
            None
        }
        _ => Some(cmd),
    }
}

/// Intent flags held between key-down and key-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    /// Fire is edge triggered; this only suppresses key auto-repeat.
    pub fire: bool,
}

impl HeldKeys {
    /// Records a press. Returns true when this is a fresh press rather than
    /// an auto-repeat of a key already held.
    pub fn press(&mut self, cmd: Command) -> bool {
        let flag = match cmd {
            Command::MoveLeft => &mut self.left,
            Command::MoveRight => &mut self.right,
            Command::Shoot => &mut self.fire,
            _ => return true,
        };
        let fresh = !*flag;
        *flag = true;
        fresh
    }

    pub fn release(&mut self, cmd: Command) {
        match cmd {
            Command::MoveLeft => self.left = false,
            Command::MoveRight => self.right = false,
            Command::Shoot => self.fire = false,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_space_always_map() {
        let cfg = GameConfig::classic();
        assert_eq!(command_for_key("ArrowLeft", &cfg), Some(Command::MoveLeft));
        assert_eq!(command_for_key("ArrowRight", &cfg), Some(Command::MoveRight));
        assert_eq!(command_for_key(" ", &cfg), Some(Command::Shoot));
        assert_eq!(command_for_key("q", &cfg), None);
    }

    #[test]
    fn variant_gates_spell_and_shop_keys() {
        let classic = GameConfig::classic();
        let extended = GameConfig::extended();
        assert_eq!(command_for_key("m", &classic), None);
        assert_eq!(command_for_key("s", &classic), None);
        assert_eq!(command_for_key("Enter", &classic), None);
        assert_eq!(command_for_key("M", &extended), Some(Command::CastSpell));
        assert_eq!(command_for_key("Escape", &extended), Some(Command::ToggleShop));
        assert_eq!(command_for_key("ArrowDown", &extended), Some(Command::ShopDown));
    }

    #[test]
    fn fire_is_edge_triggered() {
        let mut keys = HeldKeys::default();
        assert!(keys.press(Command::Shoot));
        assert!(!keys.press(Command::Shoot));
        keys.release(Command::Shoot);
        assert!(keys.press(Command::Shoot));
    }

    #[test]
    fn movement_flags_follow_press_and_release() {
        let mut keys = HeldKeys::default();
        keys.press(Command::MoveLeft);
        keys.press(Command::MoveRight);
        assert!(keys.left && keys.right);
        keys.release(Command::MoveLeft);
        assert!(!keys.left && keys.right);
    }
}
