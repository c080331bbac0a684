//! Pause-menu shop: a static upgrade catalog and the overlay's selection state.

use serde::{Deserialize, Serialize};

use crate::economy::Economy;
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    SharperBolts,
    RapidFire,
    ReinforcedWalls,
    ManaWell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Upgrade {
    pub id: UpgradeId,
    pub name: &'static str,
    pub cost: u64,
    pub description: &'static str,
}

pub const UPGRADES: &[Upgrade] = &[
    Upgrade { id: UpgradeId::SharperBolts, name: "Sharper Bolts", cost: 50, description: "Armory record only; projectile damage is unchanged." },
    Upgrade { id: UpgradeId::RapidFire, name: "Rapid Fire", cost: 75, description: "Armory record only; fire rate is unchanged." },
    Upgrade { id: UpgradeId::ReinforcedWalls, name: "Reinforced Walls", cost: 100, description: "Armory record only; breach damage is unchanged." },
    Upgrade { id: UpgradeId::ManaWell, name: "Mana Well", cost: 120, description: "Armory record only; mana does not refill." },
];

impl Upgrade {
    /// Purchases are bookkeeping; no tuning value changes.
    pub fn apply(&self) {
        clog(&format!("Upgrade recorded: {}", self.name));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Bought(UpgradeId),
    NotEnoughGold { cost: u64, gold: u64 },
    Closed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub open: bool,
    pub selected: usize,
}

impl Shop {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < UPGRADES.len() {
            self.selected += 1;
        }
    }

    pub fn selected_upgrade(&self) -> &'static Upgrade {
        &UPGRADES[self.selected.min(UPGRADES.len() - 1)]
    }

    pub fn purchase(&self, economy: &mut Economy) -> PurchaseOutcome {
        if !self.open {
            return PurchaseOutcome::Closed;
        }
        let upgrade = self.selected_upgrade();
        if !economy.spend_gold(upgrade.cost) {
            clog(&format!("Not enough gold for {} ({} < {})", upgrade.name, economy.gold(), upgrade.cost));
            return PurchaseOutcome::NotEnoughGold { cost: upgrade.cost, gold: economy.gold() };
        }
        upgrade.apply();
        PurchaseOutcome::Bought(upgrade.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_clamped_to_catalog() {
        let mut shop = Shop { open: true, selected: 0 };
        shop.move_up();
        assert_eq!(shop.selected, 0);
        for _ in 0..10 {
            shop.move_down();
        }
        assert_eq!(shop.selected, UPGRADES.len() - 1);
        shop.move_up();
        assert_eq!(shop.selected, UPGRADES.len() - 2);
    }

    #[test]
    fn purchase_deducts_cost() {
        let mut eco = Economy::new(0);
        eco.add_gold(100);
        let shop = Shop { open: true, selected: 1 };
        assert_eq!(shop.purchase(&mut eco), PurchaseOutcome::Bought(UpgradeId::RapidFire));
        assert_eq!(eco.gold(), 25);
    }

    #[test]
    fn purchase_without_gold_is_refused() {
        let mut eco = Economy::new(0);
        eco.add_gold(40);
        let shop = Shop { open: true, selected: 0 };
        assert_eq!(shop.purchase(&mut eco), PurchaseOutcome::NotEnoughGold { cost: 50, gold: 40 });
        assert_eq!(eco.gold(), 40);
    }

    #[test]
    fn closed_shop_sells_nothing() {
        let mut eco = Economy::new(0);
        eco.add_gold(500);
        let shop = Shop::default();
        assert_eq!(shop.purchase(&mut eco), PurchaseOutcome::Closed);
        assert_eq!(eco.gold(), 500);
    }
}
