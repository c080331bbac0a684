use serde::{Deserialize, Serialize};

/// Gold, mana and score for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    gold: u64,
    mana: u32,
    score: u64,
}

impl Economy {
    pub fn new(starting_mana: u32) -> Self {
        Self { gold: 0, mana: starting_mana, score: 0 }
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn add_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Deducts `amount` only when enough mana is available.
    pub fn use_mana(&mut self, amount: u32) -> bool {
        if self.mana >= amount {
            self.mana -= amount;
            return true;
        }
        false
    }

    /// Deducts `amount` only when enough gold is available.
    pub fn spend_gold(&mut self, amount: u64) -> bool {
        if self.gold >= amount {
            self.gold -= amount;
            return true;
        }
        false
    }
}
