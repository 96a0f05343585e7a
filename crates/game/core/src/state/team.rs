//! Team identity and scoring banks.

use crate::wheel::Prize;

/// One competing team.
///
/// `round` is the at-risk bank for the current puzzle; `total` is the
/// safe cross-round score. Prizes follow the same split: `holding` is
/// at-risk until a solve, `prizes` is banked.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Team {
    pub name: String,
    /// Banked score carried across rounds.
    pub total: u32,
    /// At-risk bank for the current round; lost to bankrupts.
    pub round: u32,
    /// Banked prizes, kept for the rest of the game.
    pub prizes: Vec<Prize>,
    /// Prizes held this round, banked only if this team solves.
    pub holding: Vec<Prize>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Wipe the at-risk bank and holdings (bankrupt, or round rollover).
    pub fn clear_round(&mut self) {
        self.round = 0;
        self.holding.clear();
    }

    /// Bank the round: move the round value plus bonus into the total
    /// and convert held prizes into kept ones.
    pub fn bank_round(&mut self, bonus: u32) {
        self.total += self.round + bonus;
        self.round = 0;
        self.prizes.append(&mut self.holding);
    }
}
