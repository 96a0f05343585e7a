//! Per-puzzle turn bookkeeping.

use std::collections::{BTreeSet, VecDeque};

use crate::wheel::{MysteryCycle, Prize};

/// What a settled wedge means for scoring, with spin attribution.
///
/// Bankrupt and lose-turn wedges resolve immediately and are never
/// stored here; only landings that stay relevant across later actions
/// (cash multipliers, held prizes) persist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LandedOutcome {
    /// Per-occurrence consonant value.
    Cash(u32),
    /// Prize to be captured by the first correct consonant.
    Prize(Prize),
}

/// A settled landing, attributed to the team that spun.
///
/// Attribution matters: if the turn later passes without the prize being
/// captured, it still belongs to the spinner, not whoever solves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LandedWedge {
    pub wedge_index: usize,
    pub outcome: LandedOutcome,
    /// Team that made the spin.
    pub owner: usize,
    /// Whether a prize on this landing has already moved into holdings.
    pub prize_captured: bool,
}

/// State scoped to the current puzzle's turn flow.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TurnState {
    /// Index of the team whose turn it is.
    pub active_team: usize,
    /// All letters guessed this puzzle, correct or not.
    pub guessed_letters: BTreeSet<char>,
    /// Last settled landing still relevant to scoring.
    pub landed: Option<LandedWedge>,
    /// Wedge index the wheel is traveling toward, set at spin time.
    pub pending_landing: Option<usize>,
    /// Whether anyone has spun yet this puzzle (gates vowels and solves).
    pub has_spun: bool,
    /// A solve has been accepted; reveals are sweeping the board.
    pub finishing: bool,
    /// After a vowel reveal, return to AwaitingConsonant instead of Idle.
    pub resume_awaiting: bool,
    /// Running mystery prize animation, if any.
    pub mystery: Option<MysteryCycle>,
    /// Cell indices still waiting on a staggered reveal.
    pub reveal_queue: VecDeque<usize>,
    /// Team that solved the current puzzle, once accepted.
    pub solver: Option<usize>,
}

impl TurnState {
    /// Reset for a fresh puzzle, keeping the given active team.
    pub fn reset_for_puzzle(&mut self, active_team: usize) {
        *self = Self {
            active_team,
            ..Self::default()
        };
    }

    /// Hand the turn to the next team and void any unsettled landing.
    pub fn pass_turn(&mut self, team_count: usize) {
        if team_count > 0 {
            self.active_team = (self.active_team + 1) % team_count;
        }
        self.pending_landing = None;
        self.mystery = None;
    }
}
