//! Phase machine for the whole game.

/// Sub-step of the main (wheel) rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MainStep {
    /// Active team may spin, buy a vowel, or solve.
    Idle,
    /// Wheel is traveling; a settle step is scheduled.
    Spinning,
    /// Mystery prize animation is running; solving is still allowed.
    MysteryCycling,
    /// A cash or prize landing is waiting on a consonant guess.
    AwaitingConsonant,
    /// Letter reveals are being staggered onto the board.
    Revealing,
    /// Round winner announcement is on screen.
    Winner,
}

/// Sub-step of the bonus round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BonusStep {
    /// The bonus prize animation is running.
    PrizeCycling,
    /// Winner is picking their three extra consonants.
    PickConsonants,
    /// Winner is picking their one extra vowel.
    PickVowel,
    /// Letters revealed; waiting for the team to start the clock.
    AwaitingReady,
    /// Countdown running; the team may solve.
    Countdown,
    /// Win or lose screen is up.
    Resolved,
}

/// Top-level game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GamePhase {
    Main(MainStep),
    /// Totals tied after the last round; a random pick is animating.
    TieBreak,
    Bonus(BonusStep),
    /// Game over; no further actions accepted.
    Done,
}

impl GamePhase {
    pub fn main_step(&self) -> Option<MainStep> {
        match self {
            Self::Main(step) => Some(*step),
            _ => None,
        }
    }

    pub fn bonus_step(&self) -> Option<BonusStep> {
        match self {
            Self::Bonus(step) => Some(*step),
            _ => None,
        }
    }
}
