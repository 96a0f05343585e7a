//! Mystery prize resolution.
//!
//! Landing on a mystery wedge starts a visible cycling animation over the
//! prize pool; the committed prize is a fresh uniform draw, independent of
//! where the animation happened to stop. A mystery wedge can therefore
//! never resolve to cash.

use strum::{Display, EnumString};

/// Physical prize awarded by mystery wedges and the bonus round.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, serde::Serialize, serde::Deserialize,
)]
pub enum Prize {
    #[strum(serialize = "PIN")]
    Pin,
    #[strum(serialize = "STICKER")]
    Sticker,
    #[strum(serialize = "T-SHIRT")]
    TShirt,
    #[strum(serialize = "MAGNET")]
    Magnet,
    #[strum(serialize = "KEYCHAIN")]
    Keychain,
}

/// Pool drawn from by mystery wedges and the bonus prize cycle.
pub const PRIZE_POOL: [Prize; 5] = [
    Prize::Pin,
    Prize::Sticker,
    Prize::TShirt,
    Prize::Magnet,
    Prize::Keychain,
];

/// Outcome of advancing a [`MysteryCycle`] by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MysteryStepResult {
    /// Still cycling; the displayed prize changed.
    Cycling(Prize),
    /// The cycle finished and the prize committed.
    Committed(Prize),
}

/// Animated walk over the prize pool with a predetermined step count.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MysteryCycle {
    /// Prize currently shown by the animation.
    current: Option<Prize>,
    cursor: usize,
    steps_left: u32,
}

impl MysteryCycle {
    /// Start a cycle of `min_steps` plus up to `extra_steps` random steps.
    pub fn start(
        rng: &dyn crate::env::RngOracle,
        seed: u64,
        min_steps: u32,
        extra_steps: u32,
    ) -> Self {
        let steps = min_steps + rng.range(seed, 0, extra_steps);
        Self {
            current: None,
            cursor: 0,
            steps_left: steps.max(1),
        }
    }

    /// Advance one step. The final step draws the committed prize
    /// uniformly, ignoring where the walk stopped.
    pub fn step(&mut self, rng: &dyn crate::env::RngOracle, commit_seed: u64) -> MysteryStepResult {
        self.steps_left = self.steps_left.saturating_sub(1);
        if self.steps_left == 0 {
            let prize = PRIZE_POOL[rng.index(commit_seed, PRIZE_POOL.len())];
            self.current = Some(prize);
            return MysteryStepResult::Committed(prize);
        }
        self.cursor = (self.cursor + 1) % PRIZE_POOL.len();
        let prize = PRIZE_POOL[self.cursor];
        self.current = Some(prize);
        MysteryStepResult::Cycling(prize)
    }

    /// Prize currently displayed by the animation, if it has stepped at all.
    pub fn current(&self) -> Option<Prize> {
        self.current
    }

    /// Whether the cycle has committed.
    pub fn is_done(&self) -> bool {
        self.steps_left == 0
    }

    /// Cut the animation short, e.g. when a solve interrupts it.
    ///
    /// Keeps the last displayed prize if there is one, otherwise draws
    /// fresh so an interrupt on the very first frame still yields a prize.
    pub fn finalize_early(&mut self, rng: &dyn crate::env::RngOracle, seed: u64) -> Prize {
        self.steps_left = 0;
        let prize = self
            .current
            .unwrap_or_else(|| PRIZE_POOL[rng.index(seed, PRIZE_POOL.len())]);
        self.current = Some(prize);
        prize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn prize_labels_match_display_strings() {
        assert_eq!(Prize::Pin.to_string(), "PIN");
        assert_eq!(Prize::TShirt.to_string(), "T-SHIRT");
        assert_eq!(Prize::Keychain.to_string(), "KEYCHAIN");
        assert_eq!("STICKER".parse::<Prize>().unwrap(), Prize::Sticker);
    }

    #[test]
    fn cycle_runs_its_step_budget_then_commits() {
        let rng = PcgRng;
        let mut cycle = MysteryCycle::start(&rng, 1, 5, 0);
        for _ in 0..4 {
            assert!(matches!(
                cycle.step(&rng, 99),
                MysteryStepResult::Cycling(_)
            ));
            assert!(!cycle.is_done());
        }
        assert!(matches!(
            cycle.step(&rng, 99),
            MysteryStepResult::Committed(_)
        ));
        assert!(cycle.is_done());
    }

    #[test]
    fn commit_is_uniform_draw_not_walk_position() {
        let rng = PcgRng;
        // With a fixed step count the walk always parks on the same pool
        // slot, so a commit tied to walk position would never vary.
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200u64 {
            let mut cycle = MysteryCycle::start(&rng, 1, 3, 0);
            cycle.step(&rng, 0);
            cycle.step(&rng, 0);
            if let MysteryStepResult::Committed(prize) = cycle.step(&rng, seed) {
                seen.insert(prize);
            }
        }
        assert_eq!(seen.len(), PRIZE_POOL.len());
    }

    #[test]
    fn finalize_early_keeps_displayed_prize() {
        let rng = PcgRng;
        let mut cycle = MysteryCycle::start(&rng, 1, 10, 0);
        cycle.step(&rng, 0);
        let shown = cycle.current().unwrap();
        assert_eq!(cycle.finalize_early(&rng, 7), shown);
        assert!(cycle.is_done());
    }

    #[test]
    fn finalize_early_before_any_step_draws_fresh() {
        let rng = PcgRng;
        let mut cycle = MysteryCycle::start(&rng, 1, 10, 0);
        let prize = cycle.finalize_early(&rng, 7);
        assert!(PRIZE_POOL.contains(&prize));
    }
}
