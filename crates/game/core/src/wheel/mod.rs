//! The spinning wheel: wedge definitions and angular layout.
//!
//! A [`WedgeSet`] is fixed at game start and never mutated mid-game. Wedge
//! identity is carried by [`WedgeKind`], a tagged variant, so a mystery or
//! t-shirt wedge can never be reinterpreted as cash by downstream code.

mod mystery;
mod spin;

pub use mystery::{MysteryCycle, MysteryStepResult, PRIZE_POOL, Prize};
pub use spin::{SpinOutcome, resolve_spin};

use std::f64::consts::TAU;

/// Outcome category of a single wedge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WedgeKind {
    /// Awards the given dollar value per correct consonant occurrence.
    Cash(u32),
    /// Triggers the mystery prize resolver; never resolves to cash.
    Mystery,
    /// Carries a T-SHIRT prize, held until the landing team solves.
    TShirt,
    /// Zeroes the active team's round bank and holdings, passes the turn.
    Bankrupt,
    /// Passes the turn with no scoring effect.
    LoseTurn,
}

/// One sector of the wheel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wedge {
    pub kind: WedgeKind,
    /// Display label ("$300", "MYSTERY", ...).
    pub label: String,
    /// Angular weight relative to the rest of the set.
    #[serde(default = "default_relative_size")]
    pub relative_size: f64,
}

fn default_relative_size() -> f64 {
    1.0
}

impl Wedge {
    pub fn cash(value: u32) -> Self {
        Self {
            kind: WedgeKind::Cash(value),
            label: format!("${value}"),
            relative_size: 1.0,
        }
    }

    pub fn mystery() -> Self {
        Self {
            kind: WedgeKind::Mystery,
            label: "MYSTERY".to_string(),
            relative_size: 1.0,
        }
    }

    pub fn tshirt(relative_size: f64) -> Self {
        Self {
            kind: WedgeKind::TShirt,
            label: "T-SHIRT".to_string(),
            relative_size,
        }
    }

    pub fn bankrupt() -> Self {
        Self {
            kind: WedgeKind::Bankrupt,
            label: "BANKRUPT".to_string(),
            relative_size: 1.0,
        }
    }

    pub fn lose_turn() -> Self {
        Self {
            kind: WedgeKind::LoseTurn,
            label: "LOSE A TURN".to_string(),
            relative_size: 1.0,
        }
    }
}

/// Ordered, immutable-during-a-game collection of wedges.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WedgeSet {
    wedges: Vec<Wedge>,
}

impl WedgeSet {
    pub fn new(wedges: Vec<Wedge>) -> Self {
        Self { wedges }
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    pub fn get(&self, index: usize) -> Option<&Wedge> {
        self.wedges.get(index)
    }

    pub fn len(&self) -> usize {
        self.wedges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }

    /// Total angular weight over all wedges.
    pub fn total_weight(&self) -> f64 {
        self.wedges.iter().map(|w| w.relative_size.max(0.0)).sum()
    }

    /// Which wedge sits under the pointer for a given wheel rotation.
    ///
    /// The pointer is fixed at the top of the wheel; the rotation is
    /// inverted to find the wheel-local angle under it, then the wedge
    /// spans are walked in order. Returns `None` for an empty or
    /// zero-weight set so a degenerate layout degrades to "no landing".
    pub fn wedge_at_pointer(&self, rotation: f64) -> Option<usize> {
        let total = self.total_weight();
        if self.wedges.is_empty() || total <= 0.0 {
            return None;
        }

        let normalized = rotation.rem_euclid(TAU);
        let pointer_angle = 3.0 * std::f64::consts::FRAC_PI_2;
        let at_pointer = (TAU - normalized + pointer_angle).rem_euclid(TAU);

        let mut accumulated = 0.0;
        for (i, wedge) in self.wedges.iter().enumerate() {
            let span = wedge.relative_size.max(0.0) / total * TAU;
            if at_pointer >= accumulated && at_pointer < accumulated + span {
                return Some(i);
            }
            accumulated += span;
        }

        // Floating point can leave the last sliver unclaimed at exactly TAU.
        Some(self.wedges.len() - 1)
    }
}
