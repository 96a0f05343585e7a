//! Game state: everything a session needs to replay deterministically.

mod board;
mod phase;
mod stats;
mod team;
mod turn;

pub use board::{Board, BoardCell, Puzzle, is_letter, is_vowel};
pub use phase::{BonusStep, GamePhase, MainStep};
pub use stats::{GameStats, TeamStats};
pub use team::Team;
pub use turn::{LandedOutcome, LandedWedge, TurnState};

use arrayvec::ArrayVec;

use crate::action::SystemStep;
use crate::config::EngineConfig;
use crate::env::compute_seed;
use crate::wheel::{MysteryCycle, Prize, WedgeSet};

/// The wheel and its current rest rotation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WheelState {
    pub set: WedgeSet,
    /// Rest rotation in radians; grows monotonically across spins.
    pub rotation: f64,
}

/// A system step the scheduler should feed back after a delay.
///
/// Transitions never sleep; anything time-driven is expressed as data
/// here and executed by whoever drives the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PendingStep {
    pub step: SystemStep,
    pub delay_ms: u64,
}

/// Bonus round outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BonusResult {
    Win,
    Lose,
}

/// State scoped to the bonus round.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BonusState {
    /// Team playing the bonus round.
    pub team: usize,
    /// Prize at stake, once the cycle commits.
    pub prize: Option<Prize>,
    /// Running prize animation.
    pub cycle: Option<MysteryCycle>,
    pub chosen_consonants: ArrayVec<char, { EngineConfig::BONUS_CONSONANT_PICKS }>,
    pub chosen_vowel: Option<char>,
    /// Seconds remaining on the solve clock.
    pub countdown: u32,
    pub result: Option<BonusResult>,
}

impl BonusState {
    pub fn new(team: usize) -> Self {
        Self {
            team,
            prize: None,
            cycle: None,
            chosen_consonants: ArrayVec::new(),
            chosen_vowel: None,
            countdown: 0,
            result: None,
        }
    }
}

/// State for the tie-break animation between tied leaders.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TieBreakState {
    /// Teams tied for the lead, by index.
    pub contenders: Vec<usize>,
    /// Contender currently highlighted by the animation.
    pub highlighted: Option<usize>,
    pub cursor: usize,
    pub steps_left: u32,
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GameState {
    /// Base seed fixed at game start; with the action log it determines
    /// every random draw of the session.
    pub game_seed: u64,
    /// Count of successfully executed actions, mixed into draw seeds.
    pub nonce: u64,
    pub phase: GamePhase,
    pub teams: Vec<Team>,
    /// Main-round puzzles in play order.
    pub puzzles: Vec<Puzzle>,
    /// Candidate puzzles for the bonus round.
    pub bonus_pool: Vec<Puzzle>,
    /// Index into `puzzles` of the round in progress.
    pub puzzle_index: usize,
    pub board: Board,
    pub wheel: WheelState,
    pub turn: TurnState,
    pub bonus: Option<BonusState>,
    pub tie_break: Option<TieBreakState>,
    pub stats: GameStats,
    /// Next scheduled system step, if any.
    pub pending: Option<PendingStep>,
    /// Team that opened the current round; rotates each round.
    pub round_starter: usize,
}

impl GameState {
    /// Start a new game on the first puzzle with the first team up.
    pub fn new(
        game_seed: u64,
        teams: Vec<Team>,
        puzzles: Vec<Puzzle>,
        bonus_pool: Vec<Puzzle>,
        wheel: WedgeSet,
    ) -> Self {
        let board = puzzles
            .first()
            .map(Board::from_puzzle)
            .unwrap_or_default();
        let stats = GameStats::new(teams.len());
        // An empty roster has nothing to play; the game opens finished.
        let phase = if teams.is_empty() {
            GamePhase::Done
        } else {
            GamePhase::Main(MainStep::Idle)
        };
        Self {
            game_seed,
            nonce: 0,
            phase,
            teams,
            puzzles,
            bonus_pool,
            puzzle_index: 0,
            board,
            wheel: WheelState {
                set: wheel,
                rotation: 0.0,
            },
            turn: TurnState::default(),
            bonus: None,
            tie_break: None,
            stats,
            pending: None,
            round_starter: 0,
        }
    }

    /// Seed for a random draw within the current action.
    ///
    /// Distinct `context` values give independent draws; the nonce ties
    /// the draw to this point in the action log.
    pub fn seed(&self, context: u32) -> u64 {
        compute_seed(self.game_seed, self.nonce, context)
    }

    /// Schedule a system step to fire after `delay_ms`.
    pub fn schedule(&mut self, step: SystemStep, delay_ms: u64) {
        self.pending = Some(PendingStep { step, delay_ms });
    }

    pub fn active_team(&self) -> &Team {
        &self.teams[self.turn.active_team]
    }

    pub fn active_team_mut(&mut self) -> &mut Team {
        &mut self.teams[self.turn.active_team]
    }

    /// Indices of the teams with the highest total score.
    pub fn leaders(&self) -> Vec<usize> {
        let best = self.teams.iter().map(|t| t.total).max().unwrap_or(0);
        self.teams
            .iter()
            .enumerate()
            .filter(|(_, t)| t.total == best)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::Wedge;

    fn state() -> GameState {
        GameState::new(
            7,
            vec![Team::new("A"), Team::new("B")],
            vec![Puzzle {
                category: "Phrase".to_string(),
                answer: "HELLO".to_string(),
            }],
            vec![],
            WedgeSet::new(vec![Wedge::cash(100)]),
        )
    }

    #[test]
    fn new_game_opens_on_first_puzzle_idle() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Main(MainStep::Idle));
        assert_eq!(state.board.answer(), "HELLO");
        assert_eq!(state.turn.active_team, 0);
        assert_eq!(state.stats.teams().len(), 2);
    }

    #[test]
    fn empty_roster_opens_finished() {
        let state = GameState::new(7, vec![], vec![], vec![], WedgeSet::default());
        assert_eq!(state.phase, GamePhase::Done);
        assert!(state.stats.teams().is_empty());
    }

    #[test]
    fn leaders_returns_all_tied_teams() {
        let mut state = state();
        state.teams[0].total = 500;
        state.teams[1].total = 500;
        assert_eq!(state.leaders(), vec![0, 1]);
        state.teams[1].total = 600;
        assert_eq!(state.leaders(), vec![1]);
    }

    #[test]
    fn seed_depends_on_nonce() {
        let mut state = state();
        let a = state.seed(0);
        state.nonce += 1;
        assert_ne!(a, state.seed(0));
    }
}
