//! Session setup: team roster and round count, clamped into a valid
//! initial [`GameState`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use jontune_content::PuzzleSet;
use jontune_core::{EngineConfig, GameState, Puzzle, Team, WedgeSet};

/// Player-provided game setup.
///
/// Values are requests, not guarantees: team count, name length, and round
/// count are clamped to valid ranges when the state is built.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionSetup {
    /// Requested team names; blank entries get a default name.
    pub team_names: Vec<String>,
    /// Requested number of main rounds.
    pub rounds: usize,
}

impl Default for SessionSetup {
    fn default() -> Self {
        Self {
            team_names: Vec::new(),
            rounds: 3,
        }
    }
}

impl SessionSetup {
    pub fn new(team_names: Vec<String>, rounds: usize) -> Self {
        Self { team_names, rounds }
    }

    /// Build the initial game state for this setup.
    pub(crate) fn build_state(&self, seed: u64, puzzles: PuzzleSet, wheel: WedgeSet) -> GameState {
        let teams = self.teams();
        let main = select_puzzles(seed, puzzles.main, self.rounds);
        GameState::new(seed, teams, main, puzzles.bonus, wheel)
    }

    /// Materialize the team roster, clamping count and name length.
    fn teams(&self) -> Vec<Team> {
        let count = self
            .team_names
            .len()
            .clamp(EngineConfig::MIN_TEAMS, EngineConfig::MAX_TEAMS);
        (0..count)
            .map(|i| {
                let name = self
                    .team_names
                    .get(i)
                    .map(|n| n.trim())
                    .filter(|n| !n.is_empty())
                    .map(|n| n.chars().take(EngineConfig::TEAM_NAME_MAX).collect())
                    .unwrap_or_else(|| format!("Team {}", i + 1));
                Team::new(name)
            })
            .collect()
    }
}

/// Shuffle the pool and keep `rounds` puzzles for the main game.
///
/// The round count is clamped to the pool size so a short puzzle file
/// still yields a playable game.
fn select_puzzles(seed: u64, mut pool: Vec<Puzzle>, rounds: usize) -> Vec<Puzzle> {
    let mut rng = StdRng::seed_from_u64(seed);
    pool.shuffle(&mut rng);
    let rounds = rounds.clamp(1, pool.len().max(1));
    pool.truncate(rounds);
    pool
}
