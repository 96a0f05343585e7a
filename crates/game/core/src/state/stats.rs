//! End-of-game statistics, accumulated as a side effect of play.

/// Counters for one team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamStats {
    pub spins: u32,
    pub bankrupts: u32,
    pub lose_turns: u32,
    pub puzzles_solved: u32,
    pub vowels_bought: u32,
    pub correct_guesses: u32,
    pub incorrect_guesses: u32,
}

/// Per-team statistics, indexed in parallel with the team list.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameStats {
    teams: Vec<TeamStats>,
}

impl GameStats {
    pub fn new(team_count: usize) -> Self {
        Self {
            teams: vec![TeamStats::default(); team_count],
        }
    }

    pub fn teams(&self) -> &[TeamStats] {
        &self.teams
    }

    pub fn team(&self, index: usize) -> Option<&TeamStats> {
        self.teams.get(index)
    }

    pub fn team_mut(&mut self, index: usize) -> &mut TeamStats {
        &mut self.teams[index]
    }

    /// Game-wide counters, summed across all teams.
    pub fn totals(&self) -> TeamStats {
        self.teams
            .iter()
            .fold(TeamStats::default(), |acc, team| TeamStats {
                spins: acc.spins + team.spins,
                bankrupts: acc.bankrupts + team.bankrupts,
                lose_turns: acc.lose_turns + team.lose_turns,
                puzzles_solved: acc.puzzles_solved + team.puzzles_solved,
                vowels_bought: acc.vowels_bought + team.vowels_bought,
                correct_guesses: acc.correct_guesses + team.correct_guesses,
                incorrect_guesses: acc.incorrect_guesses + team.incorrect_guesses,
            })
    }
}
