//! Game rule constants and tunable timing parameters.

/// Tunable rule constants for a game session.
///
/// Timing values are pacing data consumed by the scheduler that drives the
/// engine; they never affect which transition is legal, only when scheduled
/// steps fire.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cost of buying a vowel, deducted from the active team's round bank.
    pub vowel_cost: u32,
    /// Flat bonus added to the solver's total on top of their round bank.
    pub solve_bonus: u32,
    /// Bonus round solve window in seconds.
    pub bonus_countdown_secs: u32,

    /// Stagger between letter reveals after a correct guess.
    pub letter_reveal_ms: u64,
    /// Stagger between letter reveals during the post-solve sweep.
    pub solve_reveal_ms: u64,
    /// Interval between mystery prize cycling steps.
    pub mystery_step_ms: u64,
    /// Pause on the committed mystery prize before the consonant guess opens.
    pub mystery_settle_ms: u64,
    /// Interval between tie-break cycling steps.
    pub tie_break_step_ms: u64,
    /// Pause on the tie-break winner before the bonus round starts.
    pub tie_break_settle_ms: u64,
    /// How long the winner announcement stays up before auto-advancing.
    pub winner_display_ms: u64,
    /// How long the bonus win/lose screen stays up before the game ends.
    pub bonus_result_display_ms: u64,
    /// Interval between bonus countdown ticks.
    pub bonus_tick_ms: u64,
    /// Base travel time of a spin before the wheel settles.
    pub spin_settle_base_ms: u64,
    /// Additional travel time per point of spin power.
    pub spin_settle_per_power_ms: u64,
}

impl EngineConfig {
    // ===== fixed rule constants =====
    /// Maximum team display-name length, enforced at setup.
    pub const TEAM_NAME_MAX: usize = 15;
    /// Minimum number of teams in a session.
    pub const MIN_TEAMS: usize = 2;
    /// Maximum number of teams in a session.
    pub const MAX_TEAMS: usize = 100;
    /// Consonants picked by the player in the bonus round.
    pub const BONUS_CONSONANT_PICKS: usize = 3;
    /// Letters revealed for free in every bonus round.
    pub const GIVEN_LETTERS: [char; 6] = ['R', 'S', 'T', 'L', 'N', 'E'];

    // ===== tunable defaults =====
    pub const DEFAULT_VOWEL_COST: u32 = 800;
    pub const DEFAULT_SOLVE_BONUS: u32 = 300;
    pub const DEFAULT_BONUS_COUNTDOWN_SECS: u32 = 20;

    pub fn new() -> Self {
        Self {
            vowel_cost: Self::DEFAULT_VOWEL_COST,
            solve_bonus: Self::DEFAULT_SOLVE_BONUS,
            bonus_countdown_secs: Self::DEFAULT_BONUS_COUNTDOWN_SECS,
            letter_reveal_ms: 750,
            solve_reveal_ms: 500,
            mystery_step_ms: 100,
            mystery_settle_ms: 900,
            tie_break_step_ms: 150,
            tie_break_settle_ms: 1200,
            winner_display_ms: 10_000,
            bonus_result_display_ms: 7_000,
            bonus_tick_ms: 1_000,
            spin_settle_base_ms: 1_800,
            spin_settle_per_power_ms: 25,
        }
    }

    /// Travel time for a spin of the given power.
    pub fn spin_settle_ms(&self, power: u8) -> u64 {
        self.spin_settle_base_ms + self.spin_settle_per_power_ms * u64::from(power)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
