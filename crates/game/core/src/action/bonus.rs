//! The bonus round: prize selection, letter picks, and the timed solve.

use std::collections::BTreeSet;

use crate::action::{ActionTransition, Effects, SystemStep};
use crate::config::EngineConfig;
use crate::cues::Cue;
use crate::env::GameEnv;
use crate::state::{BonusResult, BonusStep, GamePhase, GameState, is_letter, is_vowel};
use crate::wheel::MysteryStepResult;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BonusError {
    #[error("bonus round is not in the right step (currently {phase:?})")]
    WrongStep { phase: GamePhase },
    #[error("no bonus round is in progress")]
    NoBonusState,
    #[error("no prize cycle is running")]
    NoCycle,
    #[error("'{letter}' is not a consonant")]
    NotAConsonant { letter: char },
    #[error("'{letter}' is not a vowel")]
    NotAVowel { letter: char },
    #[error("'{letter}' is one of the given letters")]
    GivenLetter { letter: char },
    #[error("'{letter}' was already chosen")]
    AlreadyChosen { letter: char },
    #[error("bonus round is already resolved")]
    AlreadyResolved,
}

fn bonus_step(state: &GameState) -> Option<BonusStep> {
    state.phase.bonus_step()
}

/// One frame of the bonus prize animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusPrizeStepAction;

impl ActionTransition for BonusPrizeStepAction {
    type Error = BonusError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), BonusError> {
        if bonus_step(state) != Some(BonusStep::PrizeCycling) {
            return Err(BonusError::WrongStep { phase: state.phase });
        }
        let bonus = state.bonus.as_ref().ok_or(BonusError::NoBonusState)?;
        if bonus.cycle.is_none() {
            return Err(BonusError::NoCycle);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, BonusError> {
        let commit_seed = state.seed(0);
        let result = {
            let bonus = state.bonus.as_mut().ok_or(BonusError::NoBonusState)?;
            let cycle = bonus.cycle.as_mut().ok_or(BonusError::NoCycle)?;
            cycle.step(env.rng, commit_seed)
        };

        match result {
            MysteryStepResult::Cycling(_) => {
                state.schedule(SystemStep::BonusPrizeStep, env.config.mystery_step_ms);
                Ok(Effects::none())
            }
            MysteryStepResult::Committed(prize) => {
                let bonus = state.bonus.as_mut().ok_or(BonusError::NoBonusState)?;
                bonus.prize = Some(prize);
                bonus.cycle = None;
                state.phase = GamePhase::Bonus(BonusStep::PickConsonants);
                state.pending = None;
                Ok(Effects::cue(Cue::MysteryLand))
            }
        }
    }
}

/// Winner picks one of their extra letters (3 consonants, then 1 vowel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BonusPickLetterAction {
    pub letter: char,
}

impl ActionTransition for BonusPickLetterAction {
    type Error = BonusError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), BonusError> {
        let letter = self.letter.to_ascii_uppercase();
        let bonus = state.bonus.as_ref().ok_or(BonusError::NoBonusState)?;
        if EngineConfig::GIVEN_LETTERS.contains(&letter) {
            return Err(BonusError::GivenLetter { letter });
        }
        match bonus_step(state) {
            Some(BonusStep::PickConsonants) => {
                if !is_letter(letter) || is_vowel(letter) {
                    return Err(BonusError::NotAConsonant { letter: self.letter });
                }
                if bonus.chosen_consonants.contains(&letter) {
                    return Err(BonusError::AlreadyChosen { letter });
                }
                Ok(())
            }
            Some(BonusStep::PickVowel) => {
                if !is_vowel(letter) {
                    return Err(BonusError::NotAVowel { letter: self.letter });
                }
                Ok(())
            }
            _ => Err(BonusError::WrongStep { phase: state.phase }),
        }
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Effects, BonusError> {
        let letter = self.letter.to_ascii_uppercase();
        let step = bonus_step(state);
        let bonus = state.bonus.as_mut().ok_or(BonusError::NoBonusState)?;

        match step {
            Some(BonusStep::PickConsonants) => {
                bonus.chosen_consonants.push(letter);
                if bonus.chosen_consonants.is_full() {
                    state.phase = GamePhase::Bonus(BonusStep::PickVowel);
                }
                Ok(Effects::cue(Cue::CorrectLetter))
            }
            Some(BonusStep::PickVowel) => {
                bonus.chosen_vowel = Some(letter);
                // The vowel pick reveals everything at once; bonus reveals
                // are instant, unlike the main-round stagger.
                let mut visible: BTreeSet<char> =
                    EngineConfig::GIVEN_LETTERS.iter().copied().collect();
                visible.extend(bonus.chosen_consonants.iter().copied());
                visible.insert(letter);
                state.board.reveal_matching(&visible);
                state.phase = GamePhase::Bonus(BonusStep::AwaitingReady);
                Ok(Effects::cue(Cue::CorrectLetter))
            }
            _ => Err(BonusError::WrongStep { phase: state.phase }),
        }
    }
}

/// Winner starts the solve clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BonusReadyAction;

impl ActionTransition for BonusReadyAction {
    type Error = BonusError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), BonusError> {
        if bonus_step(state) != Some(BonusStep::AwaitingReady) {
            return Err(BonusError::WrongStep { phase: state.phase });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, BonusError> {
        let bonus = state.bonus.as_mut().ok_or(BonusError::NoBonusState)?;
        bonus.countdown = env.config.bonus_countdown_secs;
        state.phase = GamePhase::Bonus(BonusStep::Countdown);
        state.schedule(SystemStep::BonusCountdownTick, env.config.bonus_tick_ms);
        Ok(Effects::cue(Cue::StartGame))
    }
}

/// One second elapsed on the bonus clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusCountdownTickAction;

impl ActionTransition for BonusCountdownTickAction {
    type Error = BonusError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), BonusError> {
        if bonus_step(state) != Some(BonusStep::Countdown) {
            return Err(BonusError::WrongStep { phase: state.phase });
        }
        let bonus = state.bonus.as_ref().ok_or(BonusError::NoBonusState)?;
        if bonus.result.is_some() {
            return Err(BonusError::AlreadyResolved);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, BonusError> {
        let bonus = state.bonus.as_mut().ok_or(BonusError::NoBonusState)?;
        bonus.countdown = bonus.countdown.saturating_sub(1);
        if bonus.countdown == 0 {
            bonus.result = Some(BonusResult::Lose);
            state.phase = GamePhase::Bonus(BonusStep::Resolved);
            state.schedule(
                SystemStep::BonusResultTimeout,
                env.config.bonus_result_display_ms,
            );
            return Ok(Effects::cue(Cue::Buzzer));
        }
        state.schedule(SystemStep::BonusCountdownTick, env.config.bonus_tick_ms);
        Ok(Effects::none())
    }
}

/// Winner submits a full-answer guess during the countdown.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BonusSolveAction {
    pub guess: String,
}

impl ActionTransition for BonusSolveAction {
    type Error = BonusError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), BonusError> {
        if bonus_step(state) != Some(BonusStep::Countdown) {
            return Err(BonusError::WrongStep { phase: state.phase });
        }
        let bonus = state.bonus.as_ref().ok_or(BonusError::NoBonusState)?;
        if bonus.result.is_some() {
            return Err(BonusError::AlreadyResolved);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, BonusError> {
        let correct = state.board.matches_guess(&self.guess);
        let bonus = state.bonus.as_mut().ok_or(BonusError::NoBonusState)?;
        let team = bonus.team;

        let effects = if correct {
            bonus.result = Some(BonusResult::Win);
            let prize = bonus.prize;
            state.board.reveal_all();
            if let Some(prize) = prize {
                state.teams[team].prizes.push(prize);
            }
            state.stats.team_mut(team).puzzles_solved += 1;
            Effects::cue(Cue::Solve)
        } else {
            // A wrong bonus guess loses immediately; the clock does not
            // get a second chance.
            bonus.result = Some(BonusResult::Lose);
            state.stats.team_mut(team).incorrect_guesses += 1;
            Effects::cue(Cue::Buzzer)
        };

        state.phase = GamePhase::Bonus(BonusStep::Resolved);
        state.schedule(
            SystemStep::BonusResultTimeout,
            env.config.bonus_result_display_ms,
        );
        Ok(effects)
    }
}

/// Bonus result screen expired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusResultTimeoutAction;

impl ActionTransition for BonusResultTimeoutAction {
    type Error = BonusError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), BonusError> {
        if bonus_step(state) != Some(BonusStep::Resolved) {
            return Err(BonusError::WrongStep { phase: state.phase });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Effects, BonusError> {
        state.phase = GamePhase::Done;
        state.pending = None;
        Ok(Effects::none())
    }
}

/// Player dismisses the bonus result screen early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkipBonusResultAction;

impl ActionTransition for SkipBonusResultAction {
    type Error = BonusError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), BonusError> {
        if bonus_step(state) != Some(BonusStep::Resolved) {
            return Err(BonusError::WrongStep { phase: state.phase });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Effects, BonusError> {
        state.phase = GamePhase::Done;
        state.pending = None;
        Ok(Effects::none())
    }
}
