//! Consonant guesses, vowel purchases, and the staggered reveal loop.

use crate::action::{ActionTransition, Effects, SystemStep, solve::finish_puzzle};
use crate::cues::Cue;
use crate::env::GameEnv;
use crate::state::{GamePhase, GameState, LandedOutcome, MainStep, is_letter, is_vowel};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LetterError {
    #[error("not awaiting a consonant guess (currently {phase:?})")]
    NotAwaitingConsonant { phase: GamePhase },
    #[error("'{letter}' is not a consonant")]
    NotAConsonant { letter: char },
    #[error("'{letter}' is not a vowel")]
    NotAVowel { letter: char },
    #[error("'{letter}' was already guessed this puzzle")]
    AlreadyGuessed { letter: char },
    #[error("vowels can only be bought between spins or while awaiting a consonant")]
    VowelNotAllowedNow { phase: GamePhase },
    #[error("nobody has spun yet this puzzle")]
    MustSpinFirst,
    #[error("round bank {bank} is below the vowel cost {cost}")]
    InsufficientBank { bank: u32, cost: u32 },
    #[error("no reveal is in progress")]
    NotRevealing,
    #[error("board is not fully revealed")]
    BoardNotRevealed,
    #[error("puzzle is already being finished")]
    PuzzleFinishing,
}

/// Active team guesses a consonant while a landing awaits one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GuessConsonantAction {
    pub letter: char,
}

impl ActionTransition for GuessConsonantAction {
    type Error = LetterError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), LetterError> {
        if state.phase != GamePhase::Main(MainStep::AwaitingConsonant) {
            return Err(LetterError::NotAwaitingConsonant { phase: state.phase });
        }
        let letter = self.letter.to_ascii_uppercase();
        if !is_letter(letter) || is_vowel(letter) {
            return Err(LetterError::NotAConsonant { letter: self.letter });
        }
        if state.turn.guessed_letters.contains(&letter) {
            return Err(LetterError::AlreadyGuessed { letter });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, LetterError> {
        let letter = self.letter.to_ascii_uppercase();
        let active = state.turn.active_team;
        state.turn.guessed_letters.insert(letter);

        let hits = state.board.hit_indices(letter);
        if hits.is_empty() {
            state.stats.team_mut(active).incorrect_guesses += 1;
            // A missed consonant forfeits the round bank along with the turn.
            state.active_team_mut().round = 0;
            state.turn.pass_turn(state.teams.len());
            state.phase = GamePhase::Main(MainStep::Idle);
            return Ok(Effects::cue(Cue::WrongLetter));
        }

        state.stats.team_mut(active).correct_guesses += 1;
        if let Some(landed) = state.turn.landed.as_mut() {
            match landed.outcome {
                LandedOutcome::Cash(value) => {
                    state.teams[active].round += value * hits.len() as u32;
                }
                // Prize value is the prize itself, captured once by the
                // team that landed the wedge.
                LandedOutcome::Prize(prize) => {
                    if !landed.prize_captured {
                        landed.prize_captured = true;
                        let owner = landed.owner;
                        state.teams[owner].holding.push(prize);
                    }
                }
            }
        }

        state.board.reveal(hits[0]);
        state.turn.reveal_queue = hits[1..].iter().copied().collect();
        state.phase = GamePhase::Main(MainStep::Revealing);
        state.schedule(SystemStep::RevealStep, env.config.letter_reveal_ms);
        Ok(Effects::cue(Cue::CorrectLetter))
    }
}

/// Active team buys a vowel from their round bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuyVowelAction {
    pub letter: char,
}

impl ActionTransition for BuyVowelAction {
    type Error = LetterError;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), LetterError> {
        match state.phase {
            GamePhase::Main(MainStep::Idle | MainStep::AwaitingConsonant) => {}
            _ => return Err(LetterError::VowelNotAllowedNow { phase: state.phase }),
        }
        if state.turn.finishing {
            return Err(LetterError::PuzzleFinishing);
        }
        if !state.turn.has_spun {
            return Err(LetterError::MustSpinFirst);
        }
        let letter = self.letter.to_ascii_uppercase();
        if !is_vowel(letter) {
            return Err(LetterError::NotAVowel { letter: self.letter });
        }
        if state.turn.guessed_letters.contains(&letter) {
            return Err(LetterError::AlreadyGuessed { letter });
        }
        let bank = state.active_team().round;
        if bank < env.config.vowel_cost {
            return Err(LetterError::InsufficientBank {
                bank,
                cost: env.config.vowel_cost,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, LetterError> {
        let letter = self.letter.to_ascii_uppercase();
        let active = state.turn.active_team;

        // The cost is paid whether or not the vowel is on the board.
        state.active_team_mut().round -= env.config.vowel_cost;
        state.stats.team_mut(active).vowels_bought += 1;
        state.turn.guessed_letters.insert(letter);

        let hits = state.board.hit_indices(letter);
        if hits.is_empty() {
            // No hit costs the fee but keeps the turn, unlike a consonant.
            state.stats.team_mut(active).incorrect_guesses += 1;
            return Ok(Effects::cue(Cue::WrongLetter));
        }

        state.stats.team_mut(active).correct_guesses += 1;
        state.turn.resume_awaiting = state.phase == GamePhase::Main(MainStep::AwaitingConsonant);
        state.board.reveal(hits[0]);
        state.turn.reveal_queue = hits[1..].iter().copied().collect();
        state.phase = GamePhase::Main(MainStep::Revealing);
        state.schedule(SystemStep::RevealStep, env.config.letter_reveal_ms);
        Ok(Effects::cue(Cue::CorrectLetter))
    }
}

/// Reveal the next queued cell, or finish the reveal sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStepAction;

impl ActionTransition for RevealStepAction {
    type Error = LetterError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), LetterError> {
        if state.phase != GamePhase::Main(MainStep::Revealing) {
            return Err(LetterError::NotRevealing);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, LetterError> {
        if let Some(index) = state.turn.reveal_queue.pop_front() {
            state.board.reveal(index);
            let delay = if state.turn.finishing {
                env.config.solve_reveal_ms
            } else {
                env.config.letter_reveal_ms
            };
            // One more step runs after the queue drains to pick the exit.
            state.schedule(SystemStep::RevealStep, delay);
            return Ok(Effects::cue(Cue::CorrectLetter));
        }

        if state.turn.finishing {
            state.phase = GamePhase::Main(MainStep::Winner);
            state.schedule(SystemStep::WinnerTimeout, env.config.winner_display_ms);
        } else if state.board.is_fully_revealed() {
            // Everything came out through guesses; treat it as a solve.
            state.schedule(SystemStep::AutoSolve, env.config.letter_reveal_ms);
        } else if state.turn.resume_awaiting {
            state.turn.resume_awaiting = false;
            state.phase = GamePhase::Main(MainStep::AwaitingConsonant);
        } else {
            state.phase = GamePhase::Main(MainStep::Idle);
        }
        Ok(Effects::none())
    }
}

/// The board filled in without an explicit solve; credit the active team.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoSolveAction;

impl ActionTransition for AutoSolveAction {
    type Error = LetterError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), LetterError> {
        if state.phase != GamePhase::Main(MainStep::Revealing) {
            return Err(LetterError::NotRevealing);
        }
        if state.turn.finishing {
            return Err(LetterError::PuzzleFinishing);
        }
        if !state.board.is_fully_revealed() {
            return Err(LetterError::BoardNotRevealed);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, LetterError> {
        Ok(finish_puzzle(state, env))
    }
}
