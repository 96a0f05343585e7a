//! End-to-end session tests driving the worker through the public handle.

use std::time::Duration;

use jontune_core::action::{
    BonusPickLetterAction, BonusReadyAction, BonusSolveAction, GuessConsonantAction,
    SkipWinnerAction, SolveAction, SpinAction,
};
use jontune_core::{
    BonusResult, BonusStep, EngineConfig, GamePhase, GameState, MainStep, PlayerAction, Puzzle,
    Wedge, WedgeSet,
};

use jontune_content::PuzzleSet;
use jontune_runtime::{GameEvent, RuntimeError, Session, SessionConfig, SessionHandle, SessionSetup};

/// Route worker logs through the test harness, honoring `RUST_LOG`.
///
/// `try_init` so that every test can call this; only the first wins.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Engine config with millisecond pacing so tests finish quickly.
fn fast_config() -> SessionConfig {
    SessionConfig {
        engine: EngineConfig {
            letter_reveal_ms: 1,
            solve_reveal_ms: 1,
            mystery_step_ms: 1,
            mystery_settle_ms: 1,
            tie_break_step_ms: 1,
            tie_break_settle_ms: 1,
            // Long enough that only an explicit skip advances the round.
            winner_display_ms: 60_000,
            bonus_result_display_ms: 1,
            bonus_tick_ms: 50,
            spin_settle_base_ms: 1,
            spin_settle_per_power_ms: 0,
            ..EngineConfig::default()
        },
        ..SessionConfig::default()
    }
}

fn puzzle(category: &str, answer: &str) -> Puzzle {
    Puzzle {
        category: category.to_string(),
        answer: answer.to_string(),
    }
}

/// A wheel with a single cash wedge, so every spin lands on it.
fn cash_only_wheel(value: u32) -> WedgeSet {
    WedgeSet::new(vec![Wedge::cash(value)])
}

fn test_session(main: Vec<Puzzle>, bonus: Vec<Puzzle>) -> Session {
    init_tracing();
    Session::builder(SessionSetup::new(
        vec!["Red".to_string(), "Blue".to_string()],
        main.len(),
    ))
    .config(fast_config())
    .puzzles(PuzzleSet { main, bonus })
    .wheel(cash_only_wheel(500))
    .seed(42)
    .build()
    .expect("session builds")
}

/// Poll the worker until the state satisfies `pred` or five seconds pass.
async fn wait_for<F>(handle: &SessionHandle, what: &str, mut pred: F) -> GameState
where
    F: FnMut(&GameState) -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let state = handle.query_state().await.expect("worker alive");
        if pred(&state) {
            return state;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for {what}; phase was {:?}",
            state.phase
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test]
async fn full_session_from_spin_to_bonus_win() {
    let session = test_session(
        vec![puzzle("CLASSIC PHRASE", "JON SAVED MY LIFE")],
        vec![puzzle("WORD", "LYMPH")],
    );
    let handle = session.handle();

    // Spin lands on the only wedge (cash 500) and opens the consonant guess.
    handle
        .player(PlayerAction::Spin(SpinAction { power: 60 }))
        .await
        .expect("spin accepted");
    wait_for(&handle, "consonant guess to open", |s| {
        s.phase == GamePhase::Main(MainStep::AwaitingConsonant)
    })
    .await;

    // 'S' appears once, so the round bank becomes 500.
    handle
        .player(PlayerAction::GuessConsonant(GuessConsonantAction {
            letter: 'S',
        }))
        .await
        .expect("guess accepted");
    let state = wait_for(&handle, "reveal to finish", |s| {
        s.phase == GamePhase::Main(MainStep::Idle)
    })
    .await;
    assert_eq!(state.teams[0].round, 500);

    // Solving banks round + bonus for the active team.
    handle
        .player(PlayerAction::Solve(SolveAction {
            guess: "JON SAVED MY LIFE".to_string(),
        }))
        .await
        .expect("solve accepted");
    let state = wait_for(&handle, "winner screen", |s| {
        s.phase == GamePhase::Main(MainStep::Winner)
    })
    .await;
    assert_eq!(state.teams[0].total, 800);
    assert!(state.board.is_fully_revealed());

    // Last round; the sole leader goes straight to the bonus round.
    handle
        .player(PlayerAction::SkipWinner(SkipWinnerAction))
        .await
        .expect("skip accepted");
    let state = wait_for(&handle, "bonus letter picks", |s| {
        s.phase == GamePhase::Bonus(BonusStep::PickConsonants)
    })
    .await;
    let bonus = state.bonus.as_ref().expect("bonus state");
    assert_eq!(bonus.team, 0);
    assert!(bonus.prize.is_some());

    for letter in ['M', 'P', 'H', 'A'] {
        handle
            .player(PlayerAction::BonusPickLetter(BonusPickLetterAction {
                letter,
            }))
            .await
            .expect("pick accepted");
    }
    wait_for(&handle, "bonus ready prompt", |s| {
        s.phase == GamePhase::Bonus(BonusStep::AwaitingReady)
    })
    .await;

    handle
        .player(PlayerAction::BonusReady(BonusReadyAction))
        .await
        .expect("ready accepted");
    handle
        .player(PlayerAction::BonusSolve(BonusSolveAction {
            guess: "LYMPH".to_string(),
        }))
        .await
        .expect("bonus solve accepted");

    // Result screen expires on its own and the game ends.
    let state = wait_for(&handle, "game over", |s| s.phase == GamePhase::Done).await;
    let bonus = state.bonus.as_ref().expect("bonus state");
    assert_eq!(bonus.result, Some(BonusResult::Win));
    assert_eq!(state.teams[0].prizes.len(), 1);
    assert_eq!(state.teams[0].total, 800);

    session.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn holding_the_spin_control_charges_and_spins_on_release() {
    let session = test_session(vec![puzzle("SHOWS", "JON SNOW")], vec![]);
    let handle = session.handle();
    let mut events = session.subscribe_events();

    handle.start_charge().await.expect("charge starts");
    tokio::time::sleep(Duration::from_millis(60)).await;
    handle.end_charge().await.expect("release spins");

    let state = wait_for(&handle, "spin to settle", |s| {
        s.phase == GamePhase::Main(MainStep::AwaitingConsonant)
    })
    .await;
    assert_eq!(state.stats.teams()[0].spins, 1);

    // The hold produced at least one power tick before the spin.
    let mut saw_tick = false;
    while let Ok(event) = events.try_recv() {
        if let GameEvent::ChargeTick { power } = event {
            assert!(power <= 100);
            saw_tick = true;
        }
    }
    assert!(saw_tick, "expected charge ticks while holding");

    session.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn cancelled_charge_leaves_the_game_untouched() {
    let session = test_session(vec![puzzle("SHOWS", "JON SNOW")], vec![]);
    let handle = session.handle();

    handle.start_charge().await.expect("charge starts");
    tokio::time::sleep(Duration::from_millis(40)).await;
    handle.cancel_charge().await.expect("cancel sent");
    // Release after a cancel is a no-op, not a spin.
    handle.end_charge().await.expect("release ignored");

    let state = handle.query_state().await.expect("worker alive");
    assert_eq!(state.phase, GamePhase::Main(MainStep::Idle));
    assert!(!state.turn.has_spun);
    assert_eq!(state.stats.teams()[0].spins, 0);

    session.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn rejected_action_reports_and_changes_nothing() {
    let session = test_session(vec![puzzle("SHOWS", "JON SNOW")], vec![]);
    let handle = session.handle();
    let mut events = session.subscribe_events();

    let before = handle.query_state().await.expect("worker alive");
    // No spin has happened, so a consonant guess is illegal.
    let verdict = handle
        .player(PlayerAction::GuessConsonant(GuessConsonantAction {
            letter: 'T',
        }))
        .await;
    assert!(matches!(verdict, Err(RuntimeError::Engine(_))));

    let after = handle.query_state().await.expect("worker alive");
    assert_eq!(before, after);

    let mut saw_rejection = false;
    while let Ok(event) = events.try_recv() {
        if matches!(event, GameEvent::ActionRejected { .. }) {
            saw_rejection = true;
        }
    }
    assert!(saw_rejection, "expected an ActionRejected event");

    session.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn builder_refuses_an_empty_puzzle_set() {
    init_tracing();
    let result = Session::builder(SessionSetup::default())
        .puzzles(PuzzleSet {
            main: vec![],
            bonus: vec![],
        })
        .build();
    assert!(matches!(result, Err(RuntimeError::NoPuzzles)));
}
