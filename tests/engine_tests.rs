//! Integration tests for the timer engine and its collaborators.
//!
//! These exercise the public API end to end:
//! - Countdown and completion properties of the engine
//! - Cycle persistence through the file-backed store
//! - The session's single tick source under virtual time

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

use pomodoro::storage::{CycleStore, FileStore, KeyValueStore, MemoryStore, CYCLES_KEY};
use pomodoro::types::{TimerMode, FOCUS_SECONDS, SHORT_BREAK_SECONDS};
use pomodoro::{Completion, TimerEngine, TimerEvent, TimerSession};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_engine(
    store: Arc<dyn KeyValueStore>,
    alternate_breaks: bool,
) -> (TimerEngine, mpsc::UnboundedReceiver<TimerEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (TimerEngine::new(CycleStore::new(store), alternate_breaks, tx), rx)
}

fn completion_events(rx: &mut mpsc::UnboundedReceiver<TimerEvent>) -> Vec<TimerEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if matches!(
            event,
            TimerEvent::FocusCompleted { .. } | TimerEvent::BreakCompleted
        ) {
            events.push(event);
        }
    }
    events
}

// ============================================================================
// Engine properties
// ============================================================================

#[test]
fn each_interval_completes_exactly_once_after_its_duration() {
    for (mode, duration) in [
        (TimerMode::Focus, FOCUS_SECONDS),
        (TimerMode::ShortBreak, SHORT_BREAK_SECONDS),
    ] {
        let (mut engine, mut rx) = create_engine(Arc::new(MemoryStore::new()), true);
        if mode == TimerMode::ShortBreak {
            engine.toggle_mode();
        }
        engine.start_pause();

        let mut zero_hits = 0;
        let mut completions = 0;
        for _ in 0..duration {
            if engine.tick().is_some() {
                completions += 1;
            }
            if engine.get_state().remaining_seconds == 0 {
                zero_hits += 1;
            }
        }

        assert_eq!(completions, 1, "{:?}", mode);
        assert_eq!(zero_hits, 0, "countdown is restored right after completion");
        assert_eq!(completion_events(&mut rx).len(), 1);
    }
}

#[test]
fn reset_always_restores_full_duration_and_stops() {
    let (mut engine, _rx) = create_engine(Arc::new(MemoryStore::new()), true);

    for ticks in [0u32, 1, 10, 299] {
        engine.start_pause();
        for _ in 0..ticks {
            engine.tick();
        }
        engine.reset();

        let state = engine.get_state();
        assert!(!state.is_running);
        assert_eq!(state.remaining_seconds, state.mode.duration_seconds());

        engine.toggle_mode();
    }
}

#[test]
fn focus_scenario_with_alternation() {
    let (mut engine, _rx) = create_engine(Arc::new(MemoryStore::new()), true);
    engine.start_pause();

    let completions: Vec<_> = (0..FOCUS_SECONDS).filter_map(|_| engine.tick()).collect();

    let state = engine.get_state();
    assert_eq!(completions, vec![Completion::Focus]);
    assert!(!state.is_running);
    assert_eq!(state.completed_cycles, 1);
    assert_eq!(state.mode, TimerMode::ShortBreak);
    assert_eq!(state.remaining_seconds, 300);
}

#[test]
fn break_completion_never_counts_a_cycle() {
    let (mut engine, _rx) = create_engine(Arc::new(MemoryStore::new()), false);
    engine.toggle_mode();

    for _ in 0..3 {
        engine.start_pause();
        for _ in 0..SHORT_BREAK_SECONDS {
            engine.tick();
        }
    }

    assert_eq!(engine.get_state().completed_cycles, 0);
    assert_eq!(engine.get_state().mode, TimerMode::ShortBreak);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn corrupt_persisted_value_starts_at_zero() {
    let store = Arc::new(MemoryStore::with_entry(CYCLES_KEY, "corrupt"));
    let (engine, _rx) = create_engine(store, true);

    assert_eq!(engine.get_state().completed_cycles, 0);
}

#[test]
fn cycles_survive_restart_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let (mut engine, _rx) = create_engine(Arc::new(FileStore::new(&path)), true);
        engine.start_pause();
        for _ in 0..FOCUS_SECONDS {
            engine.tick();
        }
        assert_eq!(engine.get_state().completed_cycles, 1);
    }

    let (engine, _rx) = create_engine(Arc::new(FileStore::new(&path)), true);
    assert_eq!(engine.get_state().completed_cycles, 1);
}

#[test]
fn unreadable_store_file_starts_at_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "this is not json").unwrap();

    let (engine, _rx) = create_engine(Arc::new(FileStore::new(&path)), true);

    assert_eq!(engine.get_state().completed_cycles, 0);
}

// ============================================================================
// Session under virtual time
// ============================================================================

#[tokio::test(start_paused = true)]
async fn session_ticks_once_per_second() {
    let (engine, _rx) = create_engine(Arc::new(MemoryStore::new()), true);
    let mut session = TimerSession::new(engine);

    session.start_pause().await;
    sleep(Duration::from_millis(10_500)).await;

    assert_eq!(session.snapshot().await.remaining_seconds, FOCUS_SECONDS - 10);
}

#[tokio::test(start_paused = true)]
async fn session_pause_resume_never_double_ticks() {
    let (engine, _rx) = create_engine(Arc::new(MemoryStore::new()), true);
    let mut session = TimerSession::new(engine);

    for _ in 0..5 {
        session.start_pause().await;
        sleep(Duration::from_millis(1500)).await;
        session.start_pause().await;
        session.start_pause().await;
        sleep(Duration::from_millis(500)).await;
        session.start_pause().await;
    }

    let state = session.snapshot().await;
    assert!(!state.is_running);
    assert_eq!(state.remaining_seconds, FOCUS_SECONDS - 5);
}

#[tokio::test(start_paused = true)]
async fn session_full_cycle_focus_then_break() {
    let (engine, mut rx) = create_engine(Arc::new(MemoryStore::new()), true);
    let mut session = TimerSession::new(engine);

    session.start_pause().await;
    sleep(Duration::from_secs(u64::from(FOCUS_SECONDS) + 2)).await;
    session.start_pause().await;
    sleep(Duration::from_secs(u64::from(SHORT_BREAK_SECONDS) + 2)).await;

    let state = session.snapshot().await;
    assert_eq!(state.mode, TimerMode::Focus);
    assert_eq!(state.remaining_seconds, FOCUS_SECONDS);
    assert_eq!(state.completed_cycles, 1);
    assert_eq!(
        completion_events(&mut rx),
        vec![
            TimerEvent::FocusCompleted {
                completed_cycles: 1
            },
            TimerEvent::BreakCompleted,
        ]
    );
}
