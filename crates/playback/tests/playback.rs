//! Property-based invariants for playback.
//!
//! Verifies, for arbitrary inputs and command scripts:
//! 1. The cursor never passes the last step.
//! 2. The cursor never moves backwards within a run.
//! 3. `Finished` is terminal and always shows the last step.
//! 4. A session never changes its input while a run auto-plays, and an
//!    applied change always discards the current run.

use std::time::Duration;

use proptest::prelude::*;
use sortscope_core::VisualState;
use sortscope_playback::{ArrayConfig, Command, PlaybackState, Player, Session};
use sortscope_sorters::{Algorithm, Options};

const INTERVAL: Duration = Duration::from_millis(10);

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn arb_values() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..=50, 0..16)
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop::sample::select(vec![
        Command::Start,
        Command::Pause,
        Command::Resume,
        Command::Step,
        Command::Tick,
    ])
}

#[derive(Debug, Clone)]
enum Request {
    Regenerate,
    Select(Algorithm),
    Start,
    Pause,
    Resume,
    NextStep,
    Tick(u64),
}

fn arb_request() -> impl Strategy<Value = Request> {
    prop_oneof![
        Just(Request::Regenerate),
        arb_algorithm().prop_map(Request::Select),
        Just(Request::Start),
        Just(Request::Pause),
        Just(Request::Resume),
        Just(Request::NextStep),
        (0u64..50).prop_map(Request::Tick),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1–3. Player cursor
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cursor_stays_in_bounds(
        algorithm in arb_algorithm(),
        values in arb_values(),
        script in prop::collection::vec(arb_command(), 0..200),
    ) {
        let seq = algorithm.generate(&values, &Options::default());
        let last = seq.last_index();
        let mut player = Player::new(seq, INTERVAL).unwrap();

        let mut previous = player.cursor();
        for command in script {
            let was_finished = player.state() == PlaybackState::Finished;
            let t = player.apply(command);

            prop_assert!(player.cursor() <= last);
            prop_assert!(player.cursor() >= previous);
            prop_assert_eq!(player.cursor() - previous, usize::from(t.advanced));
            if was_finished {
                prop_assert!(t.is_ignored());
            }
            if player.state() == PlaybackState::Finished {
                prop_assert_eq!(player.cursor(), last);
                prop_assert!(player.current_snapshot().all_in(VisualState::Sorted));
            }
            previous = player.cursor();
        }
    }

    #[test]
    fn ticking_runs_to_completion(
        algorithm in arb_algorithm(),
        values in arb_values(),
        frames in prop::collection::vec(0u64..35, 1..50),
    ) {
        let seq = algorithm.generate(&values, &Options::default());
        let last = seq.last_index();
        let mut player = Player::new(seq, INTERVAL).unwrap();
        player.start();

        let mut total = 0;
        for ms in frames {
            total += player.tick(Duration::from_millis(ms));
        }
        total += player.tick(INTERVAL * u32::try_from(last + 1).unwrap());

        prop_assert_eq!(total, last);
        prop_assert_eq!(player.state(), PlaybackState::Finished);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Session locking
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn input_is_locked_while_running(
        seed in any::<u64>(),
        requests in prop::collection::vec(arb_request(), 0..80),
    ) {
        let array = ArrayConfig::new(6, 1, 30).unwrap();
        let mut session = Session::new(array, Some(seed)).with_interval(INTERVAL).unwrap();

        for request in requests {
            let running = session.is_running();
            let values = session.values().to_vec();
            let algorithm = session.algorithm();

            match &request {
                Request::Regenerate => {
                    prop_assert_eq!(session.regenerate().is_applied(), !running);
                }
                Request::Select(next) => {
                    prop_assert_eq!(session.select_algorithm(*next).is_applied(), !running);
                }
                Request::Start => {
                    session.start();
                }
                Request::Pause => {
                    session.pause();
                }
                Request::Resume => {
                    session.resume();
                }
                Request::NextStep => {
                    session.next_step();
                }
                Request::Tick(ms) => {
                    session.tick(Duration::from_millis(*ms));
                }
            }

            if running {
                prop_assert_eq!(session.values(), values.as_slice());
                prop_assert_eq!(session.algorithm(), algorithm);
            } else if matches!(request, Request::Regenerate | Request::Select(_)) {
                prop_assert!(session.player().is_none());
            }
            prop_assert_eq!(session.current_snapshot().len(), 6);
        }
    }
}
