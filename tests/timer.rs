//! Countdown and auto-session pacing tests.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use stackdrill::timer::{CancelToken, DelayOutcome, await_delay, await_delay_with_tick};
use stackdrill::{CycleOutcome, CyclePhase, Drill, DrillMode, DrillOptions, Stack};

fn auto_drill(options: DrillOptions) -> Drill {
    Drill::new(DrillMode::Auto, options, Stack::mnemonica().unwrap(), 99).unwrap()
}

#[test]
fn delay_reports_every_tick() {
    let token = CancelToken::new();
    let mut ticks = Vec::new();
    let outcome = await_delay_with_tick(4, Duration::from_millis(2), &token, |left| {
        ticks.push(left);
    });
    assert_eq!(outcome, DelayOutcome::Elapsed);
    assert_eq!(ticks, [4, 3, 2, 1]);
}

#[test]
fn zero_delay_elapses_immediately() {
    let token = CancelToken::new();
    let mut called = false;
    assert_eq!(await_delay(0, &token, |_| called = true), DelayOutcome::Elapsed);
    assert!(!called);
}

#[test]
fn cancelled_token_skips_the_delay() {
    let token = CancelToken::new();
    token.cancel();
    let started = Instant::now();
    assert_eq!(await_delay(30, &token, |_| {}), DelayOutcome::Cancelled);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn cancel_from_another_thread_interrupts_a_tick() {
    let token = CancelToken::new();
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        let waiter = token.clone();
        let handle = scope.spawn(move || {
            await_delay(30, &waiter, |left| {
                let _ = tx.send(left);
            })
        });

        assert_eq!(rx.recv().unwrap(), 30);
        let cancelled_at = Instant::now();
        token.cancel();
        assert_eq!(handle.join().unwrap(), DelayOutcome::Cancelled);
        assert!(cancelled_at.elapsed() < Duration::from_millis(900));
    });
    assert!(token.is_cancelled());
}

#[test]
fn auto_cycle_thinks_reveals_pauses_and_advances() {
    let drill = auto_drill(
        DrillOptions::default()
            .with_tick(Duration::from_millis(1))
            .with_reveal_pause_seconds(2),
    );
    drill.start_auto_session(3).unwrap();

    let mut phases = Vec::new();
    let outcome = drill.run_auto_cycle(|phase, left| phases.push((phase, left)));
    assert_eq!(
        phases,
        [
            (CyclePhase::Think, 3),
            (CyclePhase::Think, 2),
            (CyclePhase::Think, 1),
            (CyclePhase::Pause, 2),
            (CyclePhase::Pause, 1),
        ]
    );

    let CycleOutcome::Advanced(view) = outcome else {
        panic!("expected the cycle to advance, got {outcome:?}");
    };
    assert_eq!(view.stats.rounds_completed, 1);
    assert!(view.revealed.is_none());
    assert!(view.running);
}

#[test]
fn auto_cycle_on_stopped_session_does_nothing() {
    let drill = auto_drill(DrillOptions::default().with_tick(Duration::from_millis(1)));
    assert_eq!(drill.run_auto_cycle(|_, _| {}), CycleOutcome::Stopped);
    assert_eq!(drill.view().stats.rounds_completed, 0);
}

#[test]
fn stop_during_countdown_ends_cycle_within_a_tick() {
    let drill = auto_drill(DrillOptions::default());
    drill.start_auto_session(5).unwrap();
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        let handle = scope.spawn(|| {
            drill.run_auto_cycle(move |phase, left| {
                let _ = tx.send((phase, left));
            })
        });

        assert_eq!(rx.recv().unwrap(), (CyclePhase::Think, 5));
        let stopped_at = Instant::now();
        let view = drill.stop_auto_session();
        assert!(!view.running);

        assert_eq!(handle.join().unwrap(), CycleOutcome::Stopped);
        assert!(stopped_at.elapsed() < Duration::from_secs(1));
    });

    let view = drill.view();
    assert!(!view.running);
    assert_eq!(view.stats.rounds_completed, 0);
}

#[test]
fn restarting_after_stop_gets_a_fresh_token() {
    let drill = auto_drill(
        DrillOptions::default()
            .with_tick(Duration::from_millis(1))
            .with_reveal_pause_seconds(1),
    );
    drill.start_auto_session(1).unwrap();
    drill.stop_auto_session();
    assert!(drill.pacing_token().is_cancelled());

    drill.start_auto_session(1).unwrap();
    assert!(!drill.pacing_token().is_cancelled());
    assert!(matches!(
        drill.run_auto_cycle(|_, _| {}),
        CycleOutcome::Advanced(_)
    ));
}

#[test]
fn unbounded_tick_waits_for_cancel() {
    let token = CancelToken::new();
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        let waiter = token.clone();
        let handle = scope.spawn(move || {
            await_delay_with_tick(1, Duration::MAX, &waiter, |left| {
                let _ = tx.send(left);
            })
        });

        assert_eq!(rx.recv().unwrap(), 1);
        token.cancel();
        assert_eq!(handle.join().unwrap(), DelayOutcome::Cancelled);
    });
}

#[test]
fn concurrent_start_and_stop_keep_token_in_step() {
    let drill = auto_drill(
        DrillOptions::default()
            .with_tick(Duration::from_millis(1))
            .with_reveal_pause_seconds(1),
    );

    for _ in 0..200 {
        thread::scope(|scope| {
            scope.spawn(|| drill.start_auto_session(1).unwrap());
            scope.spawn(|| drill.stop_auto_session());
        });

        let view = drill.view();
        assert_ne!(view.running, drill.pacing_token().is_cancelled());
    }

    drill.start_auto_session(1).unwrap();
    assert!(matches!(
        drill.run_auto_cycle(|_, _| {}),
        CycleOutcome::Advanced(_)
    ));
}
