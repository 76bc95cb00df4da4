use tracing::debug;

use crate::error::AutoError;
use crate::result::DrillView;
#[cfg(feature = "std")]
use crate::timer::{CancelToken, DelayOutcome, await_delay_with_tick};

use super::state::DrillMode;
use super::Drill;

/// Longest allowed thinking time.
pub const MAX_INTERVAL_SECONDS: u8 = 60;

pub(super) const fn check_interval(seconds: u8) -> Result<(), AutoError> {
    if seconds == 0 || seconds > MAX_INTERVAL_SECONDS {
        return Err(AutoError::InvalidInterval(seconds));
    }
    Ok(())
}

/// Which countdown of an auto cycle is ticking.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// Thinking time before the answer is revealed.
    Think,
    /// Short pause after the reveal, before the next question.
    Pause,
}

/// How an auto cycle ended.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Both countdowns elapsed and the next question was posed.
    Advanced(DrillView),
    /// The session was stopped (or never running); nothing advanced.
    Stopped,
}

impl Drill {
    /// Starts an auto session with the given thinking time.
    ///
    /// An existing question is kept; without one, a new question is posed.
    ///
    /// # Errors
    ///
    /// Returns an error if this is not an auto drill or `interval_seconds`
    /// is outside 1..=60.
    pub fn start_auto_session(&self, interval_seconds: u8) -> Result<DrillView, AutoError> {
        if self.mode != DrillMode::Auto {
            return Err(AutoError::NotAutoDrill);
        }
        check_interval(interval_seconds)?;

        let mut session = self.session.lock();
        #[cfg(feature = "std")]
        {
            let mut pacer = self.pacer.lock();
            if pacer.is_cancelled() {
                *pacer = CancelToken::new();
            }
        }
        session.options.interval_seconds = interval_seconds;
        session.running = true;
        if session.question.is_none() {
            self.pose_next(&mut session, None);
        }

        debug!(interval_seconds, "started auto session");
        Ok(self.view_of(&session))
    }

    /// Stops the auto session and cancels any countdown in progress.
    pub fn stop_auto_session(&self) -> DrillView {
        let mut session = self.session.lock();
        session.running = false;
        #[cfg(feature = "std")]
        self.pacer.lock().cancel();
        let view = self.view_of(&session);
        drop(session);

        debug!(rounds = view.stats.rounds_completed, "stopped auto session");
        view
    }

    /// Moves a running session on to its next question.
    ///
    /// Call once per completed pacing cycle. Does nothing when the session
    /// is not running.
    pub fn advance_if_running(&self) -> DrillView {
        let mut session = self.session.lock();
        if session.running {
            session.stats.record_round();
            self.pose_next(&mut session, None);
            debug!(
                rounds = session.stats.rounds_completed,
                "advanced auto session"
            );
        }
        self.view_of(&session)
    }

    /// Returns the token that cancels this session's countdowns.
    ///
    /// Use it with [`await_delay`](crate::timer::await_delay) to run custom
    /// pacing; [`Drill::stop_auto_session`] cancels it.
    #[cfg(feature = "std")]
    pub fn pacing_token(&self) -> CancelToken {
        self.pacer.lock().clone()
    }

    /// Runs one full auto cycle: think, reveal, pause, advance.
    ///
    /// `on_tick` is called once per tick with the phase and the ticks left.
    /// Blocks the calling thread; a [`Drill::stop_auto_session`] from another
    /// thread ends the cycle within one tick and nothing advances.
    ///
    /// ```
    /// use core::time::Duration;
    /// use stackdrill::{CycleOutcome, Drill, DrillMode, DrillOptions, Stack};
    ///
    /// let options = DrillOptions::default()
    ///     .with_tick(Duration::from_millis(1))
    ///     .with_reveal_pause_seconds(1);
    /// let drill = Drill::new(DrillMode::Auto, options, Stack::mnemonica().unwrap(), 7).unwrap();
    /// drill.start_auto_session(2).unwrap();
    ///
    /// let CycleOutcome::Advanced(view) = drill.run_auto_cycle(|_, _| {}) else {
    ///     panic!("cycle should advance");
    /// };
    /// assert_eq!(view.stats.rounds_completed, 1);
    /// ```
    #[cfg(feature = "std")]
    pub fn run_auto_cycle(&self, mut on_tick: impl FnMut(CyclePhase, u8)) -> CycleOutcome {
        let (token, running, think, pause, tick) = {
            let session = self.session.lock();
            (
                self.pacer.lock().clone(),
                session.running,
                session.options.interval_seconds,
                session.options.reveal_pause_seconds,
                session.options.tick,
            )
        };
        if !running {
            return CycleOutcome::Stopped;
        }

        let thought = await_delay_with_tick(think, tick, &token, |left| {
            on_tick(CyclePhase::Think, left);
        });
        if thought == DelayOutcome::Cancelled || self.reveal().is_err() {
            return CycleOutcome::Stopped;
        }

        let paused = await_delay_with_tick(pause, tick, &token, |left| {
            on_tick(CyclePhase::Pause, left);
        });
        if paused == DelayOutcome::Cancelled {
            return CycleOutcome::Stopped;
        }

        let view = self.advance_if_running();
        if view.running {
            CycleOutcome::Advanced(view)
        } else {
            CycleOutcome::Stopped
        }
    }
}
