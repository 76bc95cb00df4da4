//! Drill engine and session management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::error::{DrillError, RangeError};
use crate::options::{DrillKind, DrillOptions};
use crate::range::DrillRange;
use crate::result::{DrillView, SessionStats};
use crate::stack::Stack;
use crate::sync::Mutex;
#[cfg(feature = "std")]
use crate::timer::CancelToken;

mod answer;
mod auto;
pub mod question;
pub mod state;

pub use auto::MAX_INTERVAL_SECONDS;
#[cfg(feature = "std")]
pub use auto::{CycleOutcome, CyclePhase};
pub use question::{Direction, Face, Question};
pub use state::{DrillMode, DrillState};

use state::Session;

/// A single drill session over a memorized stack.
///
/// The drill owns its stack, its counters and its random number generator.
/// All commands take `&self` and serialize on an internal lock, so a drill
/// can be shared between the thread that renders it and the thread that
/// paces an auto session. Every command returns a [`DrillView`] snapshot.
pub struct Drill {
    /// The interaction style this drill was created for.
    mode: DrillMode,
    /// The memorized stack questions are drawn from.
    stack: Stack,
    /// Mutable session state.
    session: Mutex<Session>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
    /// Cancels countdowns of the running auto session.
    #[cfg(feature = "std")]
    pacer: Mutex<CancelToken>,
}

impl Drill {
    /// Creates a drill with the given seed.
    ///
    /// A [`DrillMode::Flashcard`] drill shows its first card right away.
    ///
    /// # Errors
    ///
    /// Returns an error if the thinking time in `options` is outside
    /// 1..=60 seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use stackdrill::{Drill, DrillMode, DrillOptions, Stack};
    ///
    /// let stack = Stack::mnemonica().unwrap();
    /// let drill = Drill::new(DrillMode::Manual, DrillOptions::default(), stack, 42).unwrap();
    /// assert!(drill.view().question.is_none());
    /// ```
    pub fn new(
        mode: DrillMode,
        options: DrillOptions,
        stack: Stack,
        seed: u64,
    ) -> Result<Self, DrillError> {
        auto::check_interval(options.interval_seconds)?;

        let drill = Self {
            mode,
            stack,
            session: Mutex::new(Session::new(options)),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            #[cfg(feature = "std")]
            pacer: Mutex::new(CancelToken::new()),
        };

        if mode == DrillMode::Flashcard {
            drill.new_question(None);
        }

        Ok(drill)
    }

    /// Creates a drill over the Mnemonica stack with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in stack fails validation.
    pub fn mnemonica(mode: DrillMode, seed: u64) -> Result<Self, DrillError> {
        Self::new(mode, DrillOptions::default(), Stack::mnemonica()?, seed)
    }

    /// Returns the drill's mode.
    pub const fn mode(&self) -> DrillMode {
        self.mode
    }

    /// Returns the stack questions are drawn from.
    pub const fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Returns a snapshot of the drill.
    pub fn view(&self) -> DrillView {
        self.view_of(&self.session.lock())
    }

    fn view_of(&self, session: &Session) -> DrillView {
        DrillView {
            mode: self.mode,
            state: session.state,
            question: session.question,
            feedback: session.feedback,
            revealed: session
                .question
                .filter(|_| session.revealed)
                .map(|question| question.back()),
            stats: session.stats,
            running: session.running,
            range: session.options.range,
            interval_seconds: session.options.interval_seconds,
        }
    }

    /// Restricts future questions to positions `start..=end`.
    ///
    /// The current question is kept even if it falls outside the new range.
    ///
    /// # Errors
    ///
    /// Returns an error if `start > end` or a bound lies outside 1..=52; the
    /// previous range stays active.
    pub fn configure_range(&self, start: u8, end: u8) -> Result<DrillRange, RangeError> {
        let range = DrillRange::new(start, end).inspect_err(|err| {
            warn!(start, end, %err, "rejected drill range");
        })?;
        self.session.lock().options.range = range;
        debug!(start, end, "configured drill range");
        Ok(range)
    }

    /// Changes which direction future questions are asked in.
    pub fn configure_kind(&self, kind: DrillKind) -> DrillView {
        let mut session = self.session.lock();
        session.options.kind = kind;
        self.view_of(&session)
    }

    /// Poses a new question drawn uniformly from the configured range.
    ///
    /// With `direction` omitted, the configured [`DrillKind`] decides; a
    /// [`DrillKind::Mixed`] drill picks either direction with equal odds,
    /// independently of the position draw. Clears any previous feedback.
    pub fn new_question(&self, direction: Option<Direction>) -> DrillView {
        let mut session = self.session.lock();
        self.pose_next(&mut session, direction);
        self.view_of(&session)
    }

    fn pose_next(&self, session: &mut Session, direction: Option<Direction>) {
        let question = {
            let mut rng = self.rng.lock();
            let direction = direction.unwrap_or_else(|| match session.options.kind {
                DrillKind::PositionToCard => Direction::PositionToCard,
                DrillKind::CardToPosition => Direction::CardToPosition,
                DrillKind::Mixed => {
                    if rng.random_bool(0.5) {
                        Direction::PositionToCard
                    } else {
                        Direction::CardToPosition
                    }
                }
            });
            let position = rng.random_range(session.options.range.positions());
            Question {
                direction,
                position,
                card: self.stack.cards()[usize::from(position) - 1],
            }
        };

        debug!(
            direction = ?question.direction,
            position = question.position,
            "posed question"
        );
        session.pose(question);
        if self.mode == DrillMode::Flashcard {
            session.stats.record_card();
        }
    }

    /// Zeros every counter.
    ///
    /// The current question and the running flag are left untouched.
    pub fn reset_stats(&self) -> DrillView {
        let mut session = self.session.lock();
        session.stats = SessionStats::new();
        debug!("reset drill stats");
        self.view_of(&session)
    }
}
