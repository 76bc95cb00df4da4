//! Drill configuration options.

use core::time::Duration;

use crate::range::DrillRange;

/// Which way questions are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrillKind {
    /// Show a position, ask for the card.
    PositionToCard,
    /// Show a card, ask for its position.
    CardToPosition,
    /// Pick the direction at random for every question.
    #[default]
    Mixed,
}

/// Configuration options for a drill.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use stackdrill::{DrillKind, DrillOptions, DrillRange};
///
/// let options = DrillOptions::default()
///     .with_range(DrillRange::new(1, 13).unwrap())
///     .with_kind(DrillKind::PositionToCard)
///     .with_interval_seconds(8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillOptions {
    /// Positions questions are drawn from.
    pub range: DrillRange,
    /// Question direction.
    pub kind: DrillKind,
    /// Thinking time for auto sessions (1..=60 seconds).
    pub interval_seconds: u8,
    /// Pause after the answer is revealed in an auto session.
    pub reveal_pause_seconds: u8,
    /// Countdown tick length.
    pub tick: Duration,
}

impl Default for DrillOptions {
    fn default() -> Self {
        Self {
            range: DrillRange::FULL,
            kind: DrillKind::Mixed,
            interval_seconds: 5,
            reveal_pause_seconds: 3,
            tick: Duration::from_secs(1),
        }
    }
}

impl DrillOptions {
    /// Sets the position range.
    ///
    /// # Example
    ///
    /// ```
    /// use stackdrill::{DrillOptions, DrillRange};
    ///
    /// let range = DrillRange::new(20, 30).unwrap();
    /// let options = DrillOptions::default().with_range(range);
    /// assert_eq!(options.range, range);
    /// ```
    #[must_use]
    pub const fn with_range(mut self, range: DrillRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the question direction.
    ///
    /// # Example
    ///
    /// ```
    /// use stackdrill::{DrillKind, DrillOptions};
    ///
    /// let options = DrillOptions::default().with_kind(DrillKind::CardToPosition);
    /// assert_eq!(options.kind, DrillKind::CardToPosition);
    /// ```
    #[must_use]
    pub const fn with_kind(mut self, kind: DrillKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the thinking time for auto sessions.
    ///
    /// The value is validated when the drill is created.
    ///
    /// # Example
    ///
    /// ```
    /// use stackdrill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_interval_seconds(10);
    /// assert_eq!(options.interval_seconds, 10);
    /// ```
    #[must_use]
    pub const fn with_interval_seconds(mut self, seconds: u8) -> Self {
        self.interval_seconds = seconds;
        self
    }

    /// Sets the pause after an auto-session reveal.
    ///
    /// # Example
    ///
    /// ```
    /// use stackdrill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_reveal_pause_seconds(0);
    /// assert_eq!(options.reveal_pause_seconds, 0);
    /// ```
    #[must_use]
    pub const fn with_reveal_pause_seconds(mut self, seconds: u8) -> Self {
        self.reveal_pause_seconds = seconds;
        self
    }

    /// Sets the countdown tick length.
    ///
    /// Ticks are reported once per elapsed tick; shorter ticks are mostly
    /// useful in tests.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use stackdrill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_tick(Duration::from_millis(10));
    /// assert_eq!(options.tick, Duration::from_millis(10));
    /// ```
    #[must_use]
    pub const fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}
