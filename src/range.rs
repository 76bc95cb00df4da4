//! Inclusive position ranges that limit which questions can be drawn.

use core::ops::RangeInclusive;

use crate::card::DECK_SIZE;
use crate::error::RangeError;

/// An inclusive range of 1-based stack positions.
///
/// A range of one position is valid and always yields that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrillRange {
    start: u8,
    end: u8,
}

impl DrillRange {
    /// The whole stack, positions 1 through 52.
    pub const FULL: Self = Self {
        start: 1,
        end: DECK_SIZE as u8,
    };

    /// Creates a range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start > end` or either bound lies outside 1..=52.
    ///
    /// ```
    /// use stackdrill::{DrillRange, RangeError};
    ///
    /// assert!(DrillRange::new(10, 20).is_ok());
    /// assert_eq!(
    ///     DrillRange::new(5, 1),
    ///     Err(RangeError::StartAfterEnd { start: 5, end: 1 })
    /// );
    /// ```
    pub const fn new(start: u8, end: u8) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::StartAfterEnd { start, end });
        }
        if start == 0 || end as usize > DECK_SIZE {
            return Err(RangeError::OutOfBounds { start, end });
        }
        Ok(Self { start, end })
    }

    /// First position in the range.
    #[must_use]
    pub const fn start(&self) -> u8 {
        self.start
    }

    /// Last position in the range.
    #[must_use]
    pub const fn end(&self) -> u8 {
        self.end
    }

    /// Number of positions covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Always `false`; a valid range covers at least one position.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `position` lies inside the range.
    #[must_use]
    pub const fn contains(&self, position: u8) -> bool {
        self.start <= position && position <= self.end
    }

    /// The range as a standard inclusive range.
    #[must_use]
    pub fn positions(&self) -> RangeInclusive<u8> {
        self.start..=self.end
    }
}

impl Default for DrillRange {
    fn default() -> Self {
        Self::FULL
    }
}
