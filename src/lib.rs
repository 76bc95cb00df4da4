//! A memorized-deck drill engine with optional `no_std` support.
//!
//! The crate provides a [`Drill`] type that poses "which card is at position
//! N?" and "where is this card?" questions over a [`Stack`] such as
//! Mnemonica, checks typed answers, keeps session statistics, and paces
//! hands-free auto sessions with cancellable countdowns.
//!
//! # Example
//!
//! ```
//! use stackdrill::{Direction, Drill, DrillMode, Outcome};
//!
//! let drill = Drill::mnemonica(DrillMode::Manual, 42).unwrap();
//! let view = drill.new_question(Some(Direction::PositionToCard));
//! let question = view.question.unwrap();
//!
//! let view = drill.submit_answer(&question.card.to_string()).unwrap();
//! assert_eq!(view.feedback.unwrap().outcome, Outcome::Correct);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod drill;
pub mod error;
pub mod normalize;
pub mod options;
pub mod range;
pub mod result;
pub mod stack;
mod sync;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod timer;

// Re-export main types
pub use card::{Card, DECK_SIZE, Pretty, Suit};
#[cfg(feature = "std")]
pub use drill::{CycleOutcome, CyclePhase};
pub use drill::{
    Direction, Drill, DrillMode, DrillState, Face, MAX_INTERVAL_SECONDS, Question,
};
pub use error::{AnswerError, AutoError, DrillError, RangeError, RevealError, StackError};
pub use normalize::normalize;
pub use options::{DrillKind, DrillOptions};
pub use range::DrillRange;
pub use result::{Accuracy, DrillView, Feedback, Outcome, SessionStats};
pub use stack::{MNEMONICA, Stack};
