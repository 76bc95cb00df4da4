use tracing::debug;

use crate::error::{AnswerError, RevealError};
use crate::normalize::normalize;
use crate::result::{DrillView, Feedback, Outcome};

use super::question::{Direction, Face};
use super::state::DrillState;
use super::Drill;

/// Reads answer text as the kind of face the question asks for.
fn parse_answer(direction: Direction, raw: &str) -> Option<Face> {
    match direction {
        Direction::PositionToCard => normalize(raw).map(Face::Card),
        Direction::CardToPosition => raw.trim().parse().ok().map(Face::Position),
    }
}

impl Drill {
    /// Checks an answer to the current question.
    ///
    /// Card answers go through [`normalize`]; position answers must be a
    /// plain integer. Text that cannot be read counts as an incorrect
    /// attempt rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if no question is posed or the current question has
    /// already been answered. Counters are not touched in that case.
    pub fn submit_answer(&self, raw: &str) -> Result<DrillView, AnswerError> {
        let mut session = self.session.lock();
        let question = match (session.state, session.question) {
            (DrillState::Posed, Some(question)) => question,
            (DrillState::Answered, _) => return Err(AnswerError::AlreadyAnswered),
            _ => return Err(AnswerError::NotPosed),
        };

        let given = parse_answer(question.direction, raw);
        let answer = question.back();
        let outcome = if given == Some(answer) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };

        session.stats.record_answer(outcome);
        session.feedback = Some(Feedback {
            outcome,
            answer,
            given,
        });
        session.state = DrillState::Answered;

        debug!(
            ?outcome,
            attempts = session.stats.attempts,
            correct = session.stats.correct,
            "checked answer"
        );
        Ok(self.view_of(&session))
    }

    /// Reveals the answer to the current question without counting an
    /// attempt. Flipping a flashcard is a reveal.
    ///
    /// # Errors
    ///
    /// Returns an error if no question has been posed.
    pub fn reveal(&self) -> Result<Face, RevealError> {
        let mut session = self.session.lock();
        let question = session.question.ok_or(RevealError::NotPosed)?;
        session.revealed = true;
        Ok(question.back())
    }
}
