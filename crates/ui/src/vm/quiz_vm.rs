use chrono::{DateTime, Utc};
use services::{
    CardDisplay, QuizPhase, QuizProgress, QuizResult, QuizService, QuizSession, RevealPoll,
    SessionError,
};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Submit,
    Stop,
    Restart,
}

/// Everything the quiz view draws in one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub display: Option<CardDisplay>,
    pub progress: QuizProgress,
    pub result: Option<QuizResult>,
    pub answer: String,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        self.session.pending_answer()
    }

    /// Ignored unless the active card still waits for an answer.
    pub fn set_answer(&mut self, answer: impl Into<String>) {
        self.session.set_pending_answer(answer);
    }

    /// Judge the typed answer. Returns `true` when a reveal started.
    pub fn submit(&mut self, now: DateTime<Utc>) -> bool {
        match self.session.submit(now) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(%err, "submit ignored");
                false
            }
        }
    }

    pub fn poll_reveal(&mut self, now: DateTime<Utc>) -> RevealPoll {
        self.session.poll_reveal(now)
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            display: self.session.display(),
            progress: self.session.progress(),
            result: self.session.result(),
            answer: self.session.pending_answer().to_string(),
        }
    }

    /// Start over with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::EmptyDeck` if no card is available and
    /// `ViewError::Unknown` if the quiz is still running.
    pub fn restart(&self, quiz: &QuizService) -> Result<Self, ViewError> {
        quiz.restart(&self.session)
            .map(Self::new)
            .map_err(view_error)
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyDeck` when no cards are available.
/// Returns `ViewError::Unknown` for other failures.
pub fn start_quiz(quiz: &QuizService) -> Result<QuizVm, ViewError> {
    quiz.start_session().map(QuizVm::new).map_err(view_error)
}

fn view_error(err: SessionError) -> ViewError {
    match err {
        SessionError::EmptyDeck(_) => ViewError::EmptyDeck,
        other => {
            tracing::warn!(error = %other, "quiz action failed");
            ViewError::Unknown
        }
    }
}
