use rand::Rng;
use rand::rng;

use hanzi_core::model::{Card, ChapterId, ChapterMap, DeckError};

use crate::error::SessionError;
use super::plan::{DeckBuilder, shuffled_deck};
use super::service::QuizSession;

/// Starts and restarts quiz sessions over a fixed card pool.
///
/// The pool is the selected chapters' cards, resolved once; every session
/// gets its own shuffle of it.
#[derive(Debug, Clone)]
pub struct QuizService {
    chapters: Vec<ChapterId>,
    pool: Vec<Card>,
}

impl QuizService {
    /// Resolve the chapter selection against the store.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDeck` if the selection holds no cards.
    pub fn new(chapters: &ChapterMap, requested: &[ChapterId]) -> Result<Self, SessionError> {
        let builder = DeckBuilder::new(chapters).with_chapters(requested);
        let selected = builder.selected_chapters();
        let pool = builder.pool();
        if pool.is_empty() {
            return Err(SessionError::EmptyDeck(DeckError::Empty));
        }
        Ok(Self {
            chapters: selected,
            pool,
        })
    }

    /// Chapters the quiz draws from.
    #[must_use]
    pub fn chapters(&self) -> &[ChapterId] {
        &self.chapters
    }

    /// Every card the quiz draws from, in chapter order.
    #[must_use]
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// Start a new session on a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDeck` if no card is available.
    pub fn start_session(&self) -> Result<QuizSession, SessionError> {
        let mut rng = rng();
        self.start_session_with_rng(&mut rng)
    }

    /// Start a new session shuffled with the given RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDeck` if no card is available.
    pub fn start_session_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<QuizSession, SessionError> {
        let deck = shuffled_deck(self.pool.clone(), rng)?;
        tracing::info!(
            chapters = ?self.chapters,
            cards = deck.len(),
            "quiz session started"
        );
        Ok(QuizSession::new(deck))
    }

    /// Replace a finished session with a new one over the same cards.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` if `current` is still running.
    pub fn restart(&self, current: &QuizSession) -> Result<QuizSession, SessionError> {
        let mut rng = rng();
        self.restart_with_rng(current, &mut rng)
    }

    /// Same as [`QuizService::restart`] with a caller-provided RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` if `current` is still running.
    pub fn restart_with_rng<R: Rng + ?Sized>(
        &self,
        current: &QuizSession,
        rng: &mut R,
    ) -> Result<QuizSession, SessionError> {
        if !current.is_finished() {
            return Err(SessionError::NotFinished);
        }
        tracing::info!(previous_score = current.score(), "restarting quiz");
        self.start_session_with_rng(rng)
    }
}
