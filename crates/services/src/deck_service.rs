use std::sync::Arc;

use hanzi_core::model::ChapterId;
use storage::ChapterRepository;

use crate::error::DeckServiceError;
use crate::sessions::QuizService;

/// Number of cards stored under one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterCount {
    pub chapter: ChapterId,
    pub cards: usize,
}

/// Loads the card store and prepares quizzes from it.
#[derive(Clone)]
pub struct DeckService {
    chapters: Arc<dyn ChapterRepository>,
}

impl DeckService {
    #[must_use]
    pub fn new(chapters: Arc<dyn ChapterRepository>) -> Self {
        Self { chapters }
    }

    /// Card count per stored chapter, in chapter order.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Storage` if the store cannot be loaded.
    pub async fn chapter_counts(&self) -> Result<Vec<ChapterCount>, DeckServiceError> {
        let chapters = self.chapters.load_chapters().await?;
        Ok(chapters
            .iter()
            .map(|(chapter, cards)| ChapterCount {
                chapter: *chapter,
                cards: cards.len(),
            })
            .collect())
    }

    /// Prepare a quiz over the requested chapters (all chapters when none is valid).
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Storage` if the store cannot be loaded and
    /// `DeckServiceError::Session` if the selection holds no cards.
    pub async fn quiz_for(&self, requested: &[ChapterId]) -> Result<QuizService, DeckServiceError> {
        let chapters = self.chapters.load_chapters().await?;
        let quiz = QuizService::new(&chapters, requested)?;
        tracing::info!(
            chapters = ?quiz.chapters(),
            cards = quiz.pool().len(),
            "quiz prepared"
        );
        Ok(quiz)
    }
}
