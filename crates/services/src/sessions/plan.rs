use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use hanzi_core::model::{Card, ChapterId, ChapterMap, Deck, DeckError};

/// Assembles a shuffled deck from the chapters of a card store.
///
/// Requested chapters that do not exist are ignored. When nothing valid is
/// requested every chapter is used, in ascending chapter order.
pub struct DeckBuilder<'a> {
    chapters: &'a ChapterMap,
    requested: Vec<ChapterId>,
}

impl<'a> DeckBuilder<'a> {
    #[must_use]
    pub fn new(chapters: &'a ChapterMap) -> Self {
        Self {
            chapters,
            requested: Vec::new(),
        }
    }

    /// Restrict the deck to the given chapters.
    #[must_use]
    pub fn with_chapters(mut self, requested: &[ChapterId]) -> Self {
        self.requested = requested.to_vec();
        self
    }

    /// Chapters the deck is built from, ascending and without duplicates.
    #[must_use]
    pub fn selected_chapters(&self) -> Vec<ChapterId> {
        let mut selected: Vec<ChapterId> = self
            .requested
            .iter()
            .copied()
            .filter(|id| self.chapters.contains_key(id))
            .collect();
        selected.sort_unstable();
        selected.dedup();

        if selected.is_empty() {
            if !self.requested.is_empty() {
                tracing::debug!(
                    requested = ?self.requested,
                    "no requested chapter exists, using every chapter"
                );
            }
            return self.chapters.keys().copied().collect();
        }
        selected
    }

    /// Cards of the selected chapters concatenated in chapter order, unshuffled.
    #[must_use]
    pub fn pool(&self) -> Vec<Card> {
        self.selected_chapters()
            .iter()
            .filter_map(|id| self.chapters.get(id))
            .flatten()
            .cloned()
            .collect()
    }

    /// Build the deck using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Empty` if the selected chapters hold no cards.
    pub fn build(self) -> Result<Deck, DeckError> {
        let mut rng = rng();
        self.build_with_rng(&mut rng)
    }

    /// Build the deck with a caller-provided RNG.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Empty` if the selected chapters hold no cards.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Deck, DeckError> {
        shuffled_deck(self.pool(), rng)
    }
}

/// Shuffle `cards` once and wrap them as a deck.
pub(crate) fn shuffled_deck<R: Rng + ?Sized>(
    mut cards: Vec<Card>,
    rng: &mut R,
) -> Result<Deck, DeckError> {
    cards.as_mut_slice().shuffle(rng);
    Deck::new(cards)
}

/// Build a shuffled deck from the requested chapters (all chapters when none is valid).
///
/// # Errors
///
/// Returns `DeckError::Empty` if no card is available.
pub fn build_deck(chapters: &ChapterMap, requested: &[ChapterId]) -> Result<Deck, DeckError> {
    DeckBuilder::new(chapters).with_chapters(requested).build()
}

/// Same as [`build_deck`] with a caller-provided RNG.
///
/// # Errors
///
/// Returns `DeckError::Empty` if no card is available.
pub fn build_deck_with_rng<R: Rng + ?Sized>(
    chapters: &ChapterMap,
    requested: &[ChapterId],
    rng: &mut R,
) -> Result<Deck, DeckError> {
    DeckBuilder::new(chapters)
        .with_chapters(requested)
        .build_with_rng(rng)
}
