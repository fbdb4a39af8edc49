use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::card::Card;
use crate::model::ids::ChapterId;

/// Cards grouped by chapter, iterated in ascending chapter order.
pub type ChapterMap = BTreeMap<ChapterId, Vec<Card>>;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("no cards available for the selected chapters")]
    Empty,
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// The ordered cards in play for one quiz session.
///
/// A deck is never empty and its order never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Wraps an already ordered list of cards.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Empty` if `cards` is empty.
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { cards })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
