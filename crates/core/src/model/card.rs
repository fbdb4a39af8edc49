use thiserror::Error;

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card glyph cannot be empty")]
    BlankHanzi,

    #[error("card must have at least one meaning")]
    NoMeanings,

    #[error("meaning #{index} is empty")]
    BlankMeaning { index: usize },
}

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A single character flashcard: one glyph and the meanings accepted as answers.
///
/// Immutable once built; `meanings` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    hanzi: String,
    meanings: Vec<String>,
}

impl Card {
    /// Builds a validated card.
    ///
    /// The glyph and every meaning are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `CardError::BlankHanzi` if the glyph is blank,
    /// `CardError::NoMeanings` if no meaning is given and
    /// `CardError::BlankMeaning` if one of the meanings is blank.
    pub fn new(
        hanzi: impl Into<String>,
        meanings: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, CardError> {
        let hanzi = hanzi.into().trim().to_string();
        if hanzi.is_empty() {
            return Err(CardError::BlankHanzi);
        }

        let meanings = meanings
            .into_iter()
            .enumerate()
            .map(|(index, meaning)| {
                let meaning = meaning.into().trim().to_string();
                if meaning.is_empty() {
                    Err(CardError::BlankMeaning { index })
                } else {
                    Ok(meaning)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if meanings.is_empty() {
            return Err(CardError::NoMeanings);
        }

        Ok(Self { hanzi, meanings })
    }

    #[must_use]
    pub fn hanzi(&self) -> &str {
        &self.hanzi
    }

    #[must_use]
    pub fn meanings(&self) -> &[String] {
        &self.meanings
    }

    /// Meanings joined for display, e.g. `"dog, puppy"`.
    #[must_use]
    pub fn meanings_label(&self) -> String {
        self.meanings.join(", ")
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
