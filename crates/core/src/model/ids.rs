use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix used by chapter keys in the card store (`chapter3`).
pub const CHAPTER_KEY_PREFIX: &str = "chapter";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid chapter key: {raw:?}")]
pub struct ChapterIdError {
    pub raw: String,
}

/// Numeric identifier for a chapter of cards.
///
/// Ordering is numeric, so `ChapterId(2) < ChapterId(10)` even though the
/// stored keys `chapter2`/`chapter10` would sort the other way as strings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterId(u32);

impl ChapterId {
    /// Creates a new `ChapterId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parses a card store key: `chapter<N>` or a bare `<N>`.
    ///
    /// # Errors
    ///
    /// Returns `ChapterIdError` if the key carries no chapter number.
    pub fn from_key(key: &str) -> Result<Self, ChapterIdError> {
        let trimmed = key.trim();
        let digits = trimmed
            .strip_prefix(CHAPTER_KEY_PREFIX)
            .unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ChapterIdError {
                raw: key.to_string(),
            })
    }

    /// The key this chapter is stored under.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{CHAPTER_KEY_PREFIX}{}", self.0)
    }
}

impl fmt::Debug for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChapterId({})", self.0)
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChapterId {
    type Err = ChapterIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}
