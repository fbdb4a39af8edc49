use async_trait::async_trait;
use hanzi_core::model::{CardError, ChapterId, ChapterIdError, ChapterMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::json::JsonCardStore;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read card store {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("card store is not valid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidChapterKey(#[from] ChapterIdError),

    #[error("chapter {0} appears more than once")]
    DuplicateChapter(ChapterId),

    #[error("invalid card #{index} in chapter {chapter}: {source}")]
    InvalidCard {
        chapter: ChapterId,
        index: usize,
        #[source]
        source: CardError,
    },
}

/// Read-only source of chapter-keyed cards.
#[async_trait]
pub trait ChapterRepository: Send + Sync {
    /// Load every chapter with its validated cards.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or holds malformed records.
    async fn load_chapters(&self) -> Result<ChapterMap, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    chapters: Arc<ChapterMap>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(chapters: ChapterMap) -> Self {
        Self {
            chapters: Arc::new(chapters),
        }
    }
}

#[async_trait]
impl ChapterRepository for InMemoryRepository {
    async fn load_chapters(&self) -> Result<ChapterMap, StorageError> {
        Ok(self.chapters.as_ref().clone())
    }
}

/// Holds the chapter repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub chapters: Arc<dyn ChapterRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(chapters: ChapterMap) -> Self {
        Self {
            chapters: Arc::new(InMemoryRepository::new(chapters)),
        }
    }

    /// Card store backed by a JSON file, read on first use and cached afterwards.
    #[must_use]
    pub fn json_file(path: impl AsRef<Path>) -> Self {
        Self {
            chapters: Arc::new(JsonCardStore::new(path.as_ref())),
        }
    }
}
