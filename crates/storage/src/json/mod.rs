use std::path::PathBuf;

use async_trait::async_trait;
use hanzi_core::model::ChapterMap;
use tokio::sync::OnceCell;

use crate::repository::{ChapterRepository, StorageError};

mod mapping;

pub use mapping::parse_card_store;

/// Card store read from a JSON file.
///
/// The file is read and validated once; later loads return the cached chapters.
pub struct JsonCardStore {
    path: PathBuf,
    cache: OnceCell<ChapterMap>,
}

impl JsonCardStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    async fn read(&self) -> Result<ChapterMap, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;
        let chapters = parse_card_store(&raw)?;
        tracing::info!(
            path = %self.path.display(),
            chapters = chapters.len(),
            cards = chapters.values().map(Vec::len).sum::<usize>(),
            "loaded card store"
        );
        Ok(chapters)
    }
}

#[async_trait]
impl ChapterRepository for JsonCardStore {
    async fn load_chapters(&self) -> Result<ChapterMap, StorageError> {
        self.cache
            .get_or_try_init(|| self.read())
            .await
            .cloned()
    }
}
