use std::collections::BTreeMap;

use hanzi_core::model::{Card, ChapterId, ChapterMap};
use serde::Deserialize;

use crate::repository::StorageError;

/// Chapter used for card files that hold a bare list instead of chapters.
pub(crate) const FLAT_FILE_CHAPTER: u32 = 1;

/// Accepted answers: a single string or a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum MeaningsRecord {
    One(String),
    Many(Vec<String>),
}

impl Default for MeaningsRecord {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl MeaningsRecord {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(meaning) => vec![meaning],
            Self::Many(meanings) => meanings,
        }
    }
}

/// Stored shape of a card. Missing fields default to empty so that
/// validation can report which record is broken.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CardRecord {
    #[serde(default)]
    hanzi: String,
    #[serde(default, alias = "meanings")]
    english: MeaningsRecord,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CardStoreFile {
    Chapters(BTreeMap<String, Vec<CardRecord>>),
    Flat(Vec<CardRecord>),
}

fn map_chapter(chapter: ChapterId, records: Vec<CardRecord>) -> Result<Vec<Card>, StorageError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Card::new(record.hanzi, record.english.into_vec()).map_err(|source| {
                StorageError::InvalidCard {
                    chapter,
                    index,
                    source,
                }
            })
        })
        .collect()
}

/// Parse and validate a JSON card store.
///
/// The document is either an object keyed by `chapter<N>` (or `<N>`) whose
/// values are card lists, or a bare card list which becomes chapter 1.
///
/// # Errors
///
/// Returns `StorageError::Parse` for malformed JSON, `InvalidChapterKey` or
/// `DuplicateChapter` for bad keys and `InvalidCard` for records without a
/// glyph or meanings.
pub fn parse_card_store(json: &str) -> Result<ChapterMap, StorageError> {
    let file: CardStoreFile = serde_json::from_str(json)?;
    let mut chapters = ChapterMap::new();

    match file {
        CardStoreFile::Chapters(raw) => {
            for (key, records) in raw {
                let chapter = ChapterId::from_key(&key)?;
                if chapters.contains_key(&chapter) {
                    return Err(StorageError::DuplicateChapter(chapter));
                }
                chapters.insert(chapter, map_chapter(chapter, records)?);
            }
        }
        CardStoreFile::Flat(records) => {
            let chapter = ChapterId::new(FLAT_FILE_CHAPTER);
            chapters.insert(chapter, map_chapter(chapter, records)?);
        }
    }

    Ok(chapters)
}
