#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{JsonCardStore, parse_card_store};
pub use repository::{ChapterRepository, InMemoryRepository, Storage, StorageError};
