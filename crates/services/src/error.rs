//! Shared error types for the services crate.

use thiserror::Error;

use hanzi_core::model::DeckError;
use storage::StorageError;

/// Errors emitted by quiz sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    EmptyDeck(#[from] DeckError),
    #[error("the current card has already been answered")]
    AlreadyChecked,
    #[error("quiz already finished")]
    Finished,
    #[error("quiz is still running")]
    NotFinished,
}

/// Errors emitted by `DeckService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
