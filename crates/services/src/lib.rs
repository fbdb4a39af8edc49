#![forbid(unsafe_code)]

pub mod deck_service;
pub mod error;
pub mod sessions;

pub use hanzi_core::Clock;
pub use sessions as session;

pub use deck_service::{ChapterCount, DeckService};
pub use error::{DeckServiceError, SessionError};

pub use sessions::{
    CardDisplay, DeckBuilder, GlyphColor, Judgment, QuizPhase, QuizProgress, QuizResult,
    QuizService, QuizSession, Reveal, RevealPoll, build_deck, build_deck_with_rng,
};
