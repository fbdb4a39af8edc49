mod card;
mod deck;
mod ids;

pub use card::{Card, CardError};
pub use deck::{ChapterMap, Deck, DeckError};
pub use ids::{ChapterId, ChapterIdError};
