mod plan;
mod progress;
mod service;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use plan::{DeckBuilder, build_deck, build_deck_with_rng};
pub use progress::{QuizProgress, QuizResult};
pub use service::{Judgment, QuizPhase, QuizSession, Reveal, RevealPoll};
pub use view::{CORRECT_COLOR, CardDisplay, GlyphColor, NEUTRAL_COLOR, WRONG_COLOR};
pub use workflow::QuizService;
