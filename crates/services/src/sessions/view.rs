use hanzi_core::model::Card;

use super::service::Judgment;

/// Bright green flashed after a correct answer.
pub const CORRECT_COLOR: &str = "#00c853";
/// Bright red flashed after a wrong answer.
pub const WRONG_COLOR: &str = "#ff1744";
/// Glyph color while the card waits for an answer.
pub const NEUTRAL_COLOR: &str = "#ffffff";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphColor {
    Neutral,
    Correct,
    Wrong,
}

impl GlyphColor {
    #[must_use]
    pub fn from_judgment(judgment: Judgment) -> Self {
        match judgment {
            Judgment::Unknown => Self::Neutral,
            Judgment::Correct => Self::Correct,
            Judgment::Incorrect => Self::Wrong,
        }
    }

    /// CSS color value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Neutral => NEUTRAL_COLOR,
            Self::Correct => CORRECT_COLOR,
            Self::Wrong => WRONG_COLOR,
        }
    }
}

/// What the render surface shows for the active card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDisplay {
    pub glyph: String,
    pub color: GlyphColor,
    pub feedback: String,
    pub input_enabled: bool,
}

pub(crate) fn feedback_text(card: &Card, judgment: Judgment) -> String {
    match judgment {
        Judgment::Correct => format!("✅ Correct! ({})", card.meanings_label()),
        Judgment::Incorrect => format!("❌ Wrong. Correct: {}", card.meanings_label()),
        Judgment::Unknown => String::new(),
    }
}
