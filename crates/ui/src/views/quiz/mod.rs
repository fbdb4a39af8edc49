mod glyph;
mod quiz;

pub use glyph::GlyphBox;
pub use quiz::QuizView;
#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;
