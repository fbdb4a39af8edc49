use dioxus::prelude::*;

/// Side of the square the glyph is drawn in, in pixels.
pub const GLYPH_BOX_SIZE: u32 = 300;

/// Draws one character centered in a dark square, filled with `color`.
#[component]
pub fn GlyphBox(glyph: String, color: &'static str) -> Element {
    rsx! {
        div {
            class: "glyph-box",
            id: "quiz-glyph",
            style: "width: {GLYPH_BOX_SIZE}px; height: {GLYPH_BOX_SIZE}px;",
            span { class: "glyph-box__char", style: "color: {color};", "{glyph}" }
        }
    }
}
