mod markup;
mod transcript;

pub use markup::{Block, ListKind, classify_line, escape_html, format_inline, render_markup};
pub use transcript::render_transcript;
