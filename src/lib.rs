//! Heuristic syntax highlighting for Python source.
//!
//! Each line is classified by its coarse shape, broken into lexical pieces,
//! and every piece is tagged with a category (keyword, operator, string,
//! number, primitive, function, or default), recursing into calls and
//! containers. The resulting fragment tree is then rendered as HTML, ANSI
//! escapes, or plain text.

#[macro_use]
mod cache;

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod rendering;
pub mod templating;

/// Convert Python source into HTML markup using `<span class='python …'>`
/// elements, one `<br>` after each line.
pub fn python_to_html(text: &str) -> String {
    rendering::render(&rendering::Html, text)
}
