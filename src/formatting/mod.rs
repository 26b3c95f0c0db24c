//! Turning lines of Python into trees of tagged fragments

mod syntax;
pub mod tagger;

// Re-export all public symbols
pub use syntax::*;
pub use tagger::{tag, tag_line};

use crate::parsing;

/// Fragments for one line: its indentation, the tagged pieces of its
/// trimmed content, and a line break.
pub fn format_line(line: &str) -> Vec<Fragment<'_>> {
    let width = parsing::indentation(line);

    let mut fragments = Vec::new();
    fragments.push(Fragment::leaf(Syntax::Indent, &line[..width]));
    fragments.extend(tag_line(line.trim()));
    fragments.push(Fragment::leaf(Syntax::Newline, "\n"));
    fragments
}

/// Fragments for every line of the given source text.
pub fn format(text: &str) -> Vec<Fragment<'_>> {
    parsing::lines(text)
        .flat_map(format_line)
        .collect()
}
