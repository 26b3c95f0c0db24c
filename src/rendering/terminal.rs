//! Renderers for colourizing Python in a terminal

use owo_colors::{Rgb, Style};

use crate::formatting::*;

const RESET: &str = "\u{1b}[0m";

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Newline => "\n".to_string(),
            _ => match colour(syntax) {
                Some(rgb) => paint(
                    content,
                    Style::new()
                        .color(rgb)
                        .bold(),
                ),
                None => content.to_string(),
            },
        }
    }
}

fn colour(syntax: Syntax) -> Option<Rgb> {
    match syntax {
        Syntax::Neutral | Syntax::Indent | Syntax::Newline | Syntax::Default => None,
        Syntax::Primitive => Some(Rgb(0x8f, 0x59, 0x02)), // storage.type - brown
        Syntax::Numeric => Some(Rgb(0xad, 0x7f, 0xa8)), // constant.numeric - purple
        Syntax::Keyword => Some(Rgb(0x75, 0x50, 0x7b)), // keyword.control - purple
        Syntax::Operator => Some(Rgb(204, 0, 0)),       // keyword.operator - red
        Syntax::Function => Some(Rgb(52, 101, 164)),    // entity.name.function - blue
        Syntax::String => Some(Rgb(0x4e, 0x9a, 0x06)),  // string - green
    }
}

/// Content of a composite fragment contains children that are already
/// styled, each ending in a reset, so the style is applied afresh to every
/// run of text between resets.
fn paint(content: &str, style: Style) -> String {
    content
        .split(RESET)
        .filter(|run| !run.is_empty())
        .map(|run| {
            style
                .style(run)
                .to_string()
        })
        .collect()
}
