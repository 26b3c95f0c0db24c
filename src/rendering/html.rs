//! Renderers for highlighting Python as HTML

use std::borrow::Cow;

use crate::formatting::*;

/// Wrap fragments in `<span>` elements whose classes name their category,
/// for styling with CSS.
pub struct Html;

impl Render for Html {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => {
                let width = content
                    .chars()
                    .filter(|c| *c == ' ')
                    .count();
                format!("<span class='python'>{}</span>", "&emsp;".repeat(width))
            }
            Syntax::Newline => "<br>".to_string(),
            _ => match syntax.class() {
                Some(class) => markup(class, content),
                None => content.to_string(),
            },
        }
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape_html(text)
    }
}

fn escape_html(content: &str) -> Cow<'_, str> {
    if content.contains(['&', '<', '>']) {
        Cow::Owned(
            content
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;"),
        )
    } else {
        Cow::Borrowed(content)
    }
}

fn markup(class: &str, content: &str) -> String {
    let mut result = String::with_capacity(26 + class.len() + content.len() + 7);
    result.push_str("<span class='python ");
    result.push_str(class);
    result.push_str("'>");
    result.push_str(content);
    result.push_str("</span>");
    result
}
