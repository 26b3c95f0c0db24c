//! Renderers for highlighting Python source

mod html;
mod terminal;

pub use html::Html;
pub use terminal::Terminal;

use crate::formatting::*;

/// We do the highlighting in two passes. First we convert the source into a
/// Vec of fragment trees (Syntax tag over child fragments). Then second we
/// apply the specified renderer to each tree to result in an
/// embellished/highlighted/marked-up String.
pub fn render(renderer: &impl Render, text: &str) -> String {
    // Pass 1: Classify and tag every line
    let fragments = format(text);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, &fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
pub fn render_to_string(renderer: &impl Render, fragments: &[Fragment]) -> String {
    let mut output = String::new();

    for fragment in fragments {
        render_fragment(renderer, fragment, &mut output);
    }

    output
}

fn render_fragment(renderer: &impl Render, fragment: &Fragment, output: &mut String) {
    match fragment {
        Fragment::Text(text) => output.push_str(&renderer.escape(text)),
        Fragment::Tagged(syntax, children) => {
            let mut content = String::new();
            for child in children {
                render_fragment(renderer, child, &mut content);
            }
            output.push_str(&renderer.style(*syntax, &content));
        }
    }
}
