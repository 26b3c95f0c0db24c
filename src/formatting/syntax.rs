//! Categories and fragments for highlighting Python

use std::borrow::Cow;

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Neutral, // untagged grouping
    Indent,
    Newline,
    Default,
    Primitive,
    Numeric,
    Keyword,
    Operator,
    Function,
    String,
}

impl Syntax {
    /// The highlighting class name of a category, if this is one.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Syntax::Neutral | Syntax::Indent | Syntax::Newline => None,
            Syntax::Default => Some("default"),
            Syntax::Primitive => Some("primitive"),
            Syntax::Numeric => Some("number"),
            Syntax::Keyword => Some("keyword"),
            Syntax::Operator => Some("operator"),
            Syntax::Function => Some("function"),
            Syntax::String => Some("string"),
        }
    }
}

/// A tagged piece of source. Leaves are untouched source text; a tagged node
/// wraps its children in a category. Concatenating the leaves gives back the
/// original text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'i> {
    Text(&'i str),
    Tagged(Syntax, Vec<Fragment<'i>>),
}

impl<'i> Fragment<'i> {
    /// Wrap a single run of text in a category.
    pub fn leaf(syntax: Syntax, text: &'i str) -> Fragment<'i> {
        Fragment::Tagged(syntax, vec![Fragment::Text(text)])
    }

    pub fn syntax(&self) -> Syntax {
        match self {
            Fragment::Text(_) => Syntax::Neutral,
            Fragment::Tagged(syntax, _) => *syntax,
        }
    }

    /// The source text underneath this fragment, with all tagging removed.
    pub fn plain(&self) -> String {
        let mut result = String::new();
        self.write_plain(&mut result);
        result
    }

    fn write_plain(&self, output: &mut String) {
        match self {
            Fragment::Text(text) => output.push_str(text),
            Fragment::Tagged(_, children) => {
                for child in children {
                    child.write_plain(output);
                }
            }
        }
    }
}

/// Trait for different rendering backends (the no-op no-markup one, ANSI
/// escapes for terminal colouring, HTML markup for web pages)
pub trait Render {
    /// Apply styling to content with the specified syntax type. The content
    /// has already been rendered by this backend.
    fn style(&self, syntax: Syntax, content: &str) -> String;

    /// Prepare raw source text for inclusion in the output.
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}
