//! Tagging pieces of Python with their highlighting category

use tracing::debug;

use crate::formatting::*;
use crate::language::Piece;
use crate::parsing::classify;
use crate::parsing::extract::{arguments, closing, enclosed, words};

pub const KEYWORDS: &[&str] = &[
    "and", "or", "not", "is", "as", "assert", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "lambda", "pass",
    "raise", "return", "try", "while", "with", "yield", "in",
];

pub const OPERATORS: &[&str] = &[
    "=", "==", "!=", "+", "-", "/", ",", ".", "[", "]", "{", "}", "(", ")", "!", ":", "->",
];

pub const PRIMITIVES: &[&str] = &["str", "int", "float", "bool"];

/// Calls and containers nested deeper than this are tagged as a whole,
/// without looking inside.
pub const MAX_NESTING: usize = 64;

/// Tag a single piece of source.
pub fn tag(piece: &str) -> Fragment<'_> {
    tag_nested(piece, 0)
}

/// Classify a line and tag each of its pieces. Text between the pieces is
/// kept as it was.
pub fn tag_line(line: &str) -> Vec<Fragment<'_>> {
    let mut output = Tagger::new(0);
    output.append_classified(line);
    output.fragments
}

fn tag_nested(piece: &str, depth: usize) -> Fragment<'_> {
    let text = piece.trim();
    if text.is_empty() {
        return Fragment::Text(piece);
    }
    if text.len() != piece.len() {
        let mut sub = Tagger::new(depth);
        sub.append_piece(piece);
        return sub.wrap(Syntax::Neutral);
    }

    if KEYWORDS.contains(&text) {
        return Fragment::leaf(Syntax::Keyword, text);
    }
    if OPERATORS.contains(&text) {
        return Fragment::leaf(Syntax::Operator, text);
    }

    let nested = depth < MAX_NESTING;
    if !nested {
        debug!(depth, "Nesting limit reached");
    }

    if nested {
        if let Some(open) = call(text) {
            let last = text.len() - 1;
            let body = &text[open + 1..last];

            let mut sub = Tagger::new(depth + 1);
            sub.append_text(&text[..=open]);
            let syntax = if PRIMITIVES.contains(&&text[..open]) {
                sub.append_piece(body);
                Syntax::Primitive
            } else {
                sub.append_arguments(body);
                Syntax::Function
            };
            sub.append_text(&text[last..]);
            return sub.wrap(syntax);
        }
    }

    if is_string(text) {
        return Fragment::leaf(Syntax::String, text);
    }
    if regex!(r"^-?[0-9]+(\.[0-9]+)?$").is_match(text) {
        return Fragment::leaf(Syntax::Numeric, text);
    }

    if nested {
        if let Some(last) = enclosed(text) {
            let mut sub = Tagger::new(depth + 1);
            sub.append_text(&text[..1]);
            sub.append_arguments(&text[1..last]);
            sub.append_text(&text[last..]);
            return sub.wrap(Syntax::Default);
        }
    }

    if regex!(r"^\w*\.?\w+$").is_match(text) {
        return Fragment::leaf(Syntax::Default, text);
    }

    if nested {
        let pieces = words(text);
        let smaller = match pieces.as_slice() {
            [] => false,
            [only] => only.text.len() < text.len(),
            _ => true,
        };
        if smaller {
            let mut sub = Tagger::new(depth + 1);
            sub.append_spliced(text, &pieces, Tagger::append_piece);
            return sub.wrap(Syntax::Default);
        }
    }

    Fragment::leaf(Syntax::Default, text)
}

/// If text is a call `name(…)` or `a.b(…)` whose parenthesis closes at the
/// very end, the index of the opening parenthesis.
fn call(text: &str) -> Option<usize> {
    let name = regex!(r"^\w+(?:\.\w+)*\(").find(text)?;
    let open = name.end() - 1;
    match closing(text, open) {
        Some(last) if last + 1 == text.len() => Some(open),
        _ => None,
    }
}

/// Whether text is one complete quoted string: it opens with a quote and the
/// first unescaped matching quote is the final character.
fn is_string(text: &str) -> bool {
    let mut chars = text.char_indices();
    let quote = match chars.next() {
        Some((_, c)) if c == '"' || c == '\'' => c,
        _ => return false,
    };

    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + c.len_utf8() == text.len();
        }
    }
    false
}

/// Accumulates the children of one tagged node.
struct Tagger<'i> {
    fragments: Vec<Fragment<'i>>,
    depth: usize,
}

impl<'i> Tagger<'i> {
    fn new(depth: usize) -> Tagger<'i> {
        Tagger {
            fragments: Vec::new(),
            depth,
        }
    }

    fn wrap(self, syntax: Syntax) -> Fragment<'i> {
        Fragment::Tagged(syntax, self.fragments)
    }

    fn append_text(&mut self, text: &'i str) {
        if !text.is_empty() {
            self.fragments
                .push(Fragment::Text(text));
        }
    }

    /// Tag a piece, keeping any whitespace around it untagged.
    fn append_piece(&mut self, piece: &'i str) {
        let core = piece.trim_start();
        let leading = piece.len() - core.len();
        let core = core.trim_end();
        let trailing = leading + core.len();

        self.append_text(&piece[..leading]);
        if !core.is_empty() {
            self.fragments
                .push(tag_nested(core, self.depth));
        }
        self.append_text(&piece[trailing..]);
    }

    /// Run the text back through line classification, then tag what that
    /// finds.
    fn append_classified(&mut self, text: &'i str) {
        let pieces = classify(text);
        self.append_spliced(text, &pieces, Tagger::append_piece);
    }

    /// Tag the comma separated body of a call or container, classifying each
    /// argument as if it were a line of its own.
    fn append_arguments(&mut self, text: &'i str) {
        let pieces = arguments(text);
        self.append_spliced(text, &pieces, Tagger::append_classified);
    }

    /// Rebuild text from its pieces by position: each piece goes through
    /// `each`, and whatever lies between pieces is kept as plain text.
    fn append_spliced(
        &mut self,
        text: &'i str,
        pieces: &[Piece<'i>],
        each: fn(&mut Tagger<'i>, &'i str),
    ) {
        let mut cursor = 0;
        for piece in pieces {
            if piece.offset < cursor {
                continue;
            }
            self.append_text(&text[cursor..piece.offset]);
            each(self, piece.text);
            cursor = piece.end();
        }
        self.append_text(&text[cursor..]);
    }
}
