//! Breaking text into ordered lexical pieces

use regex::Regex;

use crate::language::{Piece, Shape};

/// Extract the pieces of `text` according to the rule belonging to `shape`.
/// Regex groups are never nested, so capture order is also left-to-right
/// order. Returns an empty Vec if the rule matches nothing.
pub fn extract<'i>(text: &'i str, shape: Shape) -> Vec<Piece<'i>> {
    match shape {
        Shape::Import => import(text),
        Shape::Definition => captures(
            text,
            regex!(r"^(def|class)\s+(\w+(?:\(.*\))?)\s*(?:(->)\s*(.+?))?\s*(:)\s*(.*)$"),
        ),
        Shape::Assignment => captures(text, regex!(r"^(\w+(?:\.\w+)?)\s+(=)\s+(.+)$")),
        Shape::Conditional => captures(text, regex!(r"^(if)\s+(.*?)\s*(:)$")),
        Shape::Call => captures(text, regex!(r"^(\w+(?:\.\w+)*\(.*\))\s*(.*)$")),
        Shape::Evaluation => captures(text, regex!(r"^(.+?)\s*(==|!=)\s*(.+?)\s*(:)?$")),
        Shape::DelimitedList => delimited(text),
        Shape::Fallback => tokens(text),
    }
}

/// Collect every non-empty capture group of every match, in order. A group
/// overlapping a piece already taken is skipped.
pub fn captures<'i>(text: &'i str, regex: &Regex) -> Vec<Piece<'i>> {
    let mut pieces = Vec::new();
    let mut cursor = 0;

    for found in regex.captures_iter(text) {
        for group in found
            .iter()
            .skip(1)
            .flatten()
        {
            if group.is_empty() || group.start() < cursor {
                continue;
            }
            pieces.push(Piece::new(group.start(), group.as_str()));
            cursor = group.end();
        }
    }

    pieces
}

/// Pieces of an import statement: the keywords and module name, followed by
/// the names imported. Only a line that begins as an import yields anything.
pub fn import(text: &str) -> Vec<Piece<'_>> {
    let head = regex!(r"^(?:(import)|(from)\s+([\w.]+)\s+(import))\s+(\S.*)$");

    let Some(found) = head.captures(text) else {
        return Vec::new();
    };

    let mut pieces: Vec<Piece<'_>> = found
        .iter()
        .skip(1)
        .take(4)
        .flatten()
        .map(|group| Piece::new(group.start(), group.as_str()))
        .collect();

    if let Some(tail) = found.get(5) {
        pieces.extend(
            names(tail.as_str())
                .into_iter()
                .map(|piece| piece.shifted(tail.start())),
        );
    }
    pieces
}

/// The imported names: aliases split into words, commas kept, and an
/// enclosing pair of parentheses broken off as pieces of their own.
fn names(text: &str) -> Vec<Piece<'_>> {
    match enclosed(text) {
        Some(last) if text.starts_with('(') => {
            let mut pieces = vec![Piece::new(0, &text[..1])];
            pieces.extend(
                aliases(&text[1..last])
                    .into_iter()
                    .map(|piece| piece.shifted(1)),
            );
            pieces.push(Piece::new(last, &text[last..]));
            pieces
        }
        _ => aliases(text),
    }
}

fn aliases(text: &str) -> Vec<Piece<'_>> {
    partition(text, |c| match c {
        ',' => Split::Emit,
        c if c.is_whitespace() => Split::Drop,
        _ => Split::Keep,
    })
}

/// Tracks bracket depth and quoted strings while walking through text, so
/// that separators nested inside either can be ignored.
#[derive(Debug, Default)]
struct Nesting {
    depth: usize,
    quote: Option<char>,
    escaped: bool,
}

impl Nesting {
    /// Advance over one character, returning true if that character sits at
    /// the top level (outside all brackets and strings).
    fn step(&mut self, c: char) -> bool {
        if let Some(quote) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == quote {
                self.quote = None;
            }
            return false;
        }

        match c {
            '"' | '\'' => {
                self.quote = Some(c);
                false
            }
            '(' | '[' | '{' => {
                self.depth += 1;
                false
            }
            ')' | ']' | '}' => {
                self.depth = self
                    .depth
                    .saturating_sub(1);
                false
            }
            _ => self.depth == 0,
        }
    }
}

/// How a top-level character is treated when partitioning text.
enum Split {
    Keep,
    Drop,
    Emit,
}

/// Partition text into trimmed pieces at top-level separators. Dropped
/// separators only divide; emitted ones also become pieces of their own.
fn partition<'i>(text: &'i str, rule: impl Fn(char) -> Split) -> Vec<Piece<'i>> {
    let mut nesting = Nesting::default();
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if !nesting.step(c) {
            continue;
        }
        match rule(c) {
            Split::Keep => {}
            Split::Drop => {
                pieces.extend(Piece::trimmed(start, &text[start..i]));
                start = i + c.len_utf8();
            }
            Split::Emit => {
                let next = i + c.len_utf8();
                pieces.extend(Piece::trimmed(start, &text[start..i]));
                pieces.push(Piece::new(i, &text[i..next]));
                start = next;
            }
        }
    }
    pieces.extend(Piece::trimmed(start, &text[start..]));

    pieces
}

/// Whitespace separated words, with every top-level colon a piece of its
/// own.
pub fn tokens(text: &str) -> Vec<Piece<'_>> {
    partition(text, |c| match c {
        ':' => Split::Emit,
        c if c.is_whitespace() => Split::Drop,
        _ => Split::Keep,
    })
}

/// Words separated by whitespace, commas, or colons. The separators
/// themselves are not returned.
pub fn words(text: &str) -> Vec<Piece<'_>> {
    partition(text, |c| match c {
        ',' | ':' => Split::Drop,
        c if c.is_whitespace() => Split::Drop,
        _ => Split::Keep,
    })
}

/// Comma separated items, with the commas as pieces between them.
fn items(text: &str) -> Vec<Piece<'_>> {
    partition(text, |c| match c {
        ',' => Split::Emit,
        _ => Split::Keep,
    })
}

/// Pieces of a line that is a list of things: a whole container becomes
/// opener, contents, and closer; anything else is split at top-level commas.
pub fn delimited(text: &str) -> Vec<Piece<'_>> {
    if let Some(last) = enclosed(text) {
        let mut pieces = vec![Piece::new(0, &text[..1])];
        pieces.extend(Piece::trimmed(1, &text[1..last]));
        pieces.push(Piece::new(last, &text[last..]));
        return pieces;
    }
    items(text)
}

/// Pieces of the body of a call or container: items and commas, with a
/// keyword argument further broken into its name, `=`, and value.
pub fn arguments(text: &str) -> Vec<Piece<'_>> {
    let keyword = regex!(r"^(\w+)\s*(=)\s*([^=\s].*)$");

    let mut pieces = Vec::new();
    for item in items(text) {
        let parts = captures(item.text, keyword);
        if parts.is_empty() {
            pieces.push(item);
        } else {
            pieces.extend(
                parts
                    .into_iter()
                    .map(|part| part.shifted(item.offset)),
            );
        }
    }
    pieces
}

/// Find the index of the bracket closing the one found at byte `open`.
/// Quoted strings are skipped over; the kinds of bracket are not required
/// to agree.
pub fn closing(text: &str, open: usize) -> Option<usize> {
    let mut nesting = Nesting::default();

    for (i, c) in text[open..].char_indices() {
        nesting.step(c);
        if nesting.depth == 0 && nesting.quote.is_none() && matches!(c, ')' | ']' | '}') {
            return Some(open + i);
        }
    }
    None
}

/// If the whole of `text` is one bracketed span, the index of its final
/// closing bracket.
pub fn enclosed(text: &str) -> Option<usize> {
    if !text.starts_with(['(', '[', '{']) {
        return None;
    }
    match closing(text, 0) {
        Some(last) if last + 1 == text.len() => Some(last),
        _ => None,
    }
}
