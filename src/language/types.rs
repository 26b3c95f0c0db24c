//! Types describing pieces of Python source as they are carved up

/// A contiguous piece of source text, carrying its byte offset within the
/// text it was extracted from. Pieces are not yet classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'i> {
    pub offset: usize,
    pub text: &'i str,
}

impl<'i> Piece<'i> {
    pub fn new(offset: usize, text: &'i str) -> Piece<'i> {
        Piece { offset, text }
    }

    /// Build a piece from `text` starting at `offset`, with surrounding
    /// whitespace removed. Returns None if nothing remains.
    pub fn trimmed(offset: usize, text: &'i str) -> Option<Piece<'i>> {
        let leading = text.len() - text.trim_start().len();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(Piece::new(offset + leading, text))
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Move the piece so its offset is relative to an enclosing text in
    /// which the original text began at `base`.
    pub fn shifted(self, base: usize) -> Piece<'i> {
        Piece {
            offset: self.offset + base,
            text: self.text,
        }
    }
}

/// The coarse shape of a line of Python, which decides how it is broken
/// into pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Import,
    Definition,
    Assignment,
    Conditional,
    Call,
    Evaluation,
    DelimitedList,
    Fallback,
}

impl Shape {
    /// Every shape, in the order lines are tested against them.
    pub const PRIORITY: [Shape; 8] = [
        Shape::Import,
        Shape::Definition,
        Shape::Assignment,
        Shape::Conditional,
        Shape::Call,
        Shape::Evaluation,
        Shape::DelimitedList,
        Shape::Fallback,
    ];
}
