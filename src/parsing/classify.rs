//! Deciding what shape a line of Python has

use tracing::trace;

use crate::language::{Piece, Shape};

use super::extract::extract;

/// Coarse test of whether a (trimmed) line looks like the given shape. These
/// are loose; overlaps are resolved purely by the order in
/// Shape::PRIORITY.
pub fn recognizes(shape: Shape, line: &str) -> bool {
    match shape {
        Shape::Import => line.contains("import") || line.contains("from"),
        Shape::Definition => line.contains("def") || line.contains("class"),
        Shape::Assignment => regex!(r"\w+\s=\s").is_match(line),
        Shape::Conditional => regex!(r"^if\b.*:$").is_match(line),
        Shape::Call => regex!(r"^\w+(\.\w+)*\(.*\)").is_match(line),
        Shape::Evaluation => line.contains("==") || line.contains("!="),
        Shape::DelimitedList => regex!(r"[^,]+,").is_match(line),
        Shape::Fallback => true,
    }
}

/// The first shape, in priority order, that the line is recognized as.
pub fn shape_of(line: &str) -> Shape {
    let line = line.trim();
    Shape::PRIORITY
        .into_iter()
        .find(|shape| recognizes(*shape, line))
        .unwrap_or(Shape::Fallback)
}

/// Break one line of Python into its pieces. Surrounding whitespace is
/// ignored, but offsets remain relative to the line as given.
pub fn classify(line: &str) -> Vec<Piece<'_>> {
    let leading = line.len() - line.trim_start().len();
    let text = line.trim();

    let shape = shape_of(text);
    trace!(?shape, line = text, "classified");

    let mut pieces = extract(text, shape);
    if pieces.is_empty() && shape != Shape::Fallback {
        trace!(?shape, "nothing extracted; falling back");
        pieces = extract(text, Shape::Fallback);
    }

    pieces
        .into_iter()
        .map(|piece| piece.shifted(leading))
        .collect()
}
