//! Property-based tests for highlighting
//!
//! These check that highlighting never loses or invents text, that
//! indentation is preserved, and that no input causes a failure.

use proptest::prelude::*;

use pyhighlight::formatting::tagger::{KEYWORDS, OPERATORS};
use pyhighlight::formatting::*;
use pyhighlight::python_to_html;

use crate::{expected, unmarkup};

/// Generate fragments of Python-looking code
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Keywords and operators
        prop::sample::select(KEYWORDS).prop_map(|s| s.to_string()),
        prop::sample::select(OPERATORS).prop_map(|s| s.to_string()),
        // Identifiers and attribute access
        "[a-z_][a-z0-9_]{0,8}",
        "[a-z_][a-z0-9_]{0,5}\\.[a-z_][a-z0-9_]{0,5}",
        // Numbers
        "-?[0-9]{1,4}(\\.[0-9]{1,3})?",
        // Strings, terminated or not
        "\"[a-z ,:()]{0,8}\"",
        "'[a-z ,:()]{0,8}",
        // Calls and containers
        "[a-z]{1,5}\\([a-z0-9, ]{0,8}\\)",
        "\\[[a-z0-9, ]{0,8}\\]",
        "\\{[a-z0-9\":, ]{0,8}\\}",
    ]
}

/// Generate lines made of Python-looking tokens, with some indentation
fn line_strategy() -> impl Strategy<Value = String> {
    (0..12usize, prop::collection::vec(token_strategy(), 0..8))
        .prop_map(|(indent, tokens)| format!("{}{}", " ".repeat(indent), tokens.join(" ")))
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn python_lines_round_trip(line in line_strategy()) {
            let html = python_to_html(&line);
            prop_assert!(html.ends_with("<br>"));
            prop_assert_eq!(unmarkup(&html), expected(&line));
        }

        #[test]
        fn printable_lines_round_trip(line in "[ -~]{0,60}") {
            let html = python_to_html(&line);
            prop_assert_eq!(unmarkup(&html), expected(&line));
        }

        #[test]
        fn pieces_round_trip(piece in "[ -~]{0,40}") {
            prop_assert_eq!(tag(&piece).plain(), piece);
        }

        #[test]
        fn indentation_width(width in 0..40usize, body in "[a-z]{0,6}") {
            let line = format!("{}{}", " ".repeat(width), body);
            let html = python_to_html(&line);

            let indent = html
                .split("</span>")
                .next()
                .unwrap_or_default();
            prop_assert_eq!(indent.matches("&emsp;").count(), width);
        }

        #[test]
        fn any_text_is_handled(text in any::<String>()) {
            let html = python_to_html(&text);
            prop_assert_eq!(html.matches("<br>").count(), text.split('\n').count());
        }
    }

    #[test]
    fn keywords_inside_identifiers() {
        for keyword in KEYWORDS {
            let word = format!("{}name", keyword);
            assert_ne!(tag(&word).syntax(), Syntax::Keyword, "{}", word);

            let word = format!("my_{}", keyword);
            assert_ne!(tag(&word).syntax(), Syntax::Keyword, "{}", word);
        }
    }
}
