#[cfg(test)]
mod scenarios {
    use pyhighlight::formatting::*;
    use pyhighlight::python_to_html;

    const INDENT: &str = "<span class='python'></span>";

    fn span(class: &str, content: &str) -> String {
        format!("<span class='python {}'>{}</span>", class, content)
    }

    #[test]
    fn assignment() {
        let expected = format!(
            "{}{} {} {}<br>",
            INDENT,
            span("default", "x"),
            span("operator", "="),
            span("number", "5")
        );
        assert_eq!(python_to_html("x = 5"), expected);
    }

    #[test]
    fn definition() {
        let signature = format!(
            "foo({}{} {})",
            span("default", "self"),
            span("operator", ","),
            span("default", "text")
        );
        let expected = format!(
            "{}{} {}{}<br>",
            INDENT,
            span("keyword", "def"),
            span("function", &signature),
            span("operator", ":")
        );
        assert_eq!(python_to_html("def foo(self, text):"), expected);
    }

    #[test]
    fn definition_with_return_type() {
        let fragments = tag_line("def area(self) -> float:");
        let syntaxes: Vec<Syntax> = fragments
            .iter()
            .filter(|fragment| !matches!(fragment, Fragment::Text(_)))
            .map(Fragment::syntax)
            .collect();
        assert_eq!(
            syntaxes,
            vec![
                Syntax::Keyword,
                Syntax::Function,
                Syntax::Operator,
                Syntax::Default,
                Syntax::Operator,
            ]
        );
    }

    #[test]
    fn nested_call() {
        let primitive = span("primitive", &format!("str({})", span("number", "5")));
        let expected = format!(
            "{}{}<br>",
            INDENT,
            span("function", &format!("print({})", primitive))
        );
        assert_eq!(python_to_html("print(str(5))"), expected);
    }

    #[test]
    fn import() {
        let expected = format!(
            "{}{} {} {} {}<br>",
            INDENT,
            span("keyword", "from"),
            span("default", "os"),
            span("keyword", "import"),
            span("default", "path")
        );
        assert_eq!(python_to_html("from os import path"), expected);
    }

    #[test]
    fn parenthesized_import() {
        let expected = format!(
            "{}{} {} {} {}{}{} {}{}<br>",
            INDENT,
            span("keyword", "from"),
            span("default", "x"),
            span("keyword", "import"),
            span("operator", "("),
            span("default", "a"),
            span("operator", ","),
            span("default", "b"),
            span("operator", ")")
        );
        assert_eq!(python_to_html("from x import (a, b)"), expected);
    }

    #[test]
    fn mentioning_import_is_not_an_import() {
        let call = format!(
            "weigh({}{} {})",
            span("default", "a"),
            span("operator", ","),
            span("default", "b")
        );
        let expected = format!(
            "{}{} {} {}<br>",
            INDENT,
            span("default", "importance"),
            span("operator", "="),
            span("function", &call)
        );
        assert_eq!(python_to_html("importance = weigh(a, b)"), expected);
    }

    #[test]
    fn conditional() {
        let condition = format!(
            "{} {} {}",
            span("default", "x"),
            span("operator", "=="),
            span("number", "1")
        );
        let expected = format!(
            "{}{} {}{}<br>",
            INDENT,
            span("keyword", "if"),
            span("default", &condition),
            span("operator", ":")
        );
        assert_eq!(python_to_html("if x == 1:"), expected);
    }

    #[test]
    fn repeated_arguments() {
        let arguments = format!(
            "foo({}{} {})",
            span("default", "x"),
            span("operator", ","),
            span("default", "x")
        );
        let expected = format!("{}{}<br>", INDENT, span("function", &arguments));
        assert_eq!(python_to_html("foo(x, x)"), expected);
    }

    #[test]
    fn indentation() {
        let expected = format!(
            "<span class='python'>&emsp;&emsp;&emsp;&emsp;</span>{}<br>",
            span("keyword", "pass")
        );
        assert_eq!(python_to_html("    pass"), expected);
    }

    #[test]
    fn lines_are_separated() {
        let result = python_to_html("pass\n\nbreak");
        assert_eq!(
            result,
            format!(
                "{}{}<br>{}<br>{}{}<br>",
                INDENT,
                span("keyword", "pass"),
                INDENT,
                INDENT,
                span("keyword", "break")
            )
        );
    }

    #[test]
    fn markup_in_source_is_escaped() {
        let result = python_to_html("x = a < b");
        assert!(result.contains("&lt;"));
        assert!(!result.contains(" < "));
    }

    #[test]
    fn empty_input() {
        assert_eq!(python_to_html(""), format!("{}<br>", INDENT));
    }
}
