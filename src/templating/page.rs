//! Page template - a standalone HTML document with a stylesheet

use serde::Serialize;
use tinytemplate::error::Error;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::python_to_html;

use super::Template;

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{stylesheet | unescaped}
</style>
</head>
<body>
<div class="python">
{body | unescaped}
</div>
</body>
</html>
"#;

static STYLESHEET: &'static str = r#"div.python { font-family: monospace; white-space: nowrap; }
span.python.default { color: #2e3436; }
span.python.primitive { color: #8f5902; font-weight: bold; }
span.python.number { color: #ad7fa8; }
span.python.keyword { color: #75507b; font-weight: bold; }
span.python.operator { color: #cc0000; }
span.python.function { color: #3465a4; }
span.python.string { color: #4e9a06; }"#;

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    stylesheet: &'static str,
    body: String,
}

/// Template for a complete web page showing the highlighted source
pub struct Page;

impl Template for Page {
    fn render(&self, title: &str, source: &str) -> Result<String, Error> {
        let mut tt = TinyTemplate::new();
        tt.add_template("page", TEMPLATE)?;

        let context = Context {
            title,
            stylesheet: STYLESHEET,
            body: python_to_html(source),
        };
        debug!("Rendering page of {} bytes", context.body.len());

        tt.render("page", &context)
    }
}
