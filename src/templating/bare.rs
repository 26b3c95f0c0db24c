//! Bare template - the highlighted markup on its own

use tinytemplate::error::Error;

use crate::python_to_html;

use super::Template;

/// Template producing only the HTML for the source, ready to be embedded in
/// some other page
pub struct Bare;

impl Template for Bare {
    fn render(&self, _title: &str, source: &str) -> Result<String, Error> {
        Ok(python_to_html(source))
    }
}
