//! Template trait for wrapping highlighted Python into output documents

use tinytemplate::error::Error;

/// Trait for templates that take Python source and produce finished markup
pub trait Template {
    /// Render the source, using the title where the template has one
    fn render(&self, title: &str, source: &str) -> Result<String, Error>;
}
