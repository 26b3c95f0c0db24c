//! Templates for rendering highlighted Python into finished output

mod bare;
mod page;
mod template;

pub use bare::Bare;
pub use page::Page;
pub use template::Template;

use tinytemplate::error::Error;

/// Render Python source using the specified template
pub fn fill(template: &impl Template, title: &str, source: &str) -> Result<String, Error> {
    template.render(title, source)
}
