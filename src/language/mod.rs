// Types representing pieces of highlighted Python source

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
