//! Loading Python source and breaking it into lines and pieces

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::LoadingError;

pub mod classify;
pub mod extract;

pub use classify::classify;
pub use extract::extract;

/// Read a file and return an owned String. A filename of "-" reads from
/// standard input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => {
            debug!("Loaded {} bytes from {}", content.len(), filename.display());
            Ok(content)
        }
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Split source text into lines. Every newline starts a new line, so text
/// ending in a newline yields a trailing empty line.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Number of space characters at the start of the line.
pub fn indentation(line: &str) -> usize {
    line.chars()
        .take_while(|c| *c == ' ')
        .count()
}
