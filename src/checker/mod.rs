mod matcher;
mod sanitizer;
mod types;

pub use matcher::match_brackets;
pub use sanitizer::sanitize;
pub use types::{Diagnostic, StackEntry};

/// Full checking pipeline: sanitize the text, then match brackets.
pub fn check_source(source: &str) -> Diagnostic {
    match_brackets(&sanitize(source))
}
