pub mod checker;

pub use checker::{check_source, Diagnostic};
