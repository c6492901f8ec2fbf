use std::fmt;

use serde::Serialize;

/// An opening bracket that has not been matched yet, and where it was seen.
#[derive(Debug, Clone, Copy)]
pub struct StackEntry {
    pub open: char,
    pub line: usize,
    pub col: usize,
}

/// Outcome of one checking run. At most one is produced per run; the first
/// structural violation in scan order wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Diagnostic {
    Balanced,
    UnexpectedClosing {
        found: char,
        line: usize,
        col: usize,
    },
    Mismatched {
        found: char,
        line: usize,
        col: usize,
        expected: char,
        opened_line: usize,
        opened_col: usize,
    },
    Unclosed {
        open: char,
        line: usize,
        col: usize,
    },
}

impl Diagnostic {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Diagnostic::Balanced)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Balanced => write!(f, "No balance errors found."),
            Diagnostic::UnexpectedClosing { found, line, col } => {
                write!(f, "Error: Unexpected closing '{}' at line {}, col {}", found, line, col)
            }
            Diagnostic::Mismatched {
                found,
                line,
                col,
                expected,
                opened_line,
                opened_col,
            } => {
                write!(
                    f,
                    "Error: Mismatched '{}' at line {}, col {}. Expected '{}' (opened at {}:{})",
                    found, line, col, expected, opened_line, opened_col
                )
            }
            Diagnostic::Unclosed { open, line, col } => {
                write!(f, "Error: Unclosed '{}' at line {}, col {}", open, line, col)
            }
        }
    }
}
