use super::types::{Diagnostic, StackEntry};

/// Closing partner for an opening bracket.
fn expected_closer(open: char) -> char {
    match open {
        '{' => '}',
        '[' => ']',
        _ => ')',
    }
}

/// Single left-to-right, top-to-bottom pass over sanitized text.
///
/// Opening brackets push a stack entry recording their position; each
/// closing bracket must pair with the most recently opened entry. The first
/// violation in scan order terminates the scan, so at most one diagnostic
/// ever comes out of a run. Line and column numbers are 1-based.
pub fn match_brackets(sanitized: &str) -> Diagnostic {
    let mut stack: Vec<StackEntry> = Vec::new();

    for (i, line) in sanitized.lines().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            match ch {
                '{' | '[' | '(' => {
                    stack.push(StackEntry {
                        open: ch,
                        line: i + 1,
                        col: j + 1,
                    });
                }
                '}' | ']' | ')' => match stack.pop() {
                    None => {
                        return Diagnostic::UnexpectedClosing {
                            found: ch,
                            line: i + 1,
                            col: j + 1,
                        };
                    }
                    Some(entry) => {
                        let expected = expected_closer(entry.open);
                        if ch != expected {
                            return Diagnostic::Mismatched {
                                found: ch,
                                line: i + 1,
                                col: j + 1,
                                expected,
                                opened_line: entry.line,
                                opened_col: entry.col,
                            };
                        }
                    }
                },
                _ => {}
            }
        }
    }

    // Everything closed in order; any leftover opener is reported from the
    // top of the stack (the innermost unclosed scope).
    match stack.last() {
        Some(entry) => Diagnostic::Unclosed {
            open: entry.open,
            line: entry.line,
            col: entry.col,
        },
        None => Diagnostic::Balanced,
    }
}
