//! Non-fatal findings produced while reading the log.

use serde::Serialize;
use std::fmt;

/// A problem with the sheet that did not stop the read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The header row differs from the expected columns. Cells were mapped by
    /// name; missing columns read as empty.
    SchemaDrift {
        expected: Vec<String>,
        found: Vec<String>,
        missing: Vec<String>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SchemaDrift {
                expected, found, ..
            } => write!(
                f,
                "Sheet header does not match the expected columns (order matters). Expected: [{}]. Found: [{}]. Fix the first row to avoid misplaced data.",
                expected.join(", "),
                found.join(", ")
            ),
        }
    }
}
