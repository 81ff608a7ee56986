//! HTTP route handlers.

pub mod entries;
pub mod health;
pub mod reports;

use domain::models::Diagnostic;
use serde::Serialize;

/// A load diagnostic as returned to clients.
#[derive(Debug, Serialize)]
pub struct Warning {
    pub message: String,
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

impl From<Diagnostic> for Warning {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            message: diagnostic.to_string(),
            diagnostic,
        }
    }
}

pub(crate) fn warnings(diagnostics: Vec<Diagnostic>) -> Vec<Warning> {
    crate::middleware::metrics::record_schema_drift(diagnostics.len());
    diagnostics.into_iter().map(Warning::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_serialization_flattens_diagnostic() {
        let warning = Warning::from(Diagnostic::SchemaDrift {
            expected: vec!["姓名".to_string()],
            found: vec!["名字".to_string()],
            missing: vec!["姓名".to_string()],
        });
        let json = serde_json::to_value(&warning).unwrap();

        assert_eq!(json["kind"], "schema_drift");
        assert_eq!(json["missing"][0], "姓名");
        assert!(json["message"].as_str().unwrap().contains("名字"));
    }
}
