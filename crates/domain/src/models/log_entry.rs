//! Borrow/return event log model.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

// ============================================================================
// Schema
// ============================================================================

/// Header row of the event log, in the exact order cells are written.
pub const COLUMNS: [&str; 7] = ["時間", "姓名", "學號", "動作", "服裝名稱", "數量", "備註"];

pub const COL_TIMESTAMP: &str = COLUMNS[0];
pub const COL_PERSON_NAME: &str = COLUMNS[1];
pub const COL_PERSON_ID: &str = COLUMNS[2];
pub const COL_ACTION: &str = COLUMNS[3];
pub const COL_ITEM_NAME: &str = COLUMNS[4];
pub const COL_QUANTITY: &str = COLUMNS[5];
pub const COL_NOTE: &str = COLUMNS[6];

/// Action label written for a borrow.
pub const BORROW_LABEL: &str = "借用";

/// Action label written for a return.
pub const RETURN_LABEL: &str = "歸還";

// ============================================================================
// Enums
// ============================================================================

/// Direction of an inventory movement.
///
/// Only two members exist on purpose. When classifying labels read back from
/// the sheet, a label counts as [`Action::Return`] only if it is exactly
/// `歸還`; every other label, typos and blanks included, counts as a borrow.
/// Hand-edited rows with a misspelled return therefore *increase* the
/// outstanding balance instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "借用", alias = "borrow", alias = "BORROW")]
    Borrow,
    #[serde(rename = "歸還", alias = "return", alias = "RETURN")]
    Return,
}

impl Action {
    /// Returns the label stored in the log.
    pub fn as_label(&self) -> &'static str {
        match self {
            Action::Borrow => BORROW_LABEL,
            Action::Return => RETURN_LABEL,
        }
    }

    /// Classifies a stored label. Never fails, see the type docs.
    pub fn from_label(label: &str) -> Self {
        if label == RETURN_LABEL {
            Action::Return
        } else {
            Action::Borrow
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

// ============================================================================
// Core Model
// ============================================================================

/// One row of the event log.
///
/// `action` keeps the label exactly as stored so history shows what the sheet
/// holds; use [`LogEntry::kind`] for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub timestamp: String,
    pub person_name: String,
    pub person_id: String,
    pub action: String,
    pub item_name: String,
    pub quantity: i64,
    pub note: String,
}

impl LogEntry {
    pub fn kind(&self) -> Action {
        Action::from_label(&self.action)
    }

    /// Quantity with the sign of its movement: positive out, negative back.
    pub fn signed_quantity(&self) -> i64 {
        match self.kind() {
            Action::Return => self.quantity.saturating_neg(),
            Action::Borrow => self.quantity,
        }
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.person_name.clone(),
            self.person_id.clone(),
            self.action.clone(),
            self.item_name.clone(),
            self.quantity.to_string(),
            self.note.clone(),
        ]
    }
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Request payload for recording one borrow or return.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEntryRequest {
    pub action: Action,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub person_name: String,

    #[serde(default)]
    pub person_id: Option<String>,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub item_name: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,

    #[serde(default)]
    pub note: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(action: &str, quantity: i64) -> LogEntry {
        LogEntry {
            timestamp: "2024-09-01 10:00:00".to_string(),
            person_name: "Alice".to_string(),
            person_id: "B11201001".to_string(),
            action: action.to_string(),
            item_name: "Tent".to_string(),
            quantity,
            note: "camp2024".to_string(),
        }
    }

    fn request(person_name: &str, item_name: &str, quantity: i64) -> SubmitEntryRequest {
        SubmitEntryRequest {
            action: Action::Borrow,
            person_name: person_name.to_string(),
            person_id: None,
            item_name: item_name.to_string(),
            quantity,
            note: None,
        }
    }

    // =========================================================================
    // Action Tests
    // =========================================================================

    #[test]
    fn test_action_as_label() {
        assert_eq!(Action::Borrow.as_label(), "借用");
        assert_eq!(Action::Return.as_label(), "歸還");
    }

    #[test]
    fn test_action_from_label_exact_return() {
        assert_eq!(Action::from_label("歸還"), Action::Return);
        assert_eq!(Action::from_label("借用"), Action::Borrow);
    }

    #[test]
    fn test_action_from_label_unknown_counts_as_borrow() {
        assert_eq!(Action::from_label("歸还"), Action::Borrow);
        assert_eq!(Action::from_label(" 歸還"), Action::Borrow);
        assert_eq!(Action::from_label("return"), Action::Borrow);
        assert_eq!(Action::from_label(""), Action::Borrow);
    }

    #[test]
    fn test_action_serde() {
        assert_eq!(serde_json::to_string(&Action::Return).unwrap(), "\"歸還\"");

        let parsed: Action = serde_json::from_str("\"borrow\"").unwrap();
        assert_eq!(parsed, Action::Borrow);
        let parsed: Action = serde_json::from_str("\"歸還\"").unwrap();
        assert_eq!(parsed, Action::Return);
        assert!(serde_json::from_str::<Action>("\"lend\"").is_err());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(format!("{}", Action::Borrow), "借用");
    }

    // =========================================================================
    // LogEntry Tests
    // =========================================================================

    #[test]
    fn test_signed_quantity() {
        assert_eq!(entry("借用", 3).signed_quantity(), 3);
        assert_eq!(entry("歸還", 3).signed_quantity(), -3);
        assert_eq!(entry("歸 還", 3).signed_quantity(), 3);
        assert_eq!(entry("還", 2).signed_quantity(), 2);
    }

    #[test]
    fn test_signed_quantity_extremes_saturate() {
        assert_eq!(entry("歸還", i64::MIN).signed_quantity(), i64::MAX);
        assert_eq!(entry("歸還", i64::MAX).signed_quantity(), -i64::MAX);
        assert_eq!(entry("借用", i64::MIN).signed_quantity(), i64::MIN);
    }

    #[test]
    fn test_to_row_follows_columns() {
        let row = entry("借用", 2).to_row();
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(
            row,
            vec![
                "2024-09-01 10:00:00",
                "Alice",
                "B11201001",
                "借用",
                "Tent",
                "2",
                "camp2024"
            ]
        );
    }

    #[test]
    fn test_log_entry_serializes_camel_case() {
        let json = serde_json::to_value(entry("借用", 1)).unwrap();
        assert_eq!(json["personName"], "Alice");
        assert_eq!(json["itemName"], "Tent");
        assert_eq!(json["quantity"], 1);
    }

    // =========================================================================
    // SubmitEntryRequest Validation Tests
    // =========================================================================

    #[test]
    fn test_request_valid() {
        assert!(request("Alice", "Tent", 1).validate().is_ok());
    }

    #[test]
    fn test_request_blank_name_rejected() {
        let errors = request("   ", "Tent", 1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("person_name"));
    }

    #[test]
    fn test_request_blank_item_rejected() {
        let errors = request("Alice", "", 1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("item_name"));
    }

    #[test]
    fn test_request_zero_quantity_rejected() {
        let errors = request("Alice", "Tent", 0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_request_deserialize_optional_fields() {
        let request: SubmitEntryRequest = serde_json::from_str(
            r#"{"action":"歸還","personName":"Bob","itemName":"Flag","quantity":3}"#,
        )
        .unwrap();
        assert_eq!(request.action, Action::Return);
        assert!(request.person_id.is_none());
        assert!(request.note.is_none());
    }
}
