use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A toggleable line of the final-note export summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistItem {
    pub id: u32,
    pub label: String,
    pub checked: bool,
}

impl ChecklistItem {
    pub fn unchecked(id: u32, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            checked: false,
        }
    }
}

/// The items a final note must cover before export.
pub fn export_checklist() -> Vec<ChecklistItem> {
    [
        "Patient Demographics",
        "Procedure Details",
        "JW Modifier Documentation",
        "FDA-Compliant Language",
        "Wound Measurements",
        "LCD Compliance",
        "CMS Billing Requirements",
        "WISER Audit Risk Score",
    ]
    .iter()
    .enumerate()
    .map(|(i, label)| ChecklistItem::unchecked(i as u32 + 1, label))
    .collect()
}
