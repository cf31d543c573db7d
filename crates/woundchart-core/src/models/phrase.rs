use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One entry of the forbidden → approved replacement dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhraseMapping {
    pub id: Uuid,
    pub forbidden: String,
    pub approved: String,
}

impl PhraseMapping {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            forbidden: String::new(),
            approved: String::new(),
        }
    }

    pub fn new(forbidden: impl Into<String>, approved: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            forbidden: forbidden.into(),
            approved: approved.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PhraseField {
    Forbidden,
    Approved,
}
