use thiserror::Error;
use uuid::Uuid;
use woundchart_core::error::CoreError;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("unknown compliance rule: {0}")]
    UnknownRule(u32),

    #[error("unknown phrase mapping: {0}")]
    UnknownPhrase(Uuid),

    #[error("unknown checklist item: {0}")]
    UnknownChecklistItem(u32),

    #[error(transparent)]
    Core(#[from] CoreError),
}
