use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("index {index} out of range for {list} (len {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("unknown workflow step: {0}")]
    UnknownStep(String),

    #[error("unknown option '{value}' for {field}")]
    UnknownOption { field: String, value: String },
}
