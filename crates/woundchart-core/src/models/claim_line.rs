use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClaimLine {
    pub code: String,
    pub description: String,
    pub units: String,
    pub modifier: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ClaimLineField {
    Code,
    Description,
    Units,
    Modifier,
}

/// User-editable claim line table. Lines are addressed by index and the
/// table serializes as a plain array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClaimLines(pub Vec<ClaimLine>);

impl ClaimLines {
    pub fn lines(&self) -> &[ClaimLine] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a blank line and return its index.
    pub fn add(&mut self) -> usize {
        self.0.push(ClaimLine::default());
        self.0.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Result<ClaimLine, CoreError> {
        self.check(index)?;
        Ok(self.0.remove(index))
    }

    pub fn update(
        &mut self,
        index: usize,
        field: ClaimLineField,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.check(index)?;
        let line = &mut self.0[index];
        let slot = match field {
            ClaimLineField::Code => &mut line.code,
            ClaimLineField::Description => &mut line.description,
            ClaimLineField::Units => &mut line.units,
            ClaimLineField::Modifier => &mut line.modifier,
        };
        *slot = value.into();
        Ok(())
    }

    fn check(&self, index: usize) -> Result<(), CoreError> {
        if index < self.0.len() {
            Ok(())
        } else {
            Err(CoreError::IndexOutOfRange {
                list: "claim lines",
                index,
                len: self.0.len(),
            })
        }
    }
}
