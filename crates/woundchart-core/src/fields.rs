//! Form primitives.
//!
//! The label/error/help-text conventions shared by every page: blank
//! detection, number-input parsing, select and search-select behaviour,
//! badge statuses and card variants.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A text field is missing when it is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Outcome of a keystroke in a number input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput {
    /// Empty input or a lone minus sign.
    Cleared,
    Value(f64),
    /// Unparseable text; the previous value stands.
    Ignored,
}

impl NumberInput {
    pub fn apply(self, previous: Option<f64>) -> Option<f64> {
        match self {
            NumberInput::Cleared => None,
            NumberInput::Value(v) => Some(v),
            NumberInput::Ignored => previous,
        }
    }
}

pub fn parse_number_input(raw: &str) -> NumberInput {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        return NumberInput::Cleared;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => NumberInput::Value(v),
        _ => NumberInput::Ignored,
    }
}

/// Fixed-point display with `digits` decimals. Exact ties round away from
/// zero; everything else rounds to the nearest representable decimal.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scale = (0..digits).fold(1.0_f64, |acc, _| acc * 10.0);
    let doubled = value * scale * 2.0;
    let exact_tie = doubled.fract() == 0.0
        && doubled % 2.0 != 0.0
        && value.mul_add(scale * 2.0, -doubled) == 0.0;
    if exact_tie {
        format!("{:.*}", digits, (doubled / 2.0).round() / scale)
    } else {
        format!("{value:.digits$}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A fixed option list backing a select or search-select field.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Catalog {
    pub field: String,
    pub placeholder: String,
    pub options: Vec<SelectOption>,
}

impl Catalog {
    pub fn new(field: &str, placeholder: &str, options: Vec<SelectOption>) -> Self {
        Self {
            field: field.to_string(),
            placeholder: placeholder.to_string(),
            options,
        }
    }

    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// Label of the selected option, or the placeholder when nothing
    /// (or an unknown value) is selected.
    pub fn display_label(&self, value: &str) -> &str {
        self.get(value)
            .map(|o| o.label.as_str())
            .unwrap_or(&self.placeholder)
    }

    /// Options whose label or value contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<&SelectOption> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.options.iter().collect();
        }
        self.options
            .iter()
            .filter(|o| {
                o.label.to_lowercase().contains(&needle)
                    || o.value.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Search-select semantics: choosing the current value clears it.
    pub fn toggle(&self, current: &str, chosen: &str) -> Result<String, CoreError> {
        self.check(chosen)?;
        if chosen == current {
            Ok(String::new())
        } else {
            Ok(chosen.to_string())
        }
    }

    /// Plain select semantics: the chosen value replaces the current one.
    pub fn select(&self, chosen: &str) -> Result<Option<String>, CoreError> {
        self.check(chosen)?;
        Ok(Some(chosen.to_string()))
    }

    fn check(&self, value: &str) -> Result<(), CoreError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(CoreError::UnknownOption {
                field: self.field.clone(),
                value: value.to_string(),
            })
        }
    }
}

/// Semantic badge statuses used across the compliance pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum BadgeStatus {
    Success,
    Error,
    Warning,
    Info,
    Autofilled,
    Required,
    Missing,
    Risk,
    Version,
    Step,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum BadgeIcon {
    CheckCircle,
    XCircle,
    AlertCircle,
    Info,
    Sparkles,
}

impl BadgeStatus {
    pub fn default_icon(self) -> Option<BadgeIcon> {
        match self {
            BadgeStatus::Success => Some(BadgeIcon::CheckCircle),
            BadgeStatus::Error | BadgeStatus::Missing => Some(BadgeIcon::XCircle),
            BadgeStatus::Warning | BadgeStatus::Required | BadgeStatus::Risk => {
                Some(BadgeIcon::AlertCircle)
            }
            BadgeStatus::Info => Some(BadgeIcon::Info),
            BadgeStatus::Autofilled => Some(BadgeIcon::Sparkles),
            BadgeStatus::Version | BadgeStatus::Step => None,
        }
    }
}

/// A badge as rendered next to a section title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Badge {
    pub status: BadgeStatus,
    pub text: String,
}

impl Badge {
    pub fn new(status: BadgeStatus, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    /// "Required" when missing, "Complete" otherwise.
    pub fn completeness(missing: bool) -> Self {
        if missing {
            Self::new(BadgeStatus::Missing, "Required")
        } else {
            Self::new(BadgeStatus::Success, "Complete")
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CardVariant {
    #[default]
    Default,
    Success,
    Destructive,
    Warning,
    Info,
    Primary,
}

impl CardVariant {
    pub fn for_missing(missing: bool) -> Self {
        if missing {
            CardVariant::Destructive
        } else {
            CardVariant::Success
        }
    }
}

/// Character count against a fixed limit, e.g. `"1,234 / 10,000 characters"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CharacterCounter {
    pub count: usize,
    pub limit: usize,
}

impl CharacterCounter {
    pub fn of(text: &str, limit: usize) -> Self {
        Self {
            count: text.chars().count(),
            limit,
        }
    }

    pub fn over_limit(&self) -> bool {
        self.count > self.limit
    }

    pub fn display(&self) -> String {
        format!(
            "{} / {} characters",
            group_thousands(self.count),
            group_thousands(self.limit)
        )
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
