//! WISER audit-risk assessment page.
//!
//! A risk score for the gauge, three outlier checks, and a free-form list of
//! state-specific rules.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use woundchart_core::error::CoreError;
use woundchart_core::fields::{Badge, BadgeStatus};
use woundchart_core::models::catalog;
use woundchart_core::steps::WorkflowStep;

use crate::risk::{self, RiskGauge};
use crate::{Gate, MissingItem};

/// Similarity above this percentage raises the cloned-documentation alert.
pub const CLONED_SIMILARITY_THRESHOLD: f64 = 80.0;

/// Scores at or below this show the "acceptable range" banner.
pub const ACCEPTABLE_RISK_SCORE: f64 = 33.0;

pub const TEXAS_PILOT_NOTE: &str =
    "Additional documentation requirements apply under the Texas WISER pilot program.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct WiserAudit {
    pub risk_score: Option<f64>,
    pub graft_type: String,
    pub graft_uses_this_month: Option<f64>,
    pub documentation_similarity: Option<f64>,
    pub jw_wastage_pattern: String,
    pub jw_wastage_trend: Option<String>,
    pub selected_state: Option<String>,
    pub state_rules: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum OutlierCheck {
    GraftFrequency,
    DocumentationSimilarity,
    JwUsagePattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutlierCheckState {
    pub check: OutlierCheck,
    pub title: String,
    pub complete: bool,
    pub badge: Badge,
}

impl WiserAudit {
    pub fn graft_complete(&self) -> bool {
        !self.graft_type.is_empty() && self.graft_uses_this_month.is_some()
    }

    pub fn similarity_complete(&self) -> bool {
        self.documentation_similarity.is_some()
    }

    pub fn jw_complete(&self) -> bool {
        !self.jw_wastage_pattern.is_empty()
            && self
                .jw_wastage_trend
                .as_deref()
                .is_some_and(|t| catalog::wastage_trends().contains(t))
    }

    pub fn all_checks_complete(&self) -> bool {
        self.graft_complete() && self.similarity_complete() && self.jw_complete()
    }

    pub fn cloned_alert(&self) -> bool {
        self.documentation_similarity
            .is_some_and(|s| s > CLONED_SIMILARITY_THRESHOLD)
    }

    pub fn cloned_warning(&self) -> Option<String> {
        let similarity = self.documentation_similarity?;
        self.cloned_alert().then(|| {
            format!(
                "Warning: High similarity ({similarity}%) may indicate cloned documentation."
            )
        })
    }

    /// Normalized score as shown under the input, "0.00" when empty.
    pub fn normalized_display(&self) -> String {
        risk::normalized_display(self.risk_score.unwrap_or(0.0))
    }

    pub fn gauge(&self) -> Option<RiskGauge> {
        self.risk_score.map(RiskGauge::new)
    }

    pub fn acceptable_banner(&self) -> bool {
        self.all_checks_complete()
            && self.risk_score.is_some_and(|s| s <= ACCEPTABLE_RISK_SCORE)
    }

    pub fn state_note(&self) -> Option<&'static str> {
        (self.selected_state.as_deref() == Some("TX")).then_some(TEXAS_PILOT_NOTE)
    }

    pub fn outlier_checks(&self) -> Vec<OutlierCheckState> {
        let pending = || Badge::new(BadgeStatus::Info, "Pending");
        let complete = || Badge::new(BadgeStatus::Success, "Complete");

        let similarity_badge = match (self.similarity_complete(), self.cloned_alert()) {
            (false, _) => pending(),
            (true, true) => Badge::new(BadgeStatus::Required, "Cloned Documentation Alert"),
            (true, false) => complete(),
        };

        vec![
            OutlierCheckState {
                check: OutlierCheck::GraftFrequency,
                title: "Frequency of Graft Use".to_string(),
                complete: self.graft_complete(),
                badge: if self.graft_complete() { complete() } else { pending() },
            },
            OutlierCheckState {
                check: OutlierCheck::DocumentationSimilarity,
                title: "Documentation Similarity".to_string(),
                complete: self.similarity_complete(),
                badge: similarity_badge,
            },
            OutlierCheckState {
                check: OutlierCheck::JwUsagePattern,
                title: "JW Usage Patterns".to_string(),
                complete: self.jw_complete(),
                badge: if self.jw_complete() { complete() } else { pending() },
            },
        ]
    }

    pub fn select_state(&mut self, state: &str) -> Result<(), CoreError> {
        self.selected_state = catalog::states().select(state)?;
        Ok(())
    }

    pub fn select_wastage_trend(&mut self, trend: &str) -> Result<(), CoreError> {
        self.jw_wastage_trend = catalog::wastage_trends().select(trend)?;
        Ok(())
    }

    /// Append a blank state rule and return its index.
    pub fn add_state_rule(&mut self) -> usize {
        self.state_rules.push(String::new());
        self.state_rules.len() - 1
    }

    pub fn remove_state_rule(&mut self, index: usize) -> Result<String, CoreError> {
        self.check_rule_index(index)?;
        Ok(self.state_rules.remove(index))
    }

    pub fn update_state_rule(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.check_rule_index(index)?;
        self.state_rules[index] = value.into();
        Ok(())
    }

    fn check_rule_index(&self, index: usize) -> Result<(), CoreError> {
        if index < self.state_rules.len() {
            Ok(())
        } else {
            Err(CoreError::IndexOutOfRange {
                list: "state rules",
                index,
                len: self.state_rules.len(),
            })
        }
    }
}

impl Gate for WiserAudit {
    fn step(&self) -> WorkflowStep {
        WorkflowStep::WiserAudit
    }

    fn missing(&self) -> Vec<MissingItem> {
        self.outlier_checks()
            .into_iter()
            .filter(|c| !c.complete)
            .map(|c| {
                let field = match c.check {
                    OutlierCheck::GraftFrequency => "graft_frequency",
                    OutlierCheck::DocumentationSimilarity => "documentation_similarity",
                    OutlierCheck::JwUsagePattern => "jw_usage_pattern",
                };
                MissingItem::new(field, c.title)
            })
            .collect()
    }
}
