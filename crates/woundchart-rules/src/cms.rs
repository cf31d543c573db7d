//! CMS billing validation gate.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use woundchart_core::fields::{is_blank, Badge, CardVariant};
use woundchart_core::models::claim_line::ClaimLines;
use woundchart_core::steps::WorkflowStep;

use crate::{Gate, MissingItem};

/// The required sections, in the order "Fix Issues" visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CmsSection {
    KxModifier,
    WoundMeasurements,
    RunInDocumentation,
}

impl CmsSection {
    pub const ORDER: [CmsSection; 3] = [
        CmsSection::KxModifier,
        CmsSection::WoundMeasurements,
        CmsSection::RunInDocumentation,
    ];

    pub fn missing_message(self) -> &'static str {
        match self {
            CmsSection::KxModifier => "Missing KX modifier justification",
            CmsSection::WoundMeasurements => "No wound measurements",
            CmsSection::RunInDocumentation => "Missing run-in documentation",
        }
    }

    fn field(self) -> &'static str {
        match self {
            CmsSection::KxModifier => "kx_modifier_justification",
            CmsSection::WoundMeasurements => "wound_measurements",
            CmsSection::RunInDocumentation => "run_in_documentation",
        }
    }
}

/// Wound dimensions as typed into the CMS form (free text, cm).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WoundMeasurementText {
    pub length: String,
    pub width: String,
    pub depth: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CmsValidation {
    pub claim_lines: ClaimLines,
    pub kx_modifier_justification: String,
    pub wound_measurements: WoundMeasurementText,
    pub run_in_documentation: String,
}

/// Per-section completeness as rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionState {
    pub section: CmsSection,
    pub missing: bool,
    pub variant: CardVariant,
    pub badge: Badge,
}

impl CmsValidation {
    pub fn is_missing(&self, section: CmsSection) -> bool {
        match section {
            CmsSection::KxModifier => is_blank(&self.kx_modifier_justification),
            // Depth is optional.
            CmsSection::WoundMeasurements => {
                is_blank(&self.wound_measurements.length) || is_blank(&self.wound_measurements.width)
            }
            CmsSection::RunInDocumentation => is_blank(&self.run_in_documentation),
        }
    }

    pub fn all_passed(&self) -> bool {
        CmsSection::ORDER.iter().all(|s| !self.is_missing(*s))
    }

    pub fn has_missing_items(&self) -> bool {
        !self.all_passed()
    }

    /// The first missing section in fixed order, i.e. where "Fix Issues"
    /// scrolls to.
    pub fn fix_issues_target(&self) -> Option<CmsSection> {
        CmsSection::ORDER.into_iter().find(|s| self.is_missing(*s))
    }

    pub fn sections(&self) -> Vec<SectionState> {
        CmsSection::ORDER
            .iter()
            .map(|&section| {
                let missing = self.is_missing(section);
                SectionState {
                    section,
                    missing,
                    variant: CardVariant::for_missing(missing),
                    badge: Badge::completeness(missing),
                }
            })
            .collect()
    }
}

impl Gate for CmsValidation {
    fn step(&self) -> WorkflowStep {
        WorkflowStep::CmsValidation
    }

    fn missing(&self) -> Vec<MissingItem> {
        CmsSection::ORDER
            .iter()
            .filter(|s| self.is_missing(**s))
            .map(|s| MissingItem::new(s.field(), s.missing_message()))
            .collect()
    }
}
