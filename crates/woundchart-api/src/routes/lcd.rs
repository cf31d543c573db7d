use axum::Json;
use serde::Serialize;
use woundchart_rules::actions::LcdAction;
use woundchart_rules::lcd::{ChecklistSummary, ComplianceChecklist, POLICY_ID};

use super::pages::{page_view, ActionRequest, PageView};
use crate::error::ApiError;

#[derive(Serialize)]
pub struct LcdDerived {
    policy_id: &'static str,
    summary: ChecklistSummary,
    /// Rules flipped by the autofill action, absent for a plain view.
    #[serde(skip_serializing_if = "Option::is_none")]
    autofilled: Option<usize>,
}

fn view(
    checklist: ComplianceChecklist,
    autofilled: Option<usize>,
) -> Json<PageView<ComplianceChecklist, LcdDerived>> {
    let derived = LcdDerived {
        policy_id: POLICY_ID,
        summary: checklist.summary(),
        autofilled,
    };
    Json(page_view(checklist, derived))
}

/// The seven rules in their initial pending state.
pub async fn seeded_checklist() -> Json<PageView<ComplianceChecklist, LcdDerived>> {
    view(ComplianceChecklist::seeded(), None)
}

pub async fn checklist_view(
    Json(checklist): Json<ComplianceChecklist>,
) -> Json<PageView<ComplianceChecklist, LcdDerived>> {
    view(checklist, None)
}

pub async fn checklist_action(
    Json(request): Json<ActionRequest<ComplianceChecklist, LcdAction>>,
) -> Result<Json<PageView<ComplianceChecklist, LcdDerived>>, ApiError> {
    Ok(view(request.into_applied()?, None))
}

pub async fn autofill(
    Json(mut checklist): Json<ComplianceChecklist>,
) -> Json<PageView<ComplianceChecklist, LcdDerived>> {
    let filled = checklist.autofill_missing();
    view(checklist, Some(filled))
}
