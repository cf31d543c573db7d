//! One endpoint per page: post the page record, get back the record plus
//! everything the page derives from it. Each page also takes
//! `{page, action}` at `/actions` and answers with the edited record.

use axum::Json;
use serde::{Deserialize, Serialize};
use woundchart_core::fields::{CardVariant, CharacterCounter};
use woundchart_core::models::catalog;
use woundchart_core::models::wound::WoundTrendPoint;
use woundchart_core::steps::StepSummary;
use woundchart_rules::actions::{
    Apply, AutofillConfirmAction, CmsAction, FdaAction, NoteCaptureAction, StructuredNoteAction,
    WiserAction,
};
use woundchart_rules::cms::{CmsSection, CmsValidation, SectionState};
use woundchart_rules::fda::FdaLanguage;
use woundchart_rules::pages::autofill_confirm::{AutofillConfirm, AutofilledFindings};
use woundchart_rules::pages::note_capture::NoteCapture;
use woundchart_rules::pages::structured_note::StructuredNote;
use woundchart_rules::risk::RiskGauge;
use woundchart_rules::wastage::{JwWastage, ProductUsage, WastageCalculation};
use woundchart_rules::wiser::{OutlierCheckState, WiserAudit};
use woundchart_rules::{Gate, MissingItem, Navigation};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct PageView<P, D> {
    pub step: StepSummary,
    pub page: P,
    pub derived: D,
    pub missing: Vec<MissingItem>,
    pub complete: bool,
    pub navigation: Navigation,
}

/// A page record plus one edit to apply to it.
#[derive(Deserialize)]
pub struct ActionRequest<P, A> {
    #[serde(default)]
    pub page: P,
    pub action: A,
}

impl<P, A> ActionRequest<P, A>
where
    P: Apply<Action = A> + Gate,
{
    pub fn into_applied(self) -> Result<P, ApiError> {
        let mut page = self.page;
        page.apply(self.action)?;
        tracing::debug!(step = page.step().slug(), "page action applied");
        Ok(page)
    }
}

pub fn page_view<P: Gate, D>(page: P, derived: D) -> PageView<P, D> {
    let missing = page.missing();
    let navigation = page.navigation();
    tracing::debug!(
        step = page.step().slug(),
        missing = missing.len(),
        can_continue = navigation.can_continue,
        "page evaluated"
    );
    PageView {
        step: page.step().summary(),
        complete: missing.is_empty(),
        missing,
        navigation,
        page,
        derived,
    }
}

#[derive(Serialize)]
pub struct NoteCaptureDerived {
    character_count: CharacterCounter,
    over_limit: bool,
    can_submit: bool,
    patient_label: String,
    encounter_label: String,
}

pub type NoteCaptureView = PageView<NoteCapture, NoteCaptureDerived>;

pub async fn note_capture(Json(page): Json<NoteCapture>) -> Json<NoteCaptureView> {
    Json(note_capture_view(page))
}

pub async fn note_capture_action(
    Json(request): Json<ActionRequest<NoteCapture, NoteCaptureAction>>,
) -> Result<Json<NoteCaptureView>, ApiError> {
    Ok(Json(note_capture_view(request.into_applied()?)))
}

fn note_capture_view(page: NoteCapture) -> NoteCaptureView {
    let counter = page.character_count();
    let derived = NoteCaptureDerived {
        over_limit: counter.over_limit(),
        character_count: counter,
        can_submit: page.can_submit(),
        patient_label: catalog::patients()
            .display_label(&page.selected_patient)
            .to_string(),
        encounter_label: catalog::encounters()
            .display_label(&page.selected_encounter)
            .to_string(),
    };
    page_view(page, derived)
}

#[derive(Serialize)]
pub struct StructuredNoteDerived {
    wound_area: Option<f64>,
    reduction_percentage: i64,
    wound_trend: Vec<WoundTrendPoint>,
    procedure_identified: bool,
    procedure_label: String,
}

pub type StructuredNoteView = PageView<StructuredNote, StructuredNoteDerived>;

pub async fn structured_note(Json(page): Json<StructuredNote>) -> Json<StructuredNoteView> {
    Json(structured_note_view(page))
}

pub async fn structured_note_action(
    Json(request): Json<ActionRequest<StructuredNote, StructuredNoteAction>>,
) -> Result<Json<StructuredNoteView>, ApiError> {
    Ok(Json(structured_note_view(request.into_applied()?)))
}

fn structured_note_view(page: StructuredNote) -> StructuredNoteView {
    let derived = StructuredNoteDerived {
        wound_area: page.wound().area(),
        reduction_percentage: page.reduction_percentage(),
        wound_trend: page.wound_trend(),
        procedure_identified: page.procedure_identified(),
        procedure_label: catalog::procedures()
            .display_label(page.procedure.as_deref().unwrap_or_default())
            .to_string(),
    };
    page_view(page, derived)
}

#[derive(Serialize)]
pub struct AutofillConfirmDerived {
    findings: AutofilledFindings,
    offloading_error: Option<&'static str>,
    offloading_label: String,
}

pub type AutofillConfirmView = PageView<AutofillConfirm, AutofillConfirmDerived>;

pub async fn autofill_confirm(Json(page): Json<AutofillConfirm>) -> Json<AutofillConfirmView> {
    Json(autofill_confirm_view(page))
}

pub async fn autofill_confirm_action(
    Json(request): Json<ActionRequest<AutofillConfirm, AutofillConfirmAction>>,
) -> Result<Json<AutofillConfirmView>, ApiError> {
    Ok(Json(autofill_confirm_view(request.into_applied()?)))
}

fn autofill_confirm_view(page: AutofillConfirm) -> AutofillConfirmView {
    let derived = AutofillConfirmDerived {
        findings: page.findings(),
        offloading_error: page.offloading_error(),
        offloading_label: catalog::offloading_methods()
            .display_label(&page.offloading_method)
            .to_string(),
    };
    page_view(page, derived)
}

#[derive(Serialize)]
pub struct CmsValidationDerived {
    all_passed: bool,
    has_missing_items: bool,
    summary_variant: CardVariant,
    sections: Vec<SectionState>,
    fix_issues_target: Option<CmsSection>,
}

pub type CmsValidationView = PageView<CmsValidation, CmsValidationDerived>;

pub async fn cms_validation(Json(page): Json<CmsValidation>) -> Json<CmsValidationView> {
    Json(cms_validation_view(page))
}

pub async fn cms_validation_action(
    Json(request): Json<ActionRequest<CmsValidation, CmsAction>>,
) -> Result<Json<CmsValidationView>, ApiError> {
    Ok(Json(cms_validation_view(request.into_applied()?)))
}

fn cms_validation_view(page: CmsValidation) -> CmsValidationView {
    let derived = CmsValidationDerived {
        all_passed: page.all_passed(),
        has_missing_items: page.has_missing_items(),
        summary_variant: CardVariant::for_missing(page.has_missing_items()),
        sections: page.sections(),
        fix_issues_target: page.fix_issues_target(),
    };
    page_view(page, derived)
}

#[derive(Serialize)]
pub struct WiserAuditDerived {
    gauge: Option<RiskGauge>,
    normalized_display: String,
    outlier_checks: Vec<OutlierCheckState>,
    cloned_warning: Option<String>,
    acceptable_banner: bool,
    state_note: Option<&'static str>,
}

pub type WiserAuditView = PageView<WiserAudit, WiserAuditDerived>;

pub async fn wiser_audit(Json(page): Json<WiserAudit>) -> Json<WiserAuditView> {
    Json(wiser_audit_view(page))
}

pub async fn wiser_audit_action(
    Json(request): Json<ActionRequest<WiserAudit, WiserAction>>,
) -> Result<Json<WiserAuditView>, ApiError> {
    Ok(Json(wiser_audit_view(request.into_applied()?)))
}

fn wiser_audit_view(page: WiserAudit) -> WiserAuditView {
    let derived = WiserAuditDerived {
        gauge: page.gauge(),
        normalized_display: page.normalized_display(),
        outlier_checks: page.outlier_checks(),
        cloned_warning: page.cloned_warning(),
        acceptable_banner: page.acceptable_banner(),
        state_note: page.state_note(),
    };
    page_view(page, derived)
}

#[derive(Serialize)]
pub struct FdaLanguageDerived {
    highlighted: Option<String>,
    suggested_rewrite: String,
    all_compliant: bool,
}

pub type FdaLanguageView = PageView<FdaLanguage, FdaLanguageDerived>;

pub async fn fda_language(Json(page): Json<FdaLanguage>) -> Json<FdaLanguageView> {
    Json(fda_language_view(page))
}

pub async fn fda_language_action(
    Json(request): Json<ActionRequest<FdaLanguage, FdaAction>>,
) -> Result<Json<FdaLanguageView>, ApiError> {
    Ok(Json(fda_language_view(request.into_applied()?)))
}

fn fda_language_view(page: FdaLanguage) -> FdaLanguageView {
    let derived = FdaLanguageDerived {
        highlighted: page.highlighted(),
        suggested_rewrite: page.suggest_rewrite(),
        all_compliant: page.all_compliant(),
    };
    page_view(page, derived)
}

#[derive(Serialize)]
pub struct JwWastageDerived {
    calculation: WastageCalculation,
    usage: ProductUsage,
}

pub async fn jw_wastage(
    Json(page): Json<JwWastage>,
) -> Json<PageView<JwWastage, JwWastageDerived>> {
    let derived = JwWastageDerived {
        calculation: page.calculation(),
        usage: page.usage(),
    };
    Json(page_view(page, derived))
}
