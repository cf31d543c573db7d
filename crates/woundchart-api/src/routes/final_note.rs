use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use woundchart_export::bundle::NoteBundle;
use woundchart_export::docx::{final_note_docx, DOCX_CONTENT_TYPE, DOCX_FILENAME};
use woundchart_export::fhir::document_reference;
use woundchart_export::json::clinical_note;
use woundchart_export::render::render_narrative;
use woundchart_rules::actions::FinalNoteAction;
use woundchart_rules::pages::final_note::FinalNote;

use super::pages::{page_view, ActionRequest, PageView};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FinalNoteDerived {
    all_checked: bool,
    checked: usize,
    total: usize,
}

#[derive(Serialize)]
pub struct SendResult {
    #[serde(flatten)]
    view: PageView<FinalNote, FinalNoteDerived>,
    /// False when the note had already been sent.
    sent_now: bool,
}

fn derived(page: &FinalNote) -> FinalNoteDerived {
    FinalNoteDerived {
        all_checked: page.all_checked(),
        checked: page.checklist.iter().filter(|i| i.checked).count(),
        total: page.checklist.len(),
    }
}

pub async fn final_note_view(
    Json(page): Json<FinalNote>,
) -> Json<PageView<FinalNote, FinalNoteDerived>> {
    let derived = derived(&page);
    Json(page_view(page, derived))
}

pub async fn final_note_action(
    Json(request): Json<ActionRequest<FinalNote, FinalNoteAction>>,
) -> Result<Json<PageView<FinalNote, FinalNoteDerived>>, ApiError> {
    let page = request.into_applied()?;
    let derived = derived(&page);
    Ok(Json(page_view(page, derived)))
}

pub async fn send(Json(mut page): Json<FinalNote>) -> Json<SendResult> {
    let sent_now = page.send();
    let derived = derived(&page);
    Json(SendResult {
        view: page_view(page, derived),
        sent_now,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Fhir,
    Narrative,
    Docx,
}

impl ExportFormat {
    pub fn parse(format: &str) -> Option<Self> {
        match format {
            "json" => Some(ExportFormat::Json),
            "fhir" => Some(ExportFormat::Fhir),
            "narrative" => Some(ExportFormat::Narrative),
            "docx" => Some(ExportFormat::Docx),
            _ => None,
        }
    }
}

pub async fn export(
    State(state): State<AppState>,
    Path(format): Path<String>,
    Json(bundle): Json<NoteBundle>,
) -> Result<Response, ApiError> {
    let format = ExportFormat::parse(&format)
        .ok_or_else(|| ApiError::NotFound(format!("unknown export format: {format}")))?;
    tracing::info!(?format, "exporting final note");

    let response = match format {
        ExportFormat::Json => Json(clinical_note(&bundle)).into_response(),
        ExportFormat::Fhir => Json(document_reference(&bundle)).into_response(),
        ExportFormat::Narrative => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_narrative(&bundle)?,
        )
            .into_response(),
        ExportFormat::Docx => {
            let bytes = final_note_docx(&bundle, &state.config.document_styles)?;
            (
                [
                    (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{DOCX_FILENAME}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
    };
    Ok(response)
}
