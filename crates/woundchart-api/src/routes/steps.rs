use axum::extract::Path;
use axum::Json;
use woundchart_core::steps::{all_steps, StepSummary, WorkflowStep};

use crate::error::ApiError;

pub async fn list_steps() -> Json<Vec<StepSummary>> {
    Json(all_steps())
}

pub async fn get_step(Path(slug): Path<String>) -> Result<Json<StepSummary>, ApiError> {
    let step = WorkflowStep::from_path(&slug)?;
    Ok(Json(step.summary()))
}
