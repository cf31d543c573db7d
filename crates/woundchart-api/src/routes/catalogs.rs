use axum::extract::{Path, Query};
use axum::Json;
use serde::{Deserialize, Serialize};
use woundchart_core::fields::SelectOption;
use woundchart_core::models::catalog;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
pub struct CatalogResults {
    field: String,
    placeholder: String,
    options: Vec<SelectOption>,
}

/// Options of a search-select field filtered by `q`; all options when `q`
/// is empty.
pub async fn search_catalog(
    Path(field): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<CatalogResults>, ApiError> {
    let catalog = catalog::by_field(&field)
        .ok_or_else(|| ApiError::NotFound(format!("unknown field: {field}")))?;

    Ok(Json(CatalogResults {
        field: catalog.field.clone(),
        placeholder: catalog.placeholder.clone(),
        options: catalog.filter(&query.q).into_iter().cloned().collect(),
    }))
}
