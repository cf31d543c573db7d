use axum::extract::Query;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use woundchart_core::models::wound::WoundTrendPoint;
use woundchart_export::svg::{risk_gauge_svg, sparkline_svg, usage_bar_svg, SVG_CONTENT_TYPE};
use woundchart_rules::pages::structured_note::StructuredNote;
use woundchart_rules::risk::RiskGauge;
use woundchart_rules::wastage::JwWastage;

use crate::error::ApiError;

const SPARKLINE_WIDTH: f64 = 300.0;
const SPARKLINE_HEIGHT: f64 = 200.0;

#[derive(Deserialize)]
pub struct ScoreQuery {
    /// 0–100; out-of-range values are clamped.
    #[serde(default)]
    score: f64,
}

impl ScoreQuery {
    fn gauge(&self) -> Result<RiskGauge, ApiError> {
        if !self.score.is_finite() {
            return Err(ApiError::BadRequest(format!(
                "score must be a finite number, got {}",
                self.score
            )));
        }
        Ok(RiskGauge::new(self.score))
    }
}

fn svg(body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], body)
}

pub async fn risk_gauge(Query(query): Query<ScoreQuery>) -> Result<Json<RiskGauge>, ApiError> {
    Ok(Json(query.gauge()?))
}

pub async fn gauge_svg(Query(query): Query<ScoreQuery>) -> Result<impl IntoResponse, ApiError> {
    Ok(svg(risk_gauge_svg(&query.gauge()?)))
}

pub async fn usage_bar(Json(page): Json<JwWastage>) -> impl IntoResponse {
    svg(usage_bar_svg(&page.usage()))
}

pub async fn wound_trend(Json(page): Json<StructuredNote>) -> impl IntoResponse {
    let trend: Vec<WoundTrendPoint> = page.wound_trend();
    svg(sparkline_svg(&trend, SPARKLINE_WIDTH, SPARKLINE_HEIGHT))
}
