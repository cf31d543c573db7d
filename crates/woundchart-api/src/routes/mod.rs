//! Router assembly.

pub mod catalogs;
pub mod charts;
pub mod final_note;
pub mod health;
pub mod lcd;
pub mod pages;
pub mod steps;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::middleware::request_log::log_request;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let origin = match &state.config.cors_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::any(),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/steps", get(steps::list_steps))
        .route("/steps/{slug}", get(steps::get_step))
        .route("/catalogs/{field}", get(catalogs::search_catalog))
        // Page views
        .route("/note-capture", post(pages::note_capture))
        .route("/note-capture/actions", post(pages::note_capture_action))
        .route("/structured-note", post(pages::structured_note))
        .route(
            "/structured-note/actions",
            post(pages::structured_note_action),
        )
        .route(
            "/lcd-compliance",
            get(lcd::seeded_checklist).post(lcd::checklist_view),
        )
        .route("/lcd-compliance/actions", post(lcd::checklist_action))
        .route("/lcd-compliance/autofill", post(lcd::autofill))
        .route("/autofill-confirm", post(pages::autofill_confirm))
        .route(
            "/autofill-confirm/actions",
            post(pages::autofill_confirm_action),
        )
        .route("/cms-validation", post(pages::cms_validation))
        .route("/cms-validation/actions", post(pages::cms_validation_action))
        .route("/wiser-audit", post(pages::wiser_audit))
        .route("/wiser-audit/actions", post(pages::wiser_audit_action))
        .route("/fda-language", post(pages::fda_language))
        .route("/fda-language/actions", post(pages::fda_language_action))
        .route("/jw-wastage", post(pages::jw_wastage))
        .route("/final-note", post(final_note::final_note_view))
        .route("/final-note/actions", post(final_note::final_note_action))
        .route("/final-note/send", post(final_note::send))
        .route("/final-note/export/{format}", post(final_note::export))
        // Charts
        .route("/risk-gauge", get(charts::risk_gauge))
        .route("/risk-gauge/svg", get(charts::gauge_svg))
        .route("/jw-wastage/usage-bar/svg", post(charts::usage_bar))
        .route("/structured-note/trend/svg", post(charts::wound_trend))
        .layer(axum_mw::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}
