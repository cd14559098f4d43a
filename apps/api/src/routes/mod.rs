pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::proof::handlers as proof;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis + history
        .route(
            "/api/v1/analyses",
            post(analysis::handle_analyze).get(analysis::handle_list_history),
        )
        .route("/api/v1/analyses/latest", get(analysis::handle_get_latest))
        .route("/api/v1/analyses/:id", get(analysis::handle_get_analysis))
        .route(
            "/api/v1/analyses/:id/confidence",
            patch(analysis::handle_update_confidence),
        )
        .route(
            "/api/v1/analyses/:id/export",
            get(analysis::handle_export_report),
        )
        .route(
            "/api/v1/analyses/:id/export/:section",
            get(analysis::handle_export_section),
        )
        // Test checklist + proof
        .route(
            "/api/v1/checklist",
            get(proof::handle_get_checklist).put(proof::handle_put_checklist),
        )
        .route("/api/v1/checklist/reset", post(proof::handle_reset_checklist))
        .route(
            "/api/v1/proof/submission",
            get(proof::handle_get_submission).put(proof::handle_put_submission),
        )
        .route(
            "/api/v1/proof/submission/copy",
            post(proof::handle_copy_submission),
        )
        .route(
            "/api/v1/proof/footer",
            get(proof::handle_get_footer).put(proof::handle_put_footer),
        )
        .route("/api/v1/status", get(proof::handle_get_status))
        .route("/api/v1/ship", get(proof::handle_get_ship))
        .with_state(state)
}
