use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::errors::AppError;
use crate::models::proof::{ProjectStatus, ProofFooterState, ProofSubmission, TEST_CHECKLIST_LEN};
use crate::proof::state::{
    get_project_status, get_proof_footer, get_proof_submission, get_test_checklist,
    save_proof_footer, save_proof_submission, save_test_checklist, ship_unlocked, TEST_CASES,
};
use crate::proof::submission::{submission_text, validate_submission};
use crate::state::AppState;

const SHIP_LOCKED_MESSAGE: &str = "Complete all 10 items on the Test Checklist before shipping.";
const SHIP_READY_MESSAGE: &str = "All tests passed. You're ready.";

#[derive(Serialize)]
pub struct TestItem {
    pub label: &'static str,
    pub hint: &'static str,
    pub passed: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResponse {
    pub items: Vec<TestItem>,
    pub passed_count: usize,
    pub total: usize,
}

impl ChecklistResponse {
    fn from_flags(flags: &[bool]) -> Self {
        let items = TEST_CASES
            .iter()
            .zip(flags)
            .map(|(&(label, hint), &passed)| TestItem { label, hint, passed })
            .collect();
        ChecklistResponse {
            items,
            passed_count: flags.iter().filter(|f| **f).count(),
            total: TEST_CHECKLIST_LEN,
        }
    }
}

#[derive(Deserialize)]
pub struct ChecklistUpdate {
    pub items: Vec<bool>,
}

/// GET /api/v1/checklist
pub async fn handle_get_checklist(State(state): State<AppState>) -> Json<ChecklistResponse> {
    let flags = get_test_checklist(state.store.as_ref());
    Json(ChecklistResponse::from_flags(&flags))
}

/// PUT /api/v1/checklist
pub async fn handle_put_checklist(
    State(state): State<AppState>,
    Json(req): Json<ChecklistUpdate>,
) -> Result<Json<ChecklistResponse>, AppError> {
    if req.items.len() != TEST_CHECKLIST_LEN {
        return Err(AppError::Validation(format!(
            "Expected {TEST_CHECKLIST_LEN} checklist items, got {}",
            req.items.len()
        )));
    }
    save_test_checklist(state.store.as_ref(), &req.items)?;
    Ok(Json(ChecklistResponse::from_flags(&req.items)))
}

/// POST /api/v1/checklist/reset
pub async fn handle_reset_checklist(
    State(state): State<AppState>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let cleared = [false; TEST_CHECKLIST_LEN];
    save_test_checklist(state.store.as_ref(), &cleared)?;
    info!("Test checklist reset");
    Ok(Json(ChecklistResponse::from_flags(&cleared)))
}

/// GET /api/v1/proof/submission
pub async fn handle_get_submission(State(state): State<AppState>) -> Json<ProofSubmission> {
    Json(get_proof_submission(state.store.as_ref()))
}

/// PUT /api/v1/proof/submission
///
/// Drafts are stored as typed; links are only checked on copy.
pub async fn handle_put_submission(
    State(state): State<AppState>,
    Json(submission): Json<ProofSubmission>,
) -> Result<Json<ProofSubmission>, AppError> {
    save_proof_submission(state.store.as_ref(), &submission)?;
    Ok(Json(submission))
}

#[derive(Serialize)]
pub struct SubmissionCopyResponse {
    pub text: String,
}

/// POST /api/v1/proof/submission/copy
pub async fn handle_copy_submission(
    State(state): State<AppState>,
) -> Result<Json<SubmissionCopyResponse>, AppError> {
    let submission = get_proof_submission(state.store.as_ref());
    validate_submission(&submission).map_err(|errors| AppError::UnprocessableEntity {
        message: "Submission links are missing or invalid".to_string(),
        details: json!(errors),
    })?;
    info!("Final submission copied");
    Ok(Json(SubmissionCopyResponse {
        text: submission_text(&submission),
    }))
}

/// GET /api/v1/proof/footer
pub async fn handle_get_footer(State(state): State<AppState>) -> Json<ProofFooterState> {
    Json(get_proof_footer(state.store.as_ref()))
}

/// PUT /api/v1/proof/footer
pub async fn handle_put_footer(
    State(state): State<AppState>,
    Json(footer): Json<ProofFooterState>,
) -> Result<Json<ProofFooterState>, AppError> {
    save_proof_footer(state.store.as_ref(), &footer)?;
    info!(
        "Proof footer saved; project status {}",
        get_project_status(state.store.as_ref()).as_str()
    );
    Ok(Json(footer))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: ProjectStatus,
}

/// GET /api/v1/status
pub async fn handle_get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: get_project_status(state.store.as_ref()),
    })
}

#[derive(Serialize)]
pub struct ShipResponse {
    pub unlocked: bool,
    pub message: &'static str,
}

/// GET /api/v1/ship
pub async fn handle_get_ship(State(state): State<AppState>) -> Json<ShipResponse> {
    let unlocked = ship_unlocked(state.store.as_ref());
    Json(ShipResponse {
        unlocked,
        message: if unlocked {
            SHIP_READY_MESSAGE
        } else {
            SHIP_LOCKED_MESSAGE
        },
    })
}
