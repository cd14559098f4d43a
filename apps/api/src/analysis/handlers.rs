use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::assembler::{analyze_jd, toggle_confidence, validate_jd, weak_skills};
use crate::analysis::company::{get_company_size, get_industry, CompanySize};
use crate::analysis::export::{download_filename, render_report, section_text, ExportSection};
use crate::analysis::skills::SkillGroup;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisEntry, Confidence};
use crate::state::AppState;
use crate::storage::history::{get_entry, get_history, get_latest_entry, save_to_history, update_entry};
use crate::storage::KeyValueStore;

const UNTITLED: &str = "Untitled";
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

fn load_entry(store: &dyn KeyValueStore, id: Uuid) -> Result<AnalysisEntry, AppError> {
    get_entry(store, id).ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub jd_text: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub entry: AnalysisEntry,
    /// Non-blocking advisory, e.g. for very short JDs.
    pub warning: Option<&'static str>,
}

/// POST /api/v1/analyses
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<AnalyzeResponse>), AppError> {
    let validation = validate_jd(&req.jd_text)?;
    let company = req.company.trim();
    let role = req.role.trim();

    let entry = analyze_jd(&req.jd_text, company, role);
    save_to_history(state.store.as_ref(), &entry)?;
    info!(
        "Analyzed JD for '{}' ({}, base score {})",
        if company.is_empty() { UNTITLED } else { company },
        get_company_size(company).as_str(),
        entry.base_score
    );

    Ok((
        StatusCode::CREATED,
        Json(AnalyzeResponse {
            entry,
            warning: validation.warning(),
        }),
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub final_score: u32,
}

impl From<&AnalysisEntry> for HistorySummary {
    fn from(entry: &AnalysisEntry) -> Self {
        HistorySummary {
            id: entry.id,
            company: if entry.company.is_empty() {
                UNTITLED.to_string()
            } else {
                entry.company.clone()
            },
            role: entry.role.clone(),
            created_at: entry.created_at,
            final_score: entry.final_score,
        }
    }
}

/// GET /api/v1/analyses
pub async fn handle_list_history(State(state): State<AppState>) -> Json<Vec<HistorySummary>> {
    let history = get_history(state.store.as_ref());
    Json(history.iter().map(HistorySummary::from).collect())
}

/// An entry plus the company intel and weak-skill hints shown alongside results.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDetail {
    #[serde(flatten)]
    pub entry: AnalysisEntry,
    pub company_size: CompanySize,
    pub industry: &'static str,
    pub skill_groups: Vec<SkillGroup>,
    pub weak_skills: Vec<String>,
}

impl From<AnalysisEntry> for EntryDetail {
    fn from(entry: AnalysisEntry) -> Self {
        EntryDetail {
            company_size: get_company_size(&entry.company),
            industry: get_industry(&entry.company),
            skill_groups: entry.extracted_skills.groups(),
            weak_skills: weak_skills(&entry),
            entry,
        }
    }
}

/// GET /api/v1/analyses/latest
pub async fn handle_get_latest(State(state): State<AppState>) -> Result<Json<EntryDetail>, AppError> {
    let entry = get_latest_entry(state.store.as_ref())
        .ok_or_else(|| AppError::NotFound("No analyses yet".to_string()))?;
    Ok(Json(entry.into()))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EntryDetail>, AppError> {
    let entry = load_entry(state.store.as_ref(), id)?;
    Ok(Json(entry.into()))
}

#[derive(Deserialize)]
pub struct ConfidenceUpdate {
    pub skill: String,
    /// Explicit target; flips the current value when omitted.
    #[serde(default)]
    pub confidence: Option<Confidence>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceResponse {
    pub skill: String,
    pub confidence: Confidence,
    pub final_score: u32,
    pub weak_skills: Vec<String>,
}

/// PATCH /api/v1/analyses/:id/confidence
pub async fn handle_update_confidence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ConfidenceUpdate>,
) -> Result<Json<ConfidenceResponse>, AppError> {
    let store = state.store.as_ref();
    let mut entry = load_entry(store, id)?;
    let confidence = toggle_confidence(&mut entry, &req.skill, req.confidence)?;

    if !update_entry(store, &entry)? {
        return Err(AppError::NotFound(format!("Analysis {id} not found")));
    }
    info!(
        "Set '{}' to {:?} on {id}; final score {}",
        req.skill, confidence, entry.final_score
    );

    Ok(Json(ConfidenceResponse {
        weak_skills: weak_skills(&entry),
        skill: req.skill,
        confidence,
        final_score: entry.final_score,
    }))
}

/// GET /api/v1/analyses/:id/export
pub async fn handle_export_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let entry = load_entry(state.store.as_ref(), id)?;
    let disposition = format!("attachment; filename=\"{}\"", download_filename(&entry));
    Ok((
        [
            (header::CONTENT_TYPE, TEXT_PLAIN.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_report(&entry),
    ))
}

/// GET /api/v1/analyses/:id/export/:section
pub async fn handle_export_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, ExportSection)>,
) -> Result<impl IntoResponse, AppError> {
    let entry = load_entry(state.store.as_ref(), id)?;
    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], section_text(&entry, section)))
}
