//! Readiness score: a static base from input completeness plus a confidence
//! delta recomputed from the whole confidence map on every change.

use crate::models::analysis::{ConfidenceMap, ExtractedSkills};

const STARTING_SCORE: i32 = 35;
const POINTS_PER_CATEGORY: i32 = 5;
const CATEGORY_CAP: i32 = 30;
const COMPANY_BONUS: i32 = 10;
const ROLE_BONUS: i32 = 10;
const LONG_JD_BONUS: i32 = 10;
/// JDs longer than this many UTF-16 code units earn `LONG_JD_BONUS`.
const LONG_JD_CHARS: usize = 800;
const MAX_SCORE: i32 = 100;

fn clamp_score(score: i32) -> u32 {
    score.clamp(0, MAX_SCORE) as u32
}

pub fn calculate_base_score(skills: &ExtractedSkills, company: &str, role: &str, jd_text: &str) -> u32 {
    let filled = skills.filled_categories() as i32;
    let mut score = STARTING_SCORE + (filled * POINTS_PER_CATEGORY).min(CATEGORY_CAP);

    if !company.trim().is_empty() {
        score += COMPANY_BONUS;
    }
    if !role.trim().is_empty() {
        score += ROLE_BONUS;
    }
    if jd_text.encode_utf16().count() > LONG_JD_CHARS {
        score += LONG_JD_BONUS;
    }

    clamp_score(score)
}

/// Applies +2 per known skill and −2 per skill still needing practice.
/// Not incremental: always pass the complete map.
pub fn calculate_final_score(base_score: u32, confidence: &ConfidenceMap) -> u32 {
    let delta: i32 = confidence.values().map(|c| c.delta()).sum();
    clamp_score(base_score as i32 + delta)
}
