use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::checklist::generate_checklist;
use crate::analysis::company::get_company_size;
use crate::analysis::plan::generate_7day_plan;
use crate::analysis::questions::generate_questions;
use crate::analysis::rounds::generate_round_mapping;
use crate::analysis::scoring::{calculate_base_score, calculate_final_score};
use crate::analysis::skills::extract_skills;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisEntry, Confidence, ConfidenceMap, ExtractedSkills};

/// Trimmed JDs shorter than this (in UTF-16 code units) still run, but with a warning.
pub const SHORT_JD_CHARS: usize = 200;
pub const JD_REQUIRED_MESSAGE: &str = "Job description is required.";
pub const SHORT_JD_WARNING: &str =
    "This JD is too short to analyze deeply. Paste the full JD for better output.";

const WEAK_SKILL_LIMIT: usize = 3;

/// Outcome of the advisory JD check that runs before analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JdValidation {
    Ok,
    ShortWarning { message: &'static str },
}

impl JdValidation {
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            JdValidation::Ok => None,
            JdValidation::ShortWarning { message } => Some(*message),
        }
    }
}

/// Blocks blank JDs; flags short ones without blocking.
pub fn validate_jd(jd_text: &str) -> Result<JdValidation, AppError> {
    let trimmed = jd_text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(JD_REQUIRED_MESSAGE.to_string()));
    }
    if trimmed.encode_utf16().count() < SHORT_JD_CHARS {
        return Ok(JdValidation::ShortWarning {
            message: SHORT_JD_WARNING,
        });
    }
    Ok(JdValidation::Ok)
}

fn init_confidence_map(skills: &ExtractedSkills) -> ConfidenceMap {
    skills
        .all()
        .map(|skill| (skill.clone(), Confidence::Practice))
        .collect()
}

/// Runs the full pipeline and assembles a fresh history record.
///
/// `final_score` starts equal to `base_score` even though every skill starts
/// as "practice"; only later toggles go through `calculate_final_score`.
pub fn analyze_jd(jd_text: &str, company: &str, role: &str) -> AnalysisEntry {
    let skills = extract_skills(jd_text);
    let size = get_company_size(company);
    let round_mapping = generate_round_mapping(&skills, size);
    let checklist = generate_checklist(&skills, &round_mapping);
    let plan_7_days = generate_7day_plan(&skills);
    let questions = generate_questions(&skills);
    let base_score = calculate_base_score(&skills, company, role, jd_text);
    let skill_confidence_map = init_confidence_map(&skills);
    let now = Utc::now();

    AnalysisEntry {
        id: Uuid::new_v4(),
        created_at: now,
        company: company.to_string(),
        role: role.to_string(),
        jd_text: jd_text.to_string(),
        extracted_skills: skills,
        round_mapping,
        checklist,
        plan_7_days,
        questions,
        base_score,
        skill_confidence_map,
        final_score: base_score,
        updated_at: now,
    }
}

/// Flips `skill` (or sets it to `target` when given), then recomputes the
/// final score over the whole map.
///
/// Only extracted skills can be toggled. An extracted skill missing from the
/// map (older records) counts as "practice".
pub fn toggle_confidence(
    entry: &mut AnalysisEntry,
    skill: &str,
    target: Option<Confidence>,
) -> Result<Confidence, AppError> {
    if !entry.extracted_skills.all().any(|s| s == skill) {
        return Err(AppError::NotFound(format!(
            "Skill '{skill}' is not part of this analysis"
        )));
    }

    let current = entry
        .skill_confidence_map
        .entry(skill.to_string())
        .or_default();
    let next = target.unwrap_or_else(|| current.toggled());
    *current = next;

    entry.final_score = calculate_final_score(entry.base_score, &entry.skill_confidence_map);
    entry.updated_at = Utc::now();
    Ok(next)
}

/// Up to three skills still marked "practice", in extraction order.
pub fn weak_skills(entry: &AnalysisEntry) -> Vec<String> {
    let mut seen: Vec<&String> = Vec::new();
    entry
        .extracted_skills
        .all()
        .filter(|skill| {
            if seen.contains(skill) {
                return false;
            }
            seen.push(*skill);
            entry.skill_confidence_map.get(skill.as_str()) != Some(&Confidence::Know)
        })
        .take(WEAK_SKILL_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::company::{get_industry, CompanySize};
    use crate::analysis::skills::FALLBACK_SKILLS;

    #[test]
    fn test_empty_jd_is_blocked() {
        let err = validate_jd("").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == JD_REQUIRED_MESSAGE));
        assert!(validate_jd("   \n\t").is_err());
    }

    #[test]
    fn test_short_jd_warns_but_proceeds() {
        let validation = validate_jd(&"a".repeat(150)).unwrap();
        assert_eq!(validation.warning(), Some(SHORT_JD_WARNING));

        let validation = validate_jd(&"a".repeat(200)).unwrap();
        assert_eq!(validation, JdValidation::Ok);
        assert_eq!(validation.warning(), None);
    }

    #[test]
    fn test_150_char_keyword_free_jd() {
        let jd = "z".repeat(150);
        assert!(validate_jd(&jd).unwrap().warning().is_some());

        let entry = analyze_jd(&jd, "", "");
        assert_eq!(entry.extracted_skills.other, FALLBACK_SKILLS.map(String::from).to_vec());
        assert_eq!(entry.base_score, 35);
        assert_eq!(entry.final_score, 35);
        assert_eq!(entry.round_mapping.len(), 3);
        assert_eq!(entry.plan_7_days.len(), 7);
        assert_eq!(entry.questions.len(), 10);
    }

    #[test]
    fn test_amazon_react_sql_scenario() {
        let entry = analyze_jd("Build dashboards in React backed by SQL.", "Amazon", "SDE");
        assert_eq!(get_company_size(&entry.company), CompanySize::Enterprise);
        assert_eq!(get_industry(&entry.company), "E-Commerce");
        assert_eq!(entry.round_mapping.len(), 4);
        assert_eq!(entry.extracted_skills.web.len(), 1);
        assert_eq!(entry.extracted_skills.data.len(), 1);
    }

    #[test]
    fn test_confidence_map_starts_all_practice() {
        let entry = analyze_jd("java react docker", "", "");
        assert_eq!(entry.skill_confidence_map.len(), 3);
        assert!(entry
            .skill_confidence_map
            .values()
            .all(|c| *c == Confidence::Practice));
        // Initial final score is the base score, not the recomputed one.
        assert_eq!(entry.final_score, entry.base_score);
        assert_ne!(
            calculate_final_score(entry.base_score, &entry.skill_confidence_map),
            entry.final_score
        );
    }

    #[test]
    fn test_toggle_adds_four_over_recomputed_baseline() {
        let mut entry = analyze_jd("java react docker", "Acme", "SDE");
        let baseline = calculate_final_score(entry.base_score, &entry.skill_confidence_map);

        let next = toggle_confidence(&mut entry, "React", None).unwrap();
        assert_eq!(next, Confidence::Know);
        assert_eq!(entry.final_score, baseline + 4);
        assert!(entry.updated_at >= entry.created_at);

        let next = toggle_confidence(&mut entry, "React", None).unwrap();
        assert_eq!(next, Confidence::Practice);
        assert_eq!(entry.final_score, baseline);
    }

    #[test]
    fn test_toggle_with_explicit_target() {
        let mut entry = analyze_jd("java", "", "");
        toggle_confidence(&mut entry, "Java", Some(Confidence::Know)).unwrap();
        toggle_confidence(&mut entry, "Java", Some(Confidence::Know)).unwrap();
        assert_eq!(entry.skill_confidence_map["Java"], Confidence::Know);
    }

    #[test]
    fn test_toggle_unknown_skill_is_not_found() {
        let mut entry = analyze_jd("java", "", "");
        let err = toggle_confidence(&mut entry, "Cobol", None).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(!entry.skill_confidence_map.contains_key("Cobol"));
    }

    #[test]
    fn test_toggle_extracted_skill_missing_from_map() {
        let mut entry = analyze_jd("java react", "", "");
        entry.skill_confidence_map.clear();

        let next = toggle_confidence(&mut entry, "React", None).unwrap();
        assert_eq!(next, Confidence::Know);
        assert_eq!(entry.skill_confidence_map.len(), 1);
        assert_eq!(entry.final_score, entry.base_score + 2);
    }

    #[test]
    fn test_short_jd_counts_utf16_units() {
        // Each emoji is two UTF-16 code units.
        assert_eq!(validate_jd(&"😀".repeat(100)).unwrap(), JdValidation::Ok);
        assert!(validate_jd(&"😀".repeat(99)).unwrap().warning().is_some());
    }

    #[test]
    fn test_weak_skills_in_extraction_order() {
        let mut entry = analyze_jd("dsa python react sql", "", "");
        assert_eq!(weak_skills(&entry), vec!["Dsa", "Python", "React"]);

        toggle_confidence(&mut entry, "Python", None).unwrap();
        assert_eq!(weak_skills(&entry), vec!["Dsa", "React", "Sql"]);

        for skill in ["Dsa", "React", "Sql"] {
            toggle_confidence(&mut entry, skill, None).unwrap();
        }
        assert!(weak_skills(&entry).is_empty());
    }

    #[test]
    fn test_entries_get_unique_ids() {
        let a = analyze_jd("java", "", "");
        let b = analyze_jd("java", "", "");
        assert_ne!(a.id, b.id);
    }
}
