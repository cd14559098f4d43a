use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Skill keywords detected in a JD, grouped into fixed buckets.
/// Bucket order (coreCS → other) is significant for question matching and
/// confidence-map initialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSkills {
    #[serde(rename = "coreCS")]
    pub core_cs: Vec<String>,
    pub languages: Vec<String>,
    pub web: Vec<String>,
    pub data: Vec<String>,
    pub cloud: Vec<String>,
    pub testing: Vec<String>,
    pub other: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundMapping {
    pub round_title: String,
    pub focus_areas: Vec<String>,
    pub why_it_matters: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRound {
    pub round_title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

/// Self-assessed confidence for a single skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Know,
    #[default]
    Practice,
}

impl Confidence {
    pub fn toggled(self) -> Self {
        match self {
            Confidence::Know => Confidence::Practice,
            Confidence::Practice => Confidence::Know,
        }
    }

    /// Score delta contributed by one skill at this confidence.
    pub fn delta(self) -> i32 {
        match self {
            Confidence::Know => 2,
            Confidence::Practice => -2,
        }
    }
}

pub type ConfidenceMap = BTreeMap<String, Confidence>;

/// One persisted analysis run. Field names match the JSON blobs written by
/// the web client (`prp_analysis_history`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: ExtractedSkills,
    pub round_mapping: Vec<RoundMapping>,
    pub checklist: Vec<ChecklistRound>,
    #[serde(rename = "plan7Days")]
    pub plan_7_days: Vec<DayPlan>,
    pub questions: Vec<String>,
    pub base_score: u32,
    #[serde(default)]
    pub skill_confidence_map: ConfidenceMap,
    pub final_score: u32,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::Know).unwrap(), r#""know""#);
        let c: Confidence = serde_json::from_str(r#""practice""#).unwrap();
        assert_eq!(c, Confidence::Practice);
    }

    #[test]
    fn test_confidence_toggle_round_trips() {
        assert_eq!(Confidence::Practice.toggled(), Confidence::Know);
        assert_eq!(Confidence::Know.toggled().toggled(), Confidence::Know);
    }

    #[test]
    fn test_extracted_skills_uses_core_cs_key() {
        let skills = ExtractedSkills {
            core_cs: vec!["Dsa".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&skills).unwrap();
        assert_eq!(json["coreCS"][0], "Dsa");
        assert!(json.get("core_cs").is_none());
    }

    #[test]
    fn test_entry_deserializes_web_client_blob() {
        let json = r#"{
            "id": "6f1c3d1e-3a4b-4c5d-8e9f-0a1b2c3d4e5f",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "company": "Swiggy",
            "role": "SDE 1",
            "jdText": "React and SQL",
            "extractedSkills": {
                "coreCS": [], "languages": [], "web": ["React"], "data": ["Sql"],
                "cloud": [], "testing": [], "other": []
            },
            "roundMapping": [],
            "checklist": [],
            "plan7Days": [{"day": "Day 1", "focus": "Fundamentals", "tasks": ["Revise OOP concepts"]}],
            "questions": [],
            "baseScore": 65,
            "skillConfidenceMap": {"React": "know", "Sql": "practice"},
            "finalScore": 65,
            "updatedAt": "2024-05-01T10:05:00.000Z"
        }"#;

        let entry: AnalysisEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.company, "Swiggy");
        assert_eq!(entry.extracted_skills.data, vec!["Sql".to_string()]);
        assert_eq!(entry.plan_7_days.len(), 1);
        assert_eq!(entry.skill_confidence_map["React"], Confidence::Know);
    }
}
