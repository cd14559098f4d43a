//! Plain-text export of an analysis: section copies for the clipboard and a
//! full downloadable report. Tests read the report layout back with `parse_report`.

use serde::Deserialize;

use crate::models::analysis::{AnalysisEntry, ChecklistRound, DayPlan};

const REPORT_TITLE: &str = "=== Placement Readiness Analysis ===";
const PLAN_HEADER: &str = "--- 7-Day Plan ---";
const CHECKLIST_HEADER: &str = "--- Round Checklist ---";
const QUESTIONS_HEADER: &str = "--- Interview Questions ---";
const TASK_BULLET: &str = "  • ";
const ITEM_BOX: &str = "  □ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportSection {
    Plan,
    Checklist,
    Questions,
}

fn day_block(day: &DayPlan) -> String {
    let mut lines = vec![format!("{}: {}", day.day, day.focus)];
    lines.extend(day.tasks.iter().map(|t| format!("{TASK_BULLET}{t}")));
    lines.join("\n")
}

fn round_block(round: &ChecklistRound) -> String {
    let mut lines = vec![round.round_title.clone()];
    lines.extend(round.items.iter().map(|i| format!("{ITEM_BOX}{i}")));
    lines.join("\n")
}

fn numbered(questions: &[String]) -> Vec<String> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {q}", i + 1))
        .collect()
}

pub fn plan_text(plan: &[DayPlan]) -> String {
    plan.iter().map(day_block).collect::<Vec<_>>().join("\n\n")
}

pub fn checklist_text(checklist: &[ChecklistRound]) -> String {
    checklist.iter().map(round_block).collect::<Vec<_>>().join("\n\n")
}

pub fn questions_text(questions: &[String]) -> String {
    numbered(questions).join("\n")
}

pub fn section_text(entry: &AnalysisEntry, section: ExportSection) -> String {
    match section {
        ExportSection::Plan => plan_text(&entry.plan_7_days),
        ExportSection::Checklist => checklist_text(&entry.checklist),
        ExportSection::Questions => questions_text(&entry.questions),
    }
}

/// Full downloadable report.
pub fn render_report(entry: &AnalysisEntry) -> String {
    let mut lines = vec![format!("{REPORT_TITLE}\n")];
    if !entry.company.is_empty() {
        lines.push(format!("Company: {}", entry.company));
    }
    if !entry.role.is_empty() {
        lines.push(format!("Role: {}", entry.role));
    }
    lines.push(format!("Readiness Score: {}/100\n", entry.final_score));

    lines.push(PLAN_HEADER.to_string());
    for day in &entry.plan_7_days {
        lines.push(format!("\n{}", day_block(day)));
    }

    lines.push(format!("\n{CHECKLIST_HEADER}"));
    for round in &entry.checklist {
        lines.push(format!("\n{}", round_block(round)));
    }

    lines.push(format!("\n{QUESTIONS_HEADER}"));
    lines.extend(numbered(&entry.questions));

    lines.join("\n")
}

/// Download name for the full report. Characters that would break a
/// `Content-Disposition` header or a path become `_`.
pub fn download_filename(entry: &AnalysisEntry) -> String {
    let name: String = if entry.company.is_empty() {
        "analysis".to_string()
    } else {
        entry
            .company
            .chars()
            .map(|c| if c.is_control() || matches!(c, '"' | '/' | '\\') { '_' } else { c })
            .collect()
    };
    format!("readiness-{name}.txt")
}

/// Section content recovered from a rendered report.
#[cfg(test)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedReport {
    /// (day label, task count) per plan day.
    pub plan: Vec<(String, usize)>,
    /// (round title, item count) per checklist round.
    pub checklist: Vec<(String, usize)>,
    pub questions: Vec<String>,
}

#[cfg(test)]
#[derive(Clone, Copy)]
enum Section {
    Preamble,
    Plan,
    Checklist,
    Questions,
}

#[cfg(test)]
pub fn parse_report(text: &str) -> ParsedReport {
    let mut parsed = ParsedReport::default();
    let mut section = Section::Preamble;

    for line in text.lines() {
        match line {
            PLAN_HEADER => {
                section = Section::Plan;
                continue;
            }
            CHECKLIST_HEADER => {
                section = Section::Checklist;
                continue;
            }
            QUESTIONS_HEADER => {
                section = Section::Questions;
                continue;
            }
            "" => continue,
            _ => {}
        }

        match section {
            Section::Preamble => {}
            Section::Plan => {
                if line.starts_with(TASK_BULLET) {
                    if let Some((_, count)) = parsed.plan.last_mut() {
                        *count += 1;
                    }
                } else if let Some((label, _)) = line.split_once(": ") {
                    parsed.plan.push((label.to_string(), 0));
                }
            }
            Section::Checklist => {
                if line.starts_with(ITEM_BOX) {
                    if let Some((_, count)) = parsed.checklist.last_mut() {
                        *count += 1;
                    }
                } else {
                    parsed.checklist.push((line.to_string(), 0));
                }
            }
            Section::Questions => {
                if let Some((number, question)) = line.split_once(". ") {
                    if number.chars().all(|c| c.is_ascii_digit()) {
                        parsed.questions.push(question.to_string());
                    }
                }
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::assembler::analyze_jd;

    #[test]
    fn test_report_layout() {
        let entry = analyze_jd("java react sql", "Acme", "Backend Intern");
        let report = render_report(&entry);

        assert!(report.starts_with("=== Placement Readiness Analysis ===\n\nCompany: Acme\nRole: Backend Intern\n"));
        assert!(report.contains(&format!("Readiness Score: {}/100\n\n--- 7-Day Plan ---\n\nDay 1: ", entry.final_score)));
        assert!(report.contains("\n  • Revise OOP concepts\n"));
        assert!(report.contains("\n\n--- Round Checklist ---\n\nRound 1 — Practical Coding\n  □ "));
        assert!(report.contains("\n\n--- Interview Questions ---\n1. "));
        assert!(report.ends_with(&format!("10. {}", entry.questions[9])));
    }

    #[test]
    fn test_report_omits_blank_company_and_role() {
        let entry = analyze_jd("java", "", "");
        let report = render_report(&entry);
        assert!(!report.contains("Company:"));
        assert!(!report.contains("Role:"));
    }

    #[test]
    fn test_report_round_trip_recovers_counts() {
        for (jd, company) in [("java react sql docker", "Amazon"), ("", "Swiggy"), ("python", "")] {
            let entry = analyze_jd(jd, company, "SDE");
            let parsed = parse_report(&render_report(&entry));

            let plan: Vec<(String, usize)> = entry
                .plan_7_days
                .iter()
                .map(|d| (d.day.clone(), d.tasks.len()))
                .collect();
            let checklist: Vec<(String, usize)> = entry
                .checklist
                .iter()
                .map(|r| (r.round_title.clone(), r.items.len()))
                .collect();

            assert_eq!(parsed.plan, plan);
            assert_eq!(parsed.checklist, checklist);
            assert_eq!(parsed.questions, entry.questions);
        }
    }

    #[test]
    fn test_section_copies() {
        let entry = analyze_jd("java", "", "");
        let plan = section_text(&entry, ExportSection::Plan);
        assert!(plan.starts_with("Day 1: Fundamentals + Core CS\n  • Revise OOP concepts"));
        assert_eq!(plan.matches("\n\nDay ").count(), 6);

        let questions = section_text(&entry, ExportSection::Questions);
        assert_eq!(questions.lines().count(), 10);
        assert!(questions.starts_with("1. "));

        let checklist = section_text(&entry, ExportSection::Checklist);
        assert_eq!(checklist.split("\n\n").count(), entry.checklist.len());
    }

    #[test]
    fn test_download_filename() {
        let mut entry = analyze_jd("java", "", "");
        assert_eq!(download_filename(&entry), "readiness-analysis.txt");
        entry.company = "Razorpay".to_string();
        assert_eq!(download_filename(&entry), "readiness-Razorpay.txt");
        entry.company = "A/B \"Labs\"\n".to_string();
        assert_eq!(download_filename(&entry), "readiness-A_B _Labs__.txt");
    }

    #[test]
    fn test_export_section_from_path_segment() {
        let section: ExportSection = serde_json::from_str(r#""checklist""#).unwrap();
        assert_eq!(section, ExportSection::Checklist);
    }
}
