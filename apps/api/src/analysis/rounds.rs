use crate::analysis::company::CompanySize;
use crate::models::analysis::{ExtractedSkills, RoundMapping};

fn round(title: &str, focus_areas: &[&str], why_it_matters: &str) -> RoundMapping {
    RoundMapping {
        round_title: title.to_string(),
        focus_areas: focus_areas.iter().map(|s| s.to_string()).collect(),
        why_it_matters: why_it_matters.to_string(),
    }
}

/// Returns the interview-round template for the company size. Only the focus
/// areas of the technical rounds react to the detected skills.
pub fn generate_round_mapping(skills: &ExtractedSkills, size: CompanySize) -> Vec<RoundMapping> {
    let has_dsa = skills.has_core_cs();
    let has_web = skills.has_web();

    match size {
        CompanySize::Enterprise => vec![
            round(
                "Round 1 — Online Test",
                &["Aptitude", "DSA", "Core CS MCQs"],
                "Filters candidates at scale. Focus on speed and accuracy with fundamentals.",
            ),
            round(
                "Round 2 — Technical Interview",
                if has_dsa {
                    &["DSA Problem Solving", "Core CS Concepts"]
                } else {
                    &["Coding Basics", "Problem Solving"]
                },
                "Tests depth of understanding. Expect whiteboard-style problem solving.",
            ),
            round(
                "Round 3 — Tech + Projects",
                if has_web {
                    &["Project Walkthrough", "Stack-specific Questions"]
                } else {
                    &["Project Discussion", "System Thinking"]
                },
                "Evaluates practical experience and communication about technical decisions.",
            ),
            round(
                "Round 4 — HR / Managerial",
                &["Behavioral Questions", "Company Values", "Salary Discussion"],
                "Assesses cultural fit and long-term alignment.",
            ),
        ],
        CompanySize::MidSize => vec![
            round(
                "Round 1 — Online Assessment",
                &["Coding Challenge", "Aptitude"],
                "Initial screening to test baseline coding and logical skills.",
            ),
            round(
                "Round 2 — Technical Interview",
                if has_web {
                    &["Stack-specific Coding", "System Design Basics"]
                } else {
                    &["DSA", "Problem Solving"]
                },
                "Deep dive into your technical abilities and approach to problems.",
            ),
            round(
                "Round 3 — Managerial",
                &["Team Fit", "Project Experience", "Growth Mindset"],
                "Tests how well you communicate and collaborate.",
            ),
            round(
                "Round 4 — HR",
                &["Expectations", "Role Alignment"],
                "Final alignment on role, compensation, and joining.",
            ),
        ],
        CompanySize::Startup => vec![
            round(
                "Round 1 — Practical Coding",
                if has_web {
                    &["Live Coding (Frontend/Backend)"][..]
                } else {
                    &["Algorithm Implementation", "Code Quality"][..]
                },
                "Startups value speed. Show you can build working code quickly.",
            ),
            round(
                "Round 2 — System Discussion",
                &["Architecture Thinking", "Trade-offs", "Scalability Basics"],
                "Even at junior level, startups want people who think beyond code.",
            ),
            round(
                "Round 3 — Culture Fit",
                &["Ownership Mindset", "Learning Agility", "Side Projects"],
                "Startups need self-starters who thrive in ambiguity.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::skills::extract_skills;

    #[test]
    fn test_round_counts_per_size() {
        for jd in ["", "React DSA", "python sql docker"] {
            let skills = extract_skills(jd);
            assert_eq!(generate_round_mapping(&skills, CompanySize::Enterprise).len(), 4);
            assert_eq!(generate_round_mapping(&skills, CompanySize::MidSize).len(), 4);
            assert_eq!(generate_round_mapping(&skills, CompanySize::Startup).len(), 3);
        }
    }

    #[test]
    fn test_enterprise_round_two_switches_on_core_cs() {
        let with_dsa = generate_round_mapping(&extract_skills("DSA"), CompanySize::Enterprise);
        assert_eq!(with_dsa[1].focus_areas, vec!["DSA Problem Solving", "Core CS Concepts"]);

        let without = generate_round_mapping(&extract_skills(""), CompanySize::Enterprise);
        assert_eq!(without[1].focus_areas, vec!["Coding Basics", "Problem Solving"]);
    }

    #[test]
    fn test_enterprise_round_three_switches_on_web() {
        let rounds = generate_round_mapping(&extract_skills("react"), CompanySize::Enterprise);
        assert_eq!(rounds[2].focus_areas, vec!["Project Walkthrough", "Stack-specific Questions"]);
    }

    #[test]
    fn test_startup_first_round_with_web() {
        let rounds = generate_round_mapping(&extract_skills("angular"), CompanySize::Startup);
        assert_eq!(rounds[0].round_title, "Round 1 — Practical Coding");
        assert_eq!(rounds[0].focus_areas, vec!["Live Coding (Frontend/Backend)"]);
        assert_eq!(rounds[2].round_title, "Round 3 — Culture Fit");
    }

    #[test]
    fn test_mid_size_titles() {
        let rounds = generate_round_mapping(&extract_skills(""), CompanySize::MidSize);
        let titles: Vec<&str> = rounds.iter().map(|r| r.round_title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Round 1 — Online Assessment",
                "Round 2 — Technical Interview",
                "Round 3 — Managerial",
                "Round 4 — HR",
            ]
        );
        assert_eq!(rounds[1].focus_areas, vec!["DSA", "Problem Solving"]);
    }
}
