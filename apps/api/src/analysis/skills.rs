//! Skill extraction by keyword containment over a raw job description.
//!
//! Matching is plain substring containment on the lower-cased JD padded with a
//! space on each side. Only the bare `" c "` keyword carries its own padding;
//! every other keyword can match inside longer words.

use serde::Serialize;

use crate::models::analysis::ExtractedSkills;

/// Keyword-derived skill buckets, in the order they are scanned and flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    CoreCs,
    Languages,
    Web,
    Data,
    Cloud,
    Testing,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "Core CS",
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web",
            SkillCategory::Data => "Data",
            SkillCategory::Cloud => "Cloud / DevOps",
            SkillCategory::Testing => "Testing",
        }
    }
}

/// A non-empty bucket with its display label, as listed on the results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub label: &'static str,
    pub skills: Vec<String>,
}

const OTHER_LABEL: &str = "Other";

const SKILL_KEYWORDS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::CoreCs,
        &[
            "dsa",
            "data structure",
            "algorithm",
            "oop",
            "object oriented",
            "dbms",
            "database management",
            "operating system",
            "computer network",
            "networking",
        ],
    ),
    (
        SkillCategory::Languages,
        &[
            "java",
            "python",
            "javascript",
            "typescript",
            "c++",
            "c#",
            "golang",
            "go lang",
            " c ",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "react", "next.js", "nextjs", "node.js", "nodejs", "express", "rest", "restful",
            "graphql", "angular", "vue", "html", "css",
        ],
    ),
    (
        SkillCategory::Data,
        &["sql", "mongodb", "postgresql", "mysql", "redis", "nosql", "database"],
    ),
    (
        SkillCategory::Cloud,
        &[
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "ci/cd",
            "cicd",
            "linux",
            "devops",
            "jenkins",
            "terraform",
        ],
    ),
    (
        SkillCategory::Testing,
        &[
            "selenium",
            "cypress",
            "playwright",
            "junit",
            "pytest",
            "testing",
            "jest",
            "mocha",
        ],
    ),
];

/// Placed in `other` when no keyword matched at all.
pub const FALLBACK_SKILLS: [&str; 4] = ["Communication", "Problem Solving", "Basic Coding", "Projects"];

/// Scans the JD against every category's keyword list.
pub fn extract_skills(jd_text: &str) -> ExtractedSkills {
    let haystack = format!(" {} ", jd_text.to_lowercase());
    let mut skills = ExtractedSkills::default();

    for (category, keywords) in SKILL_KEYWORDS {
        let bucket = skills.bucket_mut(*category);
        for keyword in keywords.iter().filter(|kw| haystack.contains(*kw)) {
            let display = display_case(keyword);
            if !bucket.contains(&display) {
                bucket.push(display);
            }
        }
    }

    if SKILL_KEYWORDS.iter().all(|(c, _)| skills.bucket(*c).is_empty()) {
        skills.other = FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect();
    }

    skills
}

/// Trims the keyword and upper-cases its first character only.
fn display_case(keyword: &str) -> String {
    let trimmed = keyword.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl ExtractedSkills {
    pub fn bucket(&self, category: SkillCategory) -> &Vec<String> {
        match category {
            SkillCategory::CoreCs => &self.core_cs,
            SkillCategory::Languages => &self.languages,
            SkillCategory::Web => &self.web,
            SkillCategory::Data => &self.data,
            SkillCategory::Cloud => &self.cloud,
            SkillCategory::Testing => &self.testing,
        }
    }

    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::CoreCs => &mut self.core_cs,
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Web => &mut self.web,
            SkillCategory::Data => &mut self.data,
            SkillCategory::Cloud => &mut self.cloud,
            SkillCategory::Testing => &mut self.testing,
        }
    }

    /// All skills across the seven buckets: coreCS, languages, web, data,
    /// cloud, testing, other.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.core_cs
            .iter()
            .chain(&self.languages)
            .chain(&self.web)
            .chain(&self.data)
            .chain(&self.cloud)
            .chain(&self.testing)
            .chain(&self.other)
    }

    /// Number of keyword-derived categories (excluding `other`) with at least one skill.
    pub fn filled_categories(&self) -> usize {
        SKILL_KEYWORDS
            .iter()
            .filter(|(c, _)| !self.bucket(*c).is_empty())
            .count()
    }

    /// Non-empty buckets in scan order, `other` last.
    pub fn groups(&self) -> Vec<SkillGroup> {
        let mut groups: Vec<SkillGroup> = SKILL_KEYWORDS
            .iter()
            .map(|(c, _)| SkillGroup {
                label: c.label(),
                skills: self.bucket(*c).clone(),
            })
            .collect();
        groups.push(SkillGroup {
            label: OTHER_LABEL,
            skills: self.other.clone(),
        });
        groups.retain(|g| !g.skills.is_empty());
        groups
    }

    pub fn has_core_cs(&self) -> bool {
        !self.core_cs.is_empty()
    }

    pub fn has_languages(&self) -> bool {
        !self.languages.is_empty()
    }

    pub fn has_web(&self) -> bool {
        !self.web.is_empty()
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    pub fn has_cloud(&self) -> bool {
        !self.cloud.is_empty()
    }

    pub fn primary_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_yields_fallback_only() {
        let skills = extract_skills("We are hiring motivated freshers who love to learn.");
        assert_eq!(skills.other, FALLBACK_SKILLS.map(String::from).to_vec());
        assert_eq!(skills.filled_categories(), 0);
        assert_eq!(skills.all().count(), 4);
    }

    #[test]
    fn test_empty_text_yields_fallback() {
        let skills = extract_skills("");
        assert_eq!(skills.other.len(), 4);
    }

    #[test]
    fn test_react_and_sql_land_in_web_and_data() {
        let skills = extract_skills("Experience with React and SQL required.");
        assert_eq!(skills.web, vec!["React".to_string()]);
        assert_eq!(skills.data, vec!["Sql".to_string()]);
        assert!(skills.other.is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive_and_display_cased() {
        let skills = extract_skills("DOCKER, Kubernetes and ci/cd pipelines");
        assert_eq!(
            skills.cloud,
            vec!["Docker".to_string(), "Kubernetes".to_string(), "Ci/cd".to_string()]
        );
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        // "javascript" also contains "java"; both match in list order.
        let skills = extract_skills("Strong JavaScript skills");
        assert_eq!(skills.languages, vec!["Java".to_string(), "Javascript".to_string()]);
    }

    #[test]
    fn test_bare_c_needs_surrounding_spaces() {
        assert_eq!(extract_skills("C and C++").languages, vec!["C++".to_string(), "C".to_string()]);
        assert!(extract_skills("cloud").languages.is_empty());
        // Padding makes a trailing "c" at the very end of the text match.
        assert_eq!(extract_skills("knows c").languages, vec!["C".to_string()]);
    }

    #[test]
    fn test_keyword_in_multiple_categories() {
        // "database management" hits coreCS; its "database" substring also hits data.
        let skills = extract_skills("database management systems");
        assert_eq!(skills.core_cs, vec!["Database management".to_string()]);
        assert_eq!(skills.data, vec!["Database".to_string()]);
    }

    #[test]
    fn test_bucket_entries_are_unique() {
        let skills = extract_skills("rest restful REST api");
        assert_eq!(skills.web, vec!["Rest".to_string(), "Restful".to_string()]);
    }

    #[test]
    fn test_predicates_and_primary_language() {
        let skills = extract_skills("Python and DSA, deployed on AWS");
        assert!(skills.has_core_cs());
        assert!(skills.has_languages());
        assert!(skills.has_cloud());
        assert!(!skills.has_web());
        assert!(!skills.has_data());
        assert_eq!(skills.primary_language(), Some("Python"));
    }

    #[test]
    fn test_flatten_order_follows_buckets() {
        let skills = extract_skills("jest sql react python dsa");
        let all: Vec<&str> = skills.all().map(String::as_str).collect();
        assert_eq!(all, vec!["Dsa", "Python", "React", "Sql", "Jest"]);
    }

    #[test]
    fn test_groups_skip_empty_buckets() {
        let skills = extract_skills("Python services on AWS");
        let labels: Vec<&str> = skills.groups().iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Languages", "Cloud / DevOps"]);

        let fallback = extract_skills("");
        let groups = fallback.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Other");
        assert_eq!(groups[0].skills.len(), 4);
    }
}
