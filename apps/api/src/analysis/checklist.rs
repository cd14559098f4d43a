use crate::models::analysis::{ChecklistRound, ExtractedSkills, RoundMapping};

const MIN_ITEMS: usize = 5;
const MAX_ITEMS: usize = 8;

/// Checklist flavour chosen from a round title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundKind {
    Screening,
    Technical,
    Project,
    Behavioral,
    Unclassified,
}

/// Title patterns, checked in order; the first hit decides the kind.
const ROUND_PATTERNS: &[(RoundKind, &[&str])] = &[
    (RoundKind::Screening, &["Online", "Aptitude"]),
    (RoundKind::Technical, &["Technical", "Coding"]),
    (RoundKind::Project, &["Project", "System"]),
    (RoundKind::Behavioral, &["HR", "Culture", "Managerial"]),
];

const SCREENING_ITEMS: &[&str] = &[
    "Practice aptitude: quant, logical, verbal",
    "Solve 20+ easy-medium DSA problems",
    "Time yourself — aim for 70% accuracy under 45 mins",
    "Revise number systems and probability",
    "Practice pattern-based MCQs",
];

const PROJECT_ITEMS: &[&str] = &[
    "Prepare 2-minute walkthrough of your best project",
    "Know every tech decision and trade-off",
    "Be ready for 'How would you scale this?'",
    "Prepare a system design diagram if applicable",
    "Practice explaining architecture to non-tech audience",
];

const BEHAVIORAL_ITEMS: &[&str] = &[
    "Prepare STAR-format answers for 5 behavioral questions",
    "Research company mission and recent news",
    "Prepare 'Why this company?' answer",
    "Know your salary expectations and negotiation points",
    "Prepare thoughtful questions for the interviewer",
];

const FILLER_ITEMS: &[&str] = &[
    "Review fundamentals",
    "Practice mock scenarios",
    "Get peer feedback",
    "Rest well before the round",
    "Stay calm and structured",
];

fn classify(title: &str) -> RoundKind {
    ROUND_PATTERNS
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| title.contains(n)))
        .map(|(kind, _)| *kind)
        .unwrap_or(RoundKind::Unclassified)
}

fn technical_items(skills: &ExtractedSkills) -> Vec<String> {
    let mut items = vec!["Revise top 50 DSA patterns (arrays, trees, graphs, DP)".to_string()];
    if skills.has_languages() {
        items.push(format!("Practice in: {}", skills.languages.join(", ")));
    }
    items.extend(
        [
            "Solve 2 medium problems daily",
            "Explain approach before coding",
            "Practice dry-running your code",
        ]
        .map(String::from),
    );
    if skills.has_web() {
        items.push(format!("Review {} concepts", skills.web.join(", ")));
    }
    if skills.has_data() {
        items.push(format!("Review {} query patterns", skills.data.join(", ")));
    }
    items
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds one checklist per round. Every round ends up with 5–8 items.
pub fn generate_checklist(skills: &ExtractedSkills, rounds: &[RoundMapping]) -> Vec<ChecklistRound> {
    rounds
        .iter()
        .map(|round| {
            let mut items = match classify(&round.round_title) {
                RoundKind::Screening => owned(SCREENING_ITEMS),
                RoundKind::Technical => technical_items(skills),
                RoundKind::Project => owned(PROJECT_ITEMS),
                RoundKind::Behavioral => owned(BEHAVIORAL_ITEMS),
                RoundKind::Unclassified => Vec::new(),
            };
            if items.len() < MIN_ITEMS {
                items.extend(FILLER_ITEMS.iter().map(|s| s.to_string()));
            }
            items.truncate(MAX_ITEMS);

            ChecklistRound {
                round_title: round.round_title.clone(),
                items,
            }
        })
        .collect()
}
