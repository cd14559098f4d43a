use crate::models::analysis::{DayPlan, ExtractedSkills};

fn day(n: u8, focus: &str, tasks: Vec<String>) -> DayPlan {
    DayPlan {
        day: format!("Day {n}"),
        focus: focus.to_string(),
        tasks,
    }
}

fn tasks<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.map(String::from).to_vec()
}

/// Fixed 7-day study plan. Day 2, Day 5 and Day 6 substitute a task based on
/// the detected language, web stack, data and cloud skills.
pub fn generate_7day_plan(skills: &ExtractedSkills) -> Vec<DayPlan> {
    let language = skills
        .primary_language()
        .unwrap_or("your primary language");

    vec![
        day(
            1,
            "Fundamentals + Core CS",
            tasks([
                "Revise OOP concepts",
                "Review OS basics (processes, threads, memory)",
                "DBMS: normalization, ACID, indexing",
                "Networking: OSI model, TCP/UDP, HTTP",
            ]),
        ),
        day(
            2,
            "Core CS continued + Language Prep",
            vec![
                "Practice 10 MCQs on core CS".to_string(),
                format!("Revise syntax of {language}"),
                "Understand time/space complexity basics".to_string(),
                "Solve 5 easy problems".to_string(),
            ],
        ),
        day(
            3,
            "DSA — Arrays, Strings, Hashing",
            tasks([
                "Two-pointer and sliding window patterns",
                "Hash map based problems",
                "Practice 5 medium problems",
                "Write clean, commented code",
            ]),
        ),
        day(
            4,
            "DSA — Trees, Graphs, DP",
            tasks([
                "BFS/DFS traversal patterns",
                "Basic DP: fibonacci, knapsack, LCS",
                "Practice 5 medium problems",
                "Focus on explaining your approach",
            ]),
        ),
        day(
            5,
            "Project + Resume Alignment",
            tasks([
                "Polish your best project's README",
                "Prepare 2-min project walkthrough",
                if skills.has_web() {
                    "Review React/Node concepts for project stack"
                } else {
                    "Review your project's tech stack"
                },
                "Update resume with quantified achievements",
            ]),
        ),
        day(
            6,
            "Mock Interview + Soft Skills",
            tasks([
                "Do a timed mock DSA round (45 mins, 2 problems)",
                "Practice behavioral questions (STAR format)",
                if skills.has_data() {
                    "Review SQL queries and joins"
                } else {
                    "Review data handling concepts"
                },
                if skills.has_cloud() {
                    "Review deployment and CI/CD flow"
                } else {
                    "Review basic deployment concepts"
                },
            ]),
        ),
        day(
            7,
            "Revision + Weak Areas",
            tasks([
                "Re-solve problems you struggled with",
                "Review all notes from the week",
                "Light practice — don't over-stress",
                "Sleep well, stay hydrated, stay confident",
            ]),
        ),
    ]
}
