use crate::models::analysis::ExtractedSkills;

pub const QUESTION_COUNT: usize = 10;

/// Lower-cased skill → likely interview questions.
const QUESTION_BANK: &[(&str, &[&str])] = &[
    (
        "dsa",
        &[
            "How would you optimize search in sorted data?",
            "Explain the time complexity of quicksort.",
            "How do you detect a cycle in a linked list?",
            "When would you use a stack vs a queue?",
        ],
    ),
    (
        "oop",
        &[
            "Explain SOLID principles with examples.",
            "Difference between abstract class and interface?",
        ],
    ),
    (
        "dbms",
        &["What is normalization? Explain 3NF.", "Explain ACID properties."],
    ),
    (
        "sql",
        &[
            "Explain indexing and when it helps.",
            "Write a query to find the second highest salary.",
        ],
    ),
    (
        "mongodb",
        &[
            "When would you choose MongoDB over SQL?",
            "Explain aggregation pipelines.",
        ],
    ),
    (
        "react",
        &[
            "Explain state management options in React.",
            "What are hooks and their rules?",
            "How does the virtual DOM work?",
        ],
    ),
    (
        "node.js",
        &[
            "Explain the event loop in Node.js.",
            "How do you handle errors in Express?",
        ],
    ),
    (
        "nodejs",
        &[
            "Explain the event loop in Node.js.",
            "How do you handle errors in Express?",
        ],
    ),
    (
        "python",
        &["Explain list comprehensions.", "What are Python decorators?"],
    ),
    (
        "java",
        &[
            "Explain JVM memory management.",
            "Difference between HashMap and TreeMap?",
        ],
    ),
    (
        "javascript",
        &[
            "Explain closures with an example.",
            "What is the event loop in JavaScript?",
        ],
    ),
    (
        "typescript",
        &[
            "What are generics in TypeScript?",
            "Explain union vs intersection types.",
        ],
    ),
    (
        "aws",
        &["Explain EC2 vs Lambda.", "What is S3 and when would you use it?"],
    ),
    (
        "docker",
        &[
            "What is a Docker container vs image?",
            "How does Docker networking work?",
        ],
    ),
    (
        "kubernetes",
        &["Explain pods and services.", "What is a deployment in Kubernetes?"],
    ),
    (
        "rest",
        &["Explain REST principles.", "Difference between PUT and PATCH?"],
    ),
    (
        "graphql",
        &["How does GraphQL differ from REST?", "What are resolvers?"],
    ),
    (
        "linux",
        &[
            "Explain file permissions in Linux.",
            "What is a process vs a thread?",
        ],
    ),
    (
        "operating system",
        &["Explain deadlock and how to prevent it.", "What is virtual memory?"],
    ),
    (
        "computer network",
        &["Explain TCP 3-way handshake.", "What is DNS?"],
    ),
    ("networking", &["Explain TCP 3-way handshake.", "What is DNS?"]),
    (
        "problem solving",
        &[
            "Describe your approach to debugging a complex issue.",
            "How do you break down a large problem?",
        ],
    ),
    (
        "communication",
        &["How would you explain a technical concept to a non-technical stakeholder?"],
    ),
    (
        "basic coding",
        &[
            "Write a function to reverse a string.",
            "Explain the difference between iteration and recursion.",
        ],
    ),
];

/// Generic questions used to backfill when the detected skills do not
/// yield ten distinct questions.
const FALLBACK_QUESTIONS: &[&str] = &[
    "Tell me about yourself and your background.",
    "What project are you most proud of and why?",
    "How do you handle tight deadlines?",
    "Describe a time you solved a difficult technical problem.",
    "Where do you see yourself in 3 years?",
    "What motivates you to work in technology?",
    "How do you stay updated with new technologies?",
    "Describe your ideal team environment.",
    "What is your approach to learning something new?",
    "Why should we hire you?",
];

fn lookup(skill: &str) -> Option<&'static [&'static str]> {
    let key = skill.trim().to_lowercase();
    QUESTION_BANK
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, questions)| *questions)
}

/// Collects exactly ten distinct questions: skill-specific ones first (in
/// flattened bucket order), then generic backfill.
pub fn generate_questions(skills: &ExtractedSkills) -> Vec<String> {
    let mut questions: Vec<String> = Vec::with_capacity(QUESTION_COUNT);

    let specific = skills.all().filter_map(|skill| lookup(skill)).flatten();
    for candidate in specific.chain(FALLBACK_QUESTIONS.iter()) {
        if questions.len() >= QUESTION_COUNT {
            break;
        }
        if !questions.iter().any(|q| q == candidate) {
            questions.push(candidate.to_string());
        }
    }

    questions
}
