use tracing::warn;

use crate::models::proof::{ProjectStatus, ProofFooterState, ProofSubmission, TEST_CHECKLIST_LEN};
use crate::storage::history::get_history;
use crate::storage::{
    read_json, write_json, KeyValueStore, StorageError, CHECKLIST_KEY, FOOTER_KEY, SUBMISSION_KEY,
};

/// Manual pre-ship checks as (label, how to verify).
pub const TEST_CASES: [(&str, &str); TEST_CHECKLIST_LEN] = [
    ("JD required validation works", "Submit an empty JD. It should be rejected."),
    ("Short JD warning shows for <200 chars", "Analyze a very short JD."),
    ("Skills extraction groups correctly", "Analyze a JD with React, SQL and Docker and check the categories."),
    ("Round mapping changes based on company + skills", "Compare 'Amazon' with an unknown startup."),
    ("Score calculation is deterministic", "Same JD and inputs should produce the same base score."),
    ("Skill toggles update score live", "Toggle a skill's confidence and re-read the entry."),
    ("Changes persist after refresh", "Toggle skills, restart with DATA_DIR set and re-read."),
    ("History saves and loads correctly", "Analyze a JD, list history, then fetch the entry."),
    ("Export buttons copy the correct content", "Fetch each export section and compare."),
    ("No console errors on core pages", "Check the server log for errors while exercising the API."),
];

/// Test checklist flags. Anything other than exactly ten booleans reads as all-false.
pub fn get_test_checklist(store: &dyn KeyValueStore) -> Vec<bool> {
    match read_json::<Vec<bool>>(store, CHECKLIST_KEY) {
        Some(items) if items.len() == TEST_CHECKLIST_LEN => items,
        Some(items) => {
            warn!(
                "Test checklist has {} items, expected {TEST_CHECKLIST_LEN}; resetting",
                items.len()
            );
            vec![false; TEST_CHECKLIST_LEN]
        }
        None => vec![false; TEST_CHECKLIST_LEN],
    }
}

pub fn save_test_checklist(store: &dyn KeyValueStore, items: &[bool]) -> Result<(), StorageError> {
    write_json(store, CHECKLIST_KEY, items)
}

pub fn get_proof_submission(store: &dyn KeyValueStore) -> ProofSubmission {
    read_json(store, SUBMISSION_KEY).unwrap_or_default()
}

pub fn save_proof_submission(store: &dyn KeyValueStore, submission: &ProofSubmission) -> Result<(), StorageError> {
    write_json(store, SUBMISSION_KEY, submission)
}

pub fn get_proof_footer(store: &dyn KeyValueStore) -> ProofFooterState {
    read_json(store, FOOTER_KEY).unwrap_or_default()
}

pub fn save_proof_footer(store: &dyn KeyValueStore, footer: &ProofFooterState) -> Result<(), StorageError> {
    write_json(store, FOOTER_KEY, footer)
}

/// Shipped needs every checklist item, all three links and all four footer
/// flags. Any history, ticked item or link counts as in progress.
pub fn get_project_status(store: &dyn KeyValueStore) -> ProjectStatus {
    let checklist = get_test_checklist(store);
    let submission = get_proof_submission(store);
    let footer = get_proof_footer(store);

    if checklist.iter().all(|c| *c) && submission.all_links_present() && footer.all_checked() {
        return ProjectStatus::Shipped;
    }

    let any_work = !get_history(store).is_empty()
        || checklist.iter().any(|c| *c)
        || submission.any_link_present();

    if any_work {
        ProjectStatus::InProgress
    } else {
        ProjectStatus::NotStarted
    }
}

/// Shipping unlocks once every test checklist item passes.
pub fn ship_unlocked(store: &dyn KeyValueStore) -> bool {
    get_test_checklist(store).iter().all(|c| *c)
}
