use serde::{Deserialize, Serialize};

/// Number of items on the manual pre-ship test checklist.
pub const TEST_CHECKLIST_LEN: usize = 10;

/// Links submitted as proof of a shipped build. Empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProofSubmission {
    pub lovable_link: String,
    pub github_link: String,
    pub deployed_link: String,
}

impl ProofSubmission {
    pub fn all_links_present(&self) -> bool {
        !self.lovable_link.is_empty() && !self.github_link.is_empty() && !self.deployed_link.is_empty()
    }

    pub fn any_link_present(&self) -> bool {
        !self.lovable_link.is_empty() || !self.github_link.is_empty() || !self.deployed_link.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProofFooterState {
    pub ui_built: bool,
    pub logic_working: bool,
    pub test_passed: bool,
    pub deployed: bool,
}

impl ProofFooterState {
    pub fn all_checked(&self) -> bool {
        self.ui_built && self.logic_working && self.test_passed && self.deployed
    }
}

/// Derived build status shown in the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Shipped,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Shipped => "Shipped",
        }
    }
}
