use std::collections::BTreeMap;

use reqwest::Url;

use crate::models::proof::ProofSubmission;

pub const REQUIRED: &str = "Required";
pub const INVALID_URL: &str = "Invalid URL";

/// Per-field validation messages keyed by the camelCase field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

fn check(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.insert(field, REQUIRED);
    } else if !is_valid_url(value) {
        errors.insert(field, INVALID_URL);
    }
}

/// Every link must be present and parse as an absolute URL.
pub fn validate_submission(submission: &ProofSubmission) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check(&mut errors, "lovableLink", &submission.lovable_link);
    check(&mut errors, "githubLink", &submission.github_link);
    check(&mut errors, "deployedLink", &submission.deployed_link);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

const RULE: &str = "------------------------------------------";

/// Final submission block for the clipboard. Call after `validate_submission`.
pub fn submission_text(submission: &ProofSubmission) -> String {
    format!(
        "{RULE}
Placement Readiness Platform — Final Submission

Lovable Project: {}
GitHub Repository: {}
Live Deployment: {}

Core Capabilities:
- JD skill extraction (deterministic)
- Round mapping engine
- 7-day prep plan
- Interactive readiness scoring
- History persistence
{RULE}",
        submission.lovable_link, submission.github_link, submission.deployed_link
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(lovable: &str, github: &str, deployed: &str) -> ProofSubmission {
        ProofSubmission {
            lovable_link: lovable.to_string(),
            github_link: github.to_string(),
            deployed_link: deployed.to_string(),
        }
    }

    #[test]
    fn test_url_syntax() {
        assert!(is_valid_url("https://github.com/me/repo"));
        assert!(is_valid_url("http://localhost:5173"));
        assert!(!is_valid_url("github.com/me/repo"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_all_valid_passes() {
        let sub = submission("https://lovable.dev/p/1", "https://github.com/a/b", "https://a.app");
        assert!(validate_submission(&sub).is_ok());
    }

    #[test]
    fn test_per_field_messages() {
        let sub = submission("", "github.com/a/b", "https://a.app");
        let errors = validate_submission(&sub).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["lovableLink"], REQUIRED);
        assert_eq!(errors["githubLink"], INVALID_URL);
        assert!(!errors.contains_key("deployedLink"));
    }

    #[test]
    fn test_submission_text_layout() {
        let sub = submission("https://l.dev/x", "https://github.com/a/b", "https://a.app");
        let text = submission_text(&sub);
        assert!(text.starts_with(RULE));
        assert!(text.ends_with(RULE));
        assert!(text.contains("\nGitHub Repository: https://github.com/a/b\n"));
        assert!(text.contains("\n- History persistence\n"));
    }
}
