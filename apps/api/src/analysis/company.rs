use serde::{Deserialize, Serialize};

/// Employer size bucket. Drives which interview-round template is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[default]
    Startup,
    #[serde(rename = "Mid-size")]
    MidSize,
    Enterprise,
}

impl CompanySize {
    pub fn as_str(self) -> &'static str {
        match self {
            CompanySize::Startup => "Startup",
            CompanySize::MidSize => "Mid-size",
            CompanySize::Enterprise => "Enterprise",
        }
    }
}

const ENTERPRISES: &[&str] = &[
    "amazon",
    "google",
    "microsoft",
    "meta",
    "apple",
    "netflix",
    "infosys",
    "tcs",
    "wipro",
    "hcl",
    "cognizant",
    "accenture",
    "deloitte",
    "ibm",
    "oracle",
    "salesforce",
    "adobe",
    "uber",
    "flipkart",
    "walmart",
    "goldman sachs",
    "jp morgan",
    "morgan stanley",
    "paypal",
    "cisco",
    "intel",
    "qualcomm",
    "samsung",
];

const MID_SIZE: &[&str] = &[
    "razorpay", "cred", "swiggy", "zomato", "paytm", "phonepe", "dream11", "meesho", "groww",
    "slice", "jupiter", "lenskart", "nykaa", "byju",
];

/// Industry groups, first match wins.
const INDUSTRIES: &[(&str, &[&str])] = &[
    (
        "Financial Services",
        &["goldman", "jp morgan", "morgan stanley", "paypal", "razorpay", "groww", "slice"],
    ),
    ("Food & Delivery", &["swiggy", "zomato"]),
    (
        "E-Commerce",
        &["flipkart", "amazon", "walmart", "meesho", "nykaa", "lenskart"],
    ),
];

const DEFAULT_INDUSTRY: &str = "Technology Services";

fn mentions_any(haystack: &str, names: &[&str]) -> bool {
    names.iter().any(|name| haystack.contains(name))
}

/// Classifies a company by name. Enterprise is checked before Mid-size;
/// blank or unknown names are treated as startups.
pub fn get_company_size(company: &str) -> CompanySize {
    let lower = company.trim().to_lowercase();
    if lower.is_empty() {
        return CompanySize::Startup;
    }
    if mentions_any(&lower, ENTERPRISES) {
        CompanySize::Enterprise
    } else if mentions_any(&lower, MID_SIZE) {
        CompanySize::MidSize
    } else {
        CompanySize::Startup
    }
}

pub fn get_industry(company: &str) -> &'static str {
    let lower = company.to_lowercase();
    INDUSTRIES
        .iter()
        .find(|(_, names)| mentions_any(&lower, names))
        .map(|(industry, _)| *industry)
        .unwrap_or(DEFAULT_INDUSTRY)
}
