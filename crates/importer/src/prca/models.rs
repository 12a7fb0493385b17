use serde::{Deserialize, Serialize};

/// Status label used on the PRCA results listing
pub const STATUS_COMPLETED: &str = "Completed";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RodeoResultsRecord {
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Date range as published, e.g. "July 19-28, 2024"
    pub date: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, alias = "resultsUrl", skip_serializing_if = "Option::is_none")]
    pub results_url: Option<String>,
    #[serde(default)]
    pub categories: Vec<CategoryResults>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResults {
    /// Event category, e.g. "Bull Riding"
    pub name: String,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Round label, e.g. "First round", "2nd Performance", "Finals"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(default, alias = "membershipId", skip_serializing_if = "Option::is_none")]
    pub membership_id: Option<String>,
    /// Score text, e.g. "87.5 points", "7.4 seconds", "8.1"
    pub score: String,
}

fn default_status() -> String {
    "Unknown".to_string()
}

impl RodeoResultsRecord {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}
