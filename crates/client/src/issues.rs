use log::debug;
use serde::{Deserialize, Serialize};

use crate::{labels::Label, Client, Result};

/// An issue, as returned by the issues endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,

    /// Free-text body. GitHub sends `null` for issues created without one.
    pub body: Option<String>,

    #[serde(default)]
    pub labels: Vec<Label>,

    /// Present only when this "issue" is really a pull request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    /// The body text, or the empty string if there isn't one
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

impl Client {
    /// Get all open issues in the repository, excluding pull requests
    pub fn get_issues(&self) -> Result<Vec<Issue>> {
        let all: Vec<Issue> = self.get_all("issues", &[("state", "open".to_string())])?;
        let total = all.len();
        let issues: Vec<_> = all.into_iter().filter(|i| !i.is_pull_request()).collect();
        debug!(
            "fetched {} open issues ({} pull requests skipped)",
            issues.len(),
            total - issues.len()
        );

        Ok(issues)
    }
}
