use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Client, Result};

/// A label on the repository
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,

    /// Six hex digits, without the leading `#`
    #[serde(default)]
    pub color: String,
}

#[derive(Serialize)]
struct NewLabel<'a> {
    name: &'a str,
    color: &'a str,
}

impl Client {
    /// Get every label defined on the repository
    pub fn get_labels(&self) -> Result<Vec<Label>> {
        self.get_all("labels", &[])
    }

    /// Create a label with the given name and colour
    pub fn create_label(&self, name: &str, color: &str) -> Result<Label> {
        debug!("creating label {:?} ({})", name, color);
        let resp = self
            .authed(self.http.post(self.repo_url("labels")))
            .json(&NewLabel { name, color })
            .send()?
            .error_for_status()?;

        Ok(resp.json()?)
    }
}
