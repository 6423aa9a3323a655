use std::{env, fs::File, io::Read};

use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;
use fmcourses_client::Token;
use log::debug;
use serde::Deserialize;
use xdg::BaseDirectories;

pub const DEFAULT_REPOSITORY: &str = "fme-teaching/fm-courses";
pub const DEFAULT_OUTPUT: &str = "fme-courses-github.js";
pub const DEFAULT_COUNTRIES: &str = "country.json";

/// Environment variable that overrides the configured token
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Access token for the tracker. Labels need write permission.
    pub token: Option<Token>,

    /// Repository holding the course issues, as `owner/name`
    pub repository: String,

    /// Print contact emails to stdout as they're stripped
    pub print_emails: bool,

    /// Where to write the generated script
    pub output: Utf8PathBuf,

    /// Country list used when seeding labels
    pub countries: Utf8PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            repository: DEFAULT_REPOSITORY.to_string(),
            print_emails: false,
            output: DEFAULT_OUTPUT.into(),
            countries: DEFAULT_COUNTRIES.into(),
        }
    }
}

impl Config {
    /// Load the config file if there is one, then apply environment overrides
    pub fn load() -> Result<Self> {
        let path = BaseDirectories::with_prefix("fm-courses")?.find_config_file("config.json");

        let mut config = match path {
            Some(path) => {
                debug!("loading config from {}", path.display());
                let file = File::open(&path).context("error opening config file")?;
                Self::from_reader(file)?
            }
            None => {
                debug!("no config file, using defaults");
                Self::default()
            }
        };

        if let Ok(token) = env::var(TOKEN_VAR) {
            config.token = Some(token.into());
        }

        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("error deserialising config file")
    }

    pub fn token(&self) -> Result<Token> {
        self.token.clone().ok_or_else(|| {
            anyhow!(
                "no access token: set `token` in the config file or {}",
                TOKEN_VAR
            )
        })
    }
}
