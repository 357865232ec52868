use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

/// Id of the `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub organization: String,
    pub tagline: String,
    pub contact_email: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            organization: "Veera Foundation".to_string(),
            tagline: "Brave hearts, helping hands.".to_string(),
            contact_email: "hello@veerafoundation.org".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log_level {0:?}")]
    LogLevel(String),
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(json)?;
        cfg.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(cfg.log_level.clone()))?;
        Ok(cfg)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Reads the embedded config block. A missing block is normal; a broken
    /// one is logged and replaced by defaults.
    pub fn load() -> Self {
        let Some(json) = config_json_from_dom() else {
            log::debug!("no #{CONFIG_ELEMENT_ID} block, using defaults");
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

fn config_json_from_dom() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content().filter(|s| !s.trim().is_empty())
}
