#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_selector, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TARGET_URL: &str = "https://www.youtube.com/watch?v=kOZWQgtqps4";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_SELECTOR: &str = "span#comment-chip-price";

/// Where fragments come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// 透過 WebDriver 操作瀏覽器，捲動載入留言
    #[default]
    Webdriver,
    /// 單次 HTTP GET，直接解析回傳的 HTML
    Http,
    /// 讀取已存檔的 HTML
    File,
}

/// Fetch tunables. Defaults reproduce the reference run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchSettings {
    pub webdriver_url: String,
    pub headless: bool,
    pub load_timeout_secs: u64,
    pub scroll_count: u32,
    pub scroll_delay_secs: u64,
    pub selector: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            headless: true,
            load_timeout_secs: 10,
            scroll_count: 15,
            scroll_delay_secs: 3,
            selector: DEFAULT_SELECTOR.to_string(),
        }
    }
}

impl FetchSettings {
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_secs(self.scroll_delay_secs)
    }
}

impl Validate for FetchSettings {
    fn validate(&self) -> Result<()> {
        validate_url("fetch.webdriver_url", &self.webdriver_url)?;
        validate_range("fetch.load_timeout_secs", self.load_timeout_secs, 1, 300)?;
        validate_range("fetch.scroll_count", self.scroll_count, 0, 200)?;
        validate_range("fetch.scroll_delay_secs", self.scroll_delay_secs, 0, 60)?;
        validate_selector("fetch.selector", &self.selector)?;
        Ok(())
    }
}
