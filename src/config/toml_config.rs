use crate::config::{FetchSettings, SourceKind};
use crate::utils::error::{Result, TallyError};
use crate::utils::report::OutputFormat;
use crate::utils::validation::{validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every key may be omitted; CLI flags win over
/// anything set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub fetch: Option<FetchConfig>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub kind: Option<SourceKind>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    pub webdriver_url: Option<String>,
    pub headless: Option<bool>,
    pub load_timeout_secs: Option<u64>,
    pub scroll_count: Option<u32>,
    pub scroll_delay_secs: Option<u64>,
    pub selector: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TallyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WEBDRIVER_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            TallyError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 將檔案中的 fetch 設定覆寫到 settings
    pub fn apply_to(&self, settings: &mut FetchSettings) {
        let Some(fetch) = &self.fetch else {
            return;
        };

        if let Some(url) = &fetch.webdriver_url {
            settings.webdriver_url = url.clone();
        }
        if let Some(headless) = fetch.headless {
            settings.headless = headless;
        }
        if let Some(secs) = fetch.load_timeout_secs {
            settings.load_timeout_secs = secs;
        }
        if let Some(count) = fetch.scroll_count {
            settings.scroll_count = count;
        }
        if let Some(secs) = fetch.scroll_delay_secs {
            settings.scroll_delay_secs = secs;
        }
        if let Some(selector) = &fetch.selector {
            settings.selector = selector.clone();
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        let mut settings = FetchSettings::default();
        self.apply_to(&mut settings);
        settings
    }

    pub fn source_kind(&self) -> Option<SourceKind> {
        self.source.as_ref().and_then(|s| s.kind)
    }

    pub fn target(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.target.as_deref())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.fetch_settings().validate()?;

        if let Some(target) = self.target() {
            if self.source_kind().unwrap_or_default() != SourceKind::File {
                validate_url("source.target", target)?;
            }
        }
        Ok(())
    }
}
