use crate::config::{FetchSettings, SourceKind, TomlConfig, DEFAULT_TARGET_URL};
use crate::utils::error::Result;
use crate::utils::report::OutputFormat;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "superchat-tally")]
#[command(about = "Tally Super Chat donations shown in a video's comment section, per currency")]
pub struct CliConfig {
    /// Video page URL, or an HTML file path with --source file
    pub target: Option<String>,

    /// Where fragments come from
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// WebDriver endpoint (e.g. a running chromedriver)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headed: bool,

    /// Seconds to wait for the page to load
    #[arg(long)]
    pub load_timeout: Option<u64>,

    /// Number of scroll-to-end key presses
    #[arg(long)]
    pub scroll_count: Option<u32>,

    /// Seconds to wait after each scroll
    #[arg(long)]
    pub scroll_delay: Option<u64>,

    /// CSS selector of the donation amount chips
    #[arg(long)]
    pub selector: Option<String>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log CPU/memory usage per phase
    #[arg(long)]
    pub monitor: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// CLI flags merged over the optional file and the built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub target: String,
    pub source: SourceKind,
    pub fetch: FetchSettings,
    pub format: OutputFormat,
    pub monitor: bool,
}

impl CliConfig {
    pub fn load_file(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }

    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = self.load_file()?;
        Ok(self.merge(&file))
    }

    pub fn merge(&self, file: &TomlConfig) -> ResolvedConfig {
        let mut fetch = file.fetch_settings();

        if let Some(url) = &self.webdriver_url {
            fetch.webdriver_url = url.clone();
        }
        if self.headed {
            fetch.headless = false;
        }
        if let Some(secs) = self.load_timeout {
            fetch.load_timeout_secs = secs;
        }
        if let Some(count) = self.scroll_count {
            fetch.scroll_count = count;
        }
        if let Some(secs) = self.scroll_delay {
            fetch.scroll_delay_secs = secs;
        }
        if let Some(selector) = &self.selector {
            fetch.selector = selector.clone();
        }

        ResolvedConfig {
            target: self
                .target
                .clone()
                .or_else(|| file.target().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_TARGET_URL.to_string()),
            source: self.source.or(file.source_kind()).unwrap_or_default(),
            fetch,
            format: self.format.or(file.output_format()).unwrap_or_default(),
            monitor: self.monitor || file.monitoring_enabled(),
        }
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        self.fetch.validate()?;
        if self.source != SourceKind::File {
            validate_url("target", &self.target)?;
        }
        Ok(())
    }
}
