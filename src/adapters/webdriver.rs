//! Browser-backed fragment source.
//!
//! Talks to an already running WebDriver server (chromedriver by default).
//! Comments load lazily, so the page is scrolled a fixed number of times
//! with a fixed pause before the amount chips are read.

use crate::config::FetchSettings;
use crate::core::{FragmentSource, RawFragment};
use crate::utils::error::Result;
use async_trait::async_trait;
use fantoccini::error::{CmdError, ErrorStatus};
use fantoccini::key::Key;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;

pub struct WebDriverSource {
    settings: FetchSettings,
}

/// The End key as a WebDriver keystroke.
pub fn end_key() -> String {
    char::from(Key::End).to_string()
}

/// Navigation and element waits both report running out of time as a timeout.
pub fn is_timeout(error: &CmdError) -> bool {
    match error {
        CmdError::WaitTimeout => true,
        CmdError::Standard(wd) => matches!(wd.error, ErrorStatus::Timeout),
        _ => false,
    }
}

impl WebDriverSource {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    pub fn capabilities(&self) -> Capabilities {
        let mut args = Vec::new();
        if self.settings.headless {
            args.push("--headless");
        }
        args.extend(["--no-sandbox", "--disable-dev-shm-usage"]);

        let mut caps = Capabilities::new();
        caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
        // 不設定的話 driver 預設 page load 可等上 300 秒
        caps.insert(
            "timeouts".to_string(),
            json!({ "pageLoad": self.settings.load_timeout_secs.saturating_mul(1000) }),
        );
        caps
    }

    async fn connect(&self) -> Result<Client> {
        tracing::debug!("🌐 Connecting to WebDriver at {}", self.settings.webdriver_url);
        let client = ClientBuilder::native()
            .capabilities(self.capabilities())
            .connect(&self.settings.webdriver_url)
            .await?;
        Ok(client)
    }

    /// `false` when the document did not show up within the load timeout.
    async fn wait_for_load(&self, client: &Client) -> Result<bool> {
        let waited = client
            .wait()
            .at_most(self.settings.load_timeout())
            .for_element(Locator::Css("body"))
            .await;

        match waited {
            Ok(_) => Ok(true),
            Err(e) if is_timeout(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn scroll_to_end(&self, client: &Client) -> Result<()> {
        let end = end_key();
        let count = self.settings.scroll_count;

        for step in 1..=count {
            let body = client.find(Locator::Css("body")).await?;
            body.send_keys(&end).await?;
            tracing::debug!("⬇️ Scroll {}/{}", step, count);
            tokio::time::sleep(self.settings.scroll_delay()).await;
        }
        Ok(())
    }

    /// `false` when navigation hit the session page-load timeout.
    async fn navigate(&self, client: &Client, target: &str) -> Result<bool> {
        match client.goto(target).await {
            Ok(()) => Ok(true),
            Err(e) if is_timeout(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn collect(&self, client: &Client, target: &str) -> Result<Vec<RawFragment>> {
        let loaded = self.navigate(client, target).await? && self.wait_for_load(client).await?;
        if !loaded {
            tracing::warn!(
                "❌ Page did not load within {}s, treating as empty",
                self.settings.load_timeout_secs
            );
            return Ok(Vec::new());
        }

        self.scroll_to_end(client).await?;

        let chips = client
            .find_all(Locator::Css(&self.settings.selector))
            .await?;

        let mut fragments = Vec::with_capacity(chips.len());
        for chip in chips {
            let text = chip.text().await?;
            let text = text.trim();
            if !text.is_empty() {
                fragments.push(text.to_string());
            }
        }
        Ok(fragments)
    }
}

#[async_trait]
impl FragmentSource for WebDriverSource {
    async fn fetch_fragments(&self, target: &str) -> Result<Vec<RawFragment>> {
        let client = self.connect().await?;

        let result = self.collect(&client, target).await;

        // session 必須在所有路徑上關閉，否則會留下瀏覽器程序
        match client.close().await {
            Ok(()) => tracing::debug!("WebDriver session closed"),
            Err(e) => tracing::warn!("⚠️ Failed to close WebDriver session: {}", e),
        }

        result
    }

    fn name(&self) -> &'static str {
        "webdriver"
    }
}
