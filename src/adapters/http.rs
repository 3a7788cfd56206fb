use crate::adapters::markup::extract_fragments;
use crate::config::FetchSettings;
use crate::core::{FragmentSource, RawFragment};
use crate::utils::error::{Result, TallyError};
use async_trait::async_trait;
use reqwest::Client;

/// Single GET of the page, parsed as served. Only useful where the chips are
/// in the initial markup; no scrolling happens.
pub struct HttpSource {
    client: Client,
    settings: FetchSettings,
}

impl HttpSource {
    pub fn new(settings: FetchSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.load_timeout())
            .user_agent(concat!("superchat-tally/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, settings })
    }
}

#[async_trait]
impl FragmentSource for HttpSource {
    async fn fetch_fragments(&self, target: &str) -> Result<Vec<RawFragment>> {
        tracing::debug!("Making HTTP request to: {}", target);

        let response = match self.client.get(target).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!(
                    "❌ Page did not load within {}s, treating as empty",
                    self.settings.load_timeout_secs
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("HTTP response status: {}", response.status());
        if !response.status().is_success() {
            return Err(TallyError::SourceError {
                message: format!("{} returned status {}", target, response.status()),
            });
        }

        let html = response.text().await?;
        extract_fragments(&html, &self.settings.selector)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
