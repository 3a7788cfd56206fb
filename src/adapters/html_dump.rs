use crate::adapters::markup::extract_fragments;
use crate::core::{FragmentSource, RawFragment};
use crate::utils::error::{Result, TallyError};
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

/// Reads a page saved to disk (e.g. "Save page as" after scrolling by hand).
#[derive(Debug, Clone)]
pub struct HtmlDumpSource {
    selector: String,
}

impl HtmlDumpSource {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    /// Accepts a plain path or a `file://` URL.
    pub fn resolve_path(target: &str) -> Result<PathBuf> {
        if !target.starts_with("file:") {
            return Ok(PathBuf::from(target));
        }

        Url::parse(target)
            .ok()
            .and_then(|url| url.to_file_path().ok())
            .ok_or_else(|| TallyError::SourceError {
                message: format!("Not a local file URL: {}", target),
            })
    }
}

#[async_trait]
impl FragmentSource for HtmlDumpSource {
    async fn fetch_fragments(&self, target: &str) -> Result<Vec<RawFragment>> {
        let path = Self::resolve_path(target)?;
        tracing::debug!("📄 Reading saved page from {}", path.display());

        let html = tokio::fs::read_to_string(&path).await?;
        extract_fragments(&html, &self.selector)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
