use crate::utils::error::Result;
use async_trait::async_trait;

/// One raw donation-amount text as found in the page. No structure guaranteed.
pub type RawFragment = String;

/// Anything that can turn a target (URL or saved document) into the raw
/// donation-amount fragments it shows, in discovery order.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    async fn fetch_fragments(&self, target: &str) -> Result<Vec<RawFragment>>;

    /// 用於日誌的來源名稱
    fn name(&self) -> &'static str;
}
