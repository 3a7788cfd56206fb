use crate::core::aggregator::tally;
use crate::core::FragmentSource;
use crate::domain::model::TallyReport;
use crate::utils::monitor::RunMonitor;

pub struct TallyEngine<S: FragmentSource> {
    source: S,
    monitor: RunMonitor,
}

impl<S: FragmentSource> TallyEngine<S> {
    pub fn new(source: S) -> Self {
        Self::new_with_monitoring(source, false)
    }

    pub fn new_with_monitoring(source: S, monitor_enabled: bool) -> Self {
        Self {
            source,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub fn monitor(&self) -> &RunMonitor {
        &self.monitor
    }

    /// Fetch and tally one target.
    ///
    /// Never fails: a fetch or extraction error is logged and the run carries
    /// on with no fragments, giving an empty report.
    pub async fn run(&self, target: &str) -> TallyReport {
        tracing::info!("🔎 Fetching donation fragments via {} source", self.source.name());
        tracing::debug!("Target: {}", target);

        let fragments = match self.source.fetch_fragments(target).await {
            Ok(fragments) => fragments,
            Err(e) => {
                tracing::error!(
                    "❌ Failed to extract donation amounts: {} (Category: {:?})",
                    e,
                    e.category()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                Vec::new()
            }
        };
        self.monitor.log_phase("Fetch");

        if fragments.is_empty() {
            tracing::warn!("⚠️ No donation amounts found");
        } else {
            tracing::info!("📥 Collected {} fragments", fragments.len());
        }

        let report = tally(&fragments);
        self.monitor.log_phase("Tally");

        tracing::info!(
            "✅ {} currencies totalled, {} entries aggregated, {} unknown",
            report.ledger.len(),
            report.stats.aggregated,
            report.unknown.len()
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawFragment;
    use crate::domain::model::Currency;
    use crate::utils::error::{Result, TallyError};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Hands out one scripted response per call.
    #[derive(Clone)]
    struct MockSource {
        responses: Arc<Mutex<VecDeque<Result<Vec<RawFragment>>>>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockSource {
        fn new(responses: Vec<Result<Vec<RawFragment>>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into())),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn fragments(texts: &[&str]) -> Result<Vec<RawFragment>> {
            Ok(texts.iter().map(|t| t.to_string()).collect())
        }
    }

    #[async_trait]
    impl FragmentSource for MockSource {
        async fn fetch_fragments(&self, target: &str) -> Result<Vec<RawFragment>> {
            self.calls.lock().await.push(target.to_string());
            self.responses
                .lock()
                .await
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_run_tallies_fetched_fragments() {
        let source = MockSource::new(vec![MockSource::fragments(&[
            "HK$2,000.00",
            "AU$500",
            "???",
        ])]);
        let calls = source.calls.clone();
        let engine = TallyEngine::new(source);

        let report = engine.run("https://www.youtube.com/watch?v=test").await;

        assert_eq!(report.ledger.currencies(), vec![Currency::Hkd, Currency::Aud]);
        assert_eq!(report.unknown, vec!["???"]);
        assert_eq!(
            *calls.lock().await,
            vec!["https://www.youtube.com/watch?v=test".to_string()]
        );
    }

    #[tokio::test]
    async fn test_source_failure_degrades_to_empty_report() {
        let source = MockSource::new(vec![Err(TallyError::SourceError {
            message: "markup query failed".to_string(),
        })]);
        let engine = TallyEngine::new_with_monitoring(source, false);

        let report = engine.run("https://example.com").await;

        assert_eq!(report, TallyReport::empty());
    }

    #[tokio::test]
    async fn test_unknown_list_is_reset_between_runs() {
        let source = MockSource::new(vec![
            MockSource::fragments(&["???", "₹10"]),
            MockSource::fragments(&["CA$5", "US$1"]),
        ]);
        let engine = TallyEngine::new(source);

        let first = engine.run("https://example.com/a").await;
        let second = engine.run("https://example.com/b").await;

        assert_eq!(first.unknown, vec!["???", "₹10"]);
        assert_eq!(second.unknown, vec!["CA$5"]);
        assert_eq!(second.ledger.currencies(), vec![Currency::Usd]);
        assert!(first.ledger.is_empty());
    }
}
