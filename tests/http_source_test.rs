use httpmock::prelude::*;
use superchat_tally::{Currency, FetchSettings, HttpSource, TallyEngine, TallyReport};

const WATCH_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <div id="comments">
    <span id="comment-chip-price">HK$2,000.00</span>
    <span id="comment-chip-price">AU$500</span>
    <span id="comment-chip-price">$3,000.00</span>
    <span id="comment-chip-price">MYR 479.90</span>
    <span id="comment-chip-price">￦79,000</span>
    <span id="comment-chip-price">SGD 19.98</span>
    <span id="comment-chip-price">???</span>
    <span id="comment-chip-price">???</span>
    <span id="comment-chip-price">$0.00</span>
  </div>
</body></html>"#;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[tokio::test]
async fn test_http_source_end_to_end() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/watch").query_param("v", "abc123");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(WATCH_PAGE);
    });

    let source = HttpSource::new(FetchSettings::default()).unwrap();
    let engine = TallyEngine::new(source);

    let report = engine.run(&server.url("/watch?v=abc123")).await;

    page_mock.assert();
    assert_eq!(
        report.ledger.currencies(),
        vec![
            Currency::Hkd,
            Currency::Aud,
            Currency::Twd,
            Currency::Myr,
            Currency::Krw,
            Currency::Sgd,
        ]
    );
    assert_close(report.ledger.total(Currency::Hkd), 2000.0);
    assert_close(report.ledger.total(Currency::Aud), 500.0);
    assert_close(report.ledger.total(Currency::Twd), 3000.0);
    assert_close(report.ledger.total(Currency::Myr), 479.9);
    assert_close(report.ledger.total(Currency::Krw), 79000.0);
    assert_close(report.ledger.total(Currency::Sgd), 19.98);
    assert_eq!(report.unknown, vec!["???"]);
    assert_eq!(report.stats.fragments, 9);
}

#[tokio::test]
async fn test_http_error_status_yields_empty_report() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/watch");
        then.status(503);
    });

    let source = HttpSource::new(FetchSettings::default()).unwrap();
    let engine = TallyEngine::new(source);

    let report = engine.run(&server.url("/watch")).await;

    page_mock.assert();
    assert_eq!(report, TallyReport::empty());
}

#[tokio::test]
async fn test_slow_page_times_out_to_empty_report() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .delay(std::time::Duration::from_secs(3))
            .body(WATCH_PAGE);
    });

    let settings = FetchSettings {
        load_timeout_secs: 1,
        ..FetchSettings::default()
    };
    let engine = TallyEngine::new(HttpSource::new(settings).unwrap());

    let report = engine.run(&server.url("/slow")).await;

    assert!(report.ledger.is_empty());
    assert!(report.unknown.is_empty());
}

#[tokio::test]
async fn test_page_without_chips_is_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/quiet");
        then.status(200).body("<html><body><p>No super chats</p></body></html>");
    });

    let engine = TallyEngine::new(HttpSource::new(FetchSettings::default()).unwrap());
    let report = engine.run(&server.url("/quiet")).await;

    assert_eq!(report, TallyReport::empty());
}
