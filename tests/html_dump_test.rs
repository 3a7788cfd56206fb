use anyhow::Result;
use superchat_tally::utils::report::{render, OutputFormat};
use superchat_tally::{Currency, HtmlDumpSource, TallyEngine};
use tempfile::TempDir;

const SAVED_PAGE: &str = r#"<html><body>
<ytd-comments>
  <span id="comment-chip-price" class="style-scope ytd-comment-renderer">
    NT$1,000.00
  </span>
  <span id="comment-chip-price">¥500</span>
  <span id="comment-chip-price">￦¥1,000</span>
  <span id="comment-chip-price">€4.99</span>
  <span id="comment-chip-price">£2.00</span>
  <span id="comment-chip-price">US$5.00</span>
  <span id="comment-chip-price">$150.00</span>
  <span id="comment-chip-price">₹199.00</span>
</ytd-comments>
</body></html>"#;

#[tokio::test]
async fn test_saved_page_is_tallied() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let page_path = temp_dir.path().join("watch.html");
    tokio::fs::write(&page_path, SAVED_PAGE).await?;

    let engine = TallyEngine::new(HtmlDumpSource::new("span#comment-chip-price"));
    let report = engine.run(page_path.to_str().unwrap()).await;

    assert_eq!(
        report.ledger.currencies(),
        vec![
            Currency::Twd,
            Currency::Jpy,
            Currency::Krw,
            Currency::Eur,
            Currency::Gbp,
            Currency::Usd,
        ]
    );
    assert_eq!(report.ledger.total(Currency::Twd), 1150.0);
    assert_eq!(report.ledger.total(Currency::Jpy), 500.0);
    assert_eq!(report.ledger.total(Currency::Krw), 1000.0);
    assert_eq!(report.unknown, vec!["₹199.00"]);

    let text = render(&report, engine.monitor().elapsed(), OutputFormat::Text)?;
    assert!(text.contains("   TWD: 1150.00\n"));
    assert!(text.contains("   ₹199.00\n"));

    Ok(())
}

#[tokio::test]
async fn test_missing_dump_degrades_to_empty_report() {
    let engine = TallyEngine::new(HtmlDumpSource::new("span#comment-chip-price"));
    let report = engine.run("/definitely/not/a/saved/page.html").await;

    assert!(report.ledger.is_empty());
    assert!(report.all_recognized());
}

#[tokio::test]
async fn test_repeated_runs_do_not_accumulate_unknowns() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let first = temp_dir.path().join("first.html");
    let second = temp_dir.path().join("second.html");
    tokio::fs::write(
        &first,
        r#"<span id="comment-chip-price">???</span><span id="comment-chip-price">???</span>"#,
    )
    .await?;
    tokio::fs::write(&second, r#"<span id="comment-chip-price">US$1.00</span>"#).await?;

    let engine = TallyEngine::new(HtmlDumpSource::new("span#comment-chip-price"));

    let report = engine.run(first.to_str().unwrap()).await;
    assert_eq!(report.unknown, vec!["???"]);

    let report = engine.run(second.to_str().unwrap()).await;
    assert!(report.unknown.is_empty());
    assert_eq!(report.ledger.total(Currency::Usd), 1.0);

    Ok(())
}
