use crate::domain::model::{Ledger, TallyReport, TallyStats};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &TallyReport, elapsed: Duration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, elapsed)),
        OutputFormat::Json => render_json(report, elapsed),
    }
}

pub fn render_text(report: &TallyReport, elapsed: Duration) -> String {
    let mut out = String::new();

    if !report.ledger.is_empty() {
        out.push_str("💰 Totals by currency:\n");
        for (currency, total) in report.ledger.iter() {
            let _ = writeln!(out, "   {}: {:.2}", currency, total);
        }
        out.push('\n');
    }

    if report.all_recognized() {
        out.push_str("✅ All currencies recognized, nothing left unknown!\n");
    } else {
        out.push_str("⚠️ Unknown currencies (not totalled):\n");
        for raw in &report.unknown {
            let _ = writeln!(out, "   {}", raw);
        }
    }

    let _ = writeln!(out, "\n⏳ Elapsed: {:.2}s", elapsed.as_secs_f64());
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    totals: &'a Ledger,
    unknown: &'a [String],
    stats: &'a TallyStats,
    elapsed_seconds: f64,
    generated_at: chrono::DateTime<chrono::Utc>,
}

pub fn render_json(report: &TallyReport, elapsed: Duration) -> Result<String> {
    let json = JsonReport {
        totals: &report.ledger,
        unknown: &report.unknown,
        stats: &report.stats,
        // 兩位小數，與文字輸出一致
        elapsed_seconds: (elapsed.as_secs_f64() * 100.0).round() / 100.0,
        generated_at: chrono::Utc::now(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
