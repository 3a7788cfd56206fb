use crate::core::classifier::classify;
use crate::core::normalizer::parse_amount;
use crate::domain::model::{DonationEntry, Ledger, TallyReport, TallyStats};

/// Fold entries into a ledger. Unresolved entries are skipped.
pub fn fold_entries<I>(entries: I) -> Ledger
where
    I: IntoIterator<Item = DonationEntry>,
{
    let mut ledger = Ledger::new();
    for entry in entries {
        if let Some(currency) = entry.currency {
            ledger.add(currency, entry.amount);
        }
    }
    ledger
}

/// Classify and total every fragment of one run.
///
/// Fragments are trimmed and blank ones skipped. Unclassifiable fragments are
/// kept once each, verbatim, in `unknown` and contribute nothing to the
/// ledger. A fresh report is returned on every call.
pub fn tally<I, S>(fragments: I) -> TallyReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: Vec<DonationEntry> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    let mut stats = TallyStats::default();

    for fragment in fragments {
        let raw = fragment.as_ref().trim();
        if raw.is_empty() {
            continue;
        }
        stats.fragments += 1;

        let currency = classify(raw);
        if currency.is_none() {
            stats.unresolved += 1;
            if !unknown.iter().any(|u| u == raw) {
                tracing::debug!("❓ Unrecognized currency in {:?}", raw);
                unknown.push(raw.to_string());
            }
        }

        match parse_amount(raw) {
            Some(amount) => entries.push(DonationEntry { currency, amount }),
            None => {
                tracing::debug!("🗑️ Discarding {:?}: no positive amount", raw);
                stats.discarded += 1;
            }
        }
    }

    stats.aggregated = entries.iter().filter(|e| e.currency.is_some()).count();
    let ledger = fold_entries(entries);

    TallyReport {
        ledger,
        unknown,
        stats,
    }
}
