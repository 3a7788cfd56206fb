use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Currencies the classifier can resolve a fragment to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Twd,
    Usd,
    Hkd,
    Aud,
    Eur,
    Jpy,
    Krw,
    Gbp,
    Myr,
    Sgd,
}

impl Currency {
    pub const ALL: [Currency; 10] = [
        Currency::Twd,
        Currency::Usd,
        Currency::Hkd,
        Currency::Aud,
        Currency::Eur,
        Currency::Jpy,
        Currency::Krw,
        Currency::Gbp,
        Currency::Myr,
        Currency::Sgd,
    ];

    /// ISO 4217 代碼
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Twd => "TWD",
            Currency::Usd => "USD",
            Currency::Hkd => "HKD",
            Currency::Aud => "AUD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Krw => "KRW",
            Currency::Gbp => "GBP",
            Currency::Myr => "MYR",
            Currency::Sgd => "SGD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One classified fragment. `currency` is `None` when no rule matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationEntry {
    pub currency: Option<Currency>,
    pub amount: f64,
}

/// Per-currency running totals, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    totals: Vec<(Currency, f64)>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加金額；非正數金額不會進帳
    pub fn add(&mut self, currency: Currency, amount: f64) {
        if !(amount.is_finite() && amount > 0.0) {
            return;
        }

        match self.totals.iter_mut().find(|(c, _)| *c == currency) {
            Some((_, total)) => *total += amount,
            None => self.totals.push((currency, amount)),
        }
    }

    /// Total for `currency`, or 0.0 when nothing was recorded.
    pub fn total(&self, currency: Currency) -> f64 {
        self.get(currency).unwrap_or(0.0)
    }

    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.totals
            .iter()
            .find(|(c, _)| *c == currency)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.totals.iter().copied()
    }

    pub fn currencies(&self) -> Vec<Currency> {
        self.totals.iter().map(|(c, _)| *c).collect()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl Serialize for Ledger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.totals.len()))?;
        for (currency, total) in &self.totals {
            map.serialize_entry(currency.code(), total)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TallyStats {
    /// Non-empty fragments that went through classification
    pub fragments: usize,
    /// Entries folded into the ledger
    pub aggregated: usize,
    /// Fragments whose amount was missing, malformed or zero
    pub discarded: usize,
    /// Fragments no currency rule matched
    pub unresolved: usize,
}

/// Result of one extraction run. Built fresh every run, never reused.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TallyReport {
    #[serde(rename = "totals")]
    pub ledger: Ledger,
    pub unknown: Vec<String>,
    pub stats: TallyStats,
}

impl TallyReport {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all_recognized(&self) -> bool {
        self.unknown.is_empty()
    }
}
