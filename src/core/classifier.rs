//! Currency detection for raw donation fragments.
//!
//! Markers overlap (several currencies use `$`, `¥` and `￦` look alike), so
//! the rules are tried in a fixed order and the first match wins.

use crate::domain::model::Currency;

/// Currency assumed for a bare `$` with no qualifying prefix.
pub const LOCAL_CURRENCY: Currency = Currency::Twd;

const BARE_SYMBOL: char = '$';

#[derive(Debug, Clone, Copy)]
enum Marker {
    /// Any of the tokens appears anywhere in the text
    AnyOf(&'static [&'static str]),
    /// `token` appears and the text does not start with `unless_leading`
    ContainsUnlessLeading {
        token: &'static str,
        unless_leading: &'static str,
    },
}

impl Marker {
    fn matches(&self, text: &str) -> bool {
        match *self {
            Marker::AnyOf(tokens) => tokens.iter().any(|t| text.contains(t)),
            Marker::ContainsUnlessLeading {
                token,
                unless_leading,
            } => text.contains(token) && !text.starts_with(unless_leading),
        }
    }
}

const RULES: [(Marker, Currency); 10] = [
    (Marker::AnyOf(&["NT$", "TWD"]), Currency::Twd),
    (Marker::AnyOf(&["US$"]), Currency::Usd),
    (Marker::AnyOf(&["HK$"]), Currency::Hkd),
    (Marker::AnyOf(&["AU$"]), Currency::Aud),
    (Marker::AnyOf(&["€"]), Currency::Eur),
    (
        Marker::ContainsUnlessLeading {
            token: "¥",
            unless_leading: "￦",
        },
        Currency::Jpy,
    ),
    (Marker::AnyOf(&["￦"]), Currency::Krw),
    (Marker::AnyOf(&["£"]), Currency::Gbp),
    (Marker::AnyOf(&["MYR"]), Currency::Myr),
    (Marker::AnyOf(&["SGD"]), Currency::Sgd),
];

/// Resolve the currency of one fragment, or `None` when nothing matches.
pub fn classify(text: &str) -> Option<Currency> {
    RULES
        .iter()
        .find(|(marker, _)| marker.matches(text))
        .map(|(_, currency)| *currency)
        .or_else(|| text.starts_with(BARE_SYMBOL).then_some(LOCAL_CURRENCY))
}
