pub mod aggregator;
pub mod classifier;
pub mod engine;
pub mod normalizer;

pub use crate::domain::model::{Currency, DonationEntry, Ledger, TallyReport, TallyStats};
pub use crate::domain::ports::{FragmentSource, RawFragment};
pub use crate::utils::error::Result;
