pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HtmlDumpSource, HttpSource, WebDriverSource};
pub use config::{FetchSettings, SourceKind, TomlConfig};
pub use core::{aggregator::tally, engine::TallyEngine};
pub use domain::model::{Currency, Ledger, TallyReport};
pub use utils::error::{Result, TallyError};
