pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{AnySource, CommandReloader, CommandSource, FileSource, JinjaRenderer};
pub use crate::config::cli::LocalStorage;
pub use crate::config::settings::ImporterSettings;
pub use crate::core::etl::{ImportEngine, RunSummary};
pub use crate::core::listing::{parse_listing, ListingParser, ParsedListing};
pub use crate::core::merge::merge_attributes;
pub use crate::core::pipeline::ImportPipeline;
pub use crate::domain::model::{AttributeOverrideMap, Attributes, Binding, ParseReport, Site};
pub use crate::utils::error::{EtlError, Result};
