pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::{ClientSeedPipeline, StylesheetPipeline};
pub use config::{cli::LocalStorage, ClientSeedJob, StylesheetJob};
pub use crate::core::{etl::EtlEngine, stylesheet::StylesheetMerger};
pub use utils::error::{EtlError, Result};
