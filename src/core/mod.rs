pub mod client_seed;
pub mod etl;
pub mod stylesheet;

pub use crate::domain::model::{
    ClientSeed, ColorTokenMap, MergeReport, MergedStylesheet, SeedBatch, SpreadsheetRow,
    StylesheetSources,
};
pub use crate::domain::ports::{ClientSeedSettings, Pipeline, Storage, StylesheetSettings};
pub use crate::utils::error::Result;
