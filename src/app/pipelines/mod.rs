pub mod client_seed_pipeline;
pub mod stylesheet_pipeline;

pub use client_seed_pipeline::ClientSeedPipeline;
pub use stylesheet_pipeline::StylesheetPipeline;
