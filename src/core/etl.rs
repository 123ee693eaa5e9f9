use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting {} run", self.pipeline.name());

        tracing::debug!("Extracting...");
        let extracted = self.pipeline.extract().await?;

        tracing::debug!("Transforming...");
        let transformed = self.pipeline.transform(extracted).await?;

        tracing::debug!("Loading...");
        let output_path = self.pipeline.load(transformed).await?;

        tracing::info!(
            "{} finished in {:?}, output: {}",
            self.pipeline.name(),
            started.elapsed(),
            output_path
        );
        Ok(output_path)
    }

    /// 只跑 extract 與 transform，不寫入任何檔案
    pub async fn dry_run(&self) -> Result<P::Transformed> {
        tracing::info!("Dry run of {}, nothing will be written", self.pipeline.name());
        let extracted = self.pipeline.extract().await?;
        self.pipeline.transform(extracted).await
    }
}
