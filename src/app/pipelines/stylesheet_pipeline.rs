use crate::core::stylesheet::StylesheetMerger;
use crate::core::{MergedStylesheet, Pipeline, Storage, StylesheetSettings, StylesheetSources};
use crate::utils::error::{EtlError, Result};

/// 讀取 theme 與 design-system 兩份樣式表，合併後寫出單一檔案
pub struct StylesheetPipeline<S: Storage, C: StylesheetSettings> {
    pub(crate) storage: S,
    pub(crate) config: C,
    merger: StylesheetMerger,
}

impl<S: Storage, C: StylesheetSettings> StylesheetPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            merger: StylesheetMerger::new()?,
        })
    }

    async fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.storage.read_file(path).await?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path);
        decode_text(path, bytes)
    }
}

pub(crate) fn decode_text(path: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| EtlError::malformed(path, e.to_string()))
}

#[async_trait::async_trait]
impl<S: Storage, C: StylesheetSettings> Pipeline for StylesheetPipeline<S, C> {
    type Extracted = StylesheetSources;
    type Transformed = MergedStylesheet;

    fn name(&self) -> &str {
        "merge-css"
    }

    async fn extract(&self) -> Result<StylesheetSources> {
        let theme = self.read_text(self.config.theme_path()).await?;
        let design_system = self.read_text(self.config.design_system_path()).await?;
        Ok(StylesheetSources {
            theme,
            design_system,
        })
    }

    async fn transform(&self, data: StylesheetSources) -> Result<MergedStylesheet> {
        let merged = self
            .merger
            .merge_with_report(&data.theme, &data.design_system);

        let report = &merged.report;
        tracing::info!(
            "Merged stylesheet: {} font-face blocks, {} structural blocks stripped, {}/{} brand shades rebranded",
            report.font_faces,
            report.stripped_blocks,
            report.rebranded,
            report.blue_shades
        );
        if !report.display_font_substituted {
            tracing::warn!("Legacy --font-display declaration not found, display font left unchanged");
        }

        Ok(merged)
    }

    async fn load(&self, result: MergedStylesheet) -> Result<String> {
        let output_path = self.config.output_path();
        self.storage
            .write_file(output_path, result.css.as_bytes())
            .await?;
        tracing::debug!("Wrote {} bytes to {}", result.css.len(), output_path);
        Ok(output_path.to_string())
    }
}
