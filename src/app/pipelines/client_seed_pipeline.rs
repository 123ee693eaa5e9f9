use super::stylesheet_pipeline::decode_text;
use crate::core::client_seed;
use crate::core::{ClientSeedSettings, Pipeline, SeedBatch, SpreadsheetRow, Storage};
use crate::utils::error::{EtlError, Result};

/// 把客戶試算表 (CSV 匯出) 轉成資料庫 seed 用的 JSON
pub struct ClientSeedPipeline<S: Storage, C: ClientSeedSettings> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ClientSeedSettings> ClientSeedPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

pub fn parse_rows(text: &str, delimiter: u8) -> Result<Vec<SpreadsheetRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

#[async_trait::async_trait]
impl<S: Storage, C: ClientSeedSettings> Pipeline for ClientSeedPipeline<S, C> {
    type Extracted = Vec<SpreadsheetRow>;
    type Transformed = SeedBatch;

    fn name(&self) -> &str {
        "seed-clients"
    }

    async fn extract(&self) -> Result<Vec<SpreadsheetRow>> {
        let input_path = self.config.input_path();
        tracing::info!("Reading {}", input_path);

        let bytes = self.storage.read_file(input_path).await?;
        let text = decode_text(input_path, bytes)?;
        // Excel 匯出的 CSV 常帶 BOM
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let rows = parse_rows(text, self.config.delimiter()).map_err(|e| match e {
            EtlError::CsvError(err) => EtlError::malformed(input_path, err.to_string()),
            other => other,
        })?;
        tracing::debug!("Read {} spreadsheet rows", rows.len());
        Ok(rows)
    }

    async fn transform(&self, data: Vec<SpreadsheetRow>) -> Result<SeedBatch> {
        let batch = client_seed::map_rows(data);
        tracing::info!("Parsed {} clients", batch.clients.len());
        if batch.skipped_rows > 0 {
            tracing::warn!(
                "Skipped {} rows without email or name",
                batch.skipped_rows
            );
        }
        Ok(batch)
    }

    async fn load(&self, result: SeedBatch) -> Result<String> {
        let output_path = self.config.output_path();
        let json_data = serde_json::to_string_pretty(&result.clients)?;
        self.storage
            .write_file(output_path, json_data.as_bytes())
            .await?;
        tracing::info!("Saved {} clients to {}", result.clients.len(), output_path);
        Ok(output_path.to_string())
    }
}
