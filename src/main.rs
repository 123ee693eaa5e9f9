use clap::Parser;
use theme_etl::config::toml_config::{ClientsSection, StylesheetSection};
use theme_etl::config::Command;
use theme_etl::utils::error::ErrorSeverity;
use theme_etl::utils::{logger, validation::Validate};
use theme_etl::{
    CliConfig, ClientSeedJob, ClientSeedPipeline, EtlEngine, EtlError, LocalStorage,
    StylesheetJob, StylesheetPipeline,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting theme-etl");
    tracing::debug!("CLI config: {:?}", config);

    match run(config).await {
        Ok(Some(output_path)) => {
            println!("✅ Done");
            println!("📁 Output saved to: {}", output_path);
        }
        Ok(None) => println!("🔍 Dry run finished, nothing written"),
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

async fn run(config: CliConfig) -> Result<Option<String>, EtlError> {
    let file_config = config.load_toml()?;
    let storage = LocalStorage::default();

    match config.command {
        Command::MergeCss {
            theme,
            design_system,
            output,
        } => {
            let overrides = StylesheetSection {
                theme_path: theme,
                design_system_path: design_system,
                output_path: output,
            };
            let job = StylesheetJob::resolve(overrides, file_config.stylesheet());
            job.validate()?;
            tracing::info!(
                "Merging {} + {} -> {}",
                job.theme_path,
                job.design_system_path,
                job.output_path
            );

            let engine = EtlEngine::new(StylesheetPipeline::new(storage, job)?);
            if config.dry_run {
                let merged = engine.dry_run().await?;
                tracing::info!("Merged stylesheet would be {} bytes", merged.css.len());
                return Ok(None);
            }
            engine.run().await.map(Some)
        }
        Command::SeedClients {
            input,
            output,
            delimiter,
        } => {
            let overrides = ClientsSection {
                input_path: input,
                output_path: output,
                delimiter,
            };
            let job = ClientSeedJob::resolve(overrides, file_config.clients())?;
            job.validate()?;

            let engine = EtlEngine::new(ClientSeedPipeline::new(storage, job));
            if config.dry_run {
                let batch = engine.dry_run().await?;
                tracing::info!(
                    "Would write {} clients ({} rows skipped)",
                    batch.clients.len(),
                    batch.skipped_rows
                );
                return Ok(None);
            }
            engine.run().await.map(Some)
        }
    }
}
