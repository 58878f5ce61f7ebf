use clap::Parser;
use iis_sites_importer::core::LoadOutcome;
use iis_sites_importer::utils::error::EtlError;
use iis_sites_importer::utils::{logger, validation::Validate};
use iis_sites_importer::{
    CliConfig, CommandReloader, ImportEngine, ImportPipeline, JinjaRenderer, LocalStorage,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting iis-sites-importer v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Command arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Import failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        std::process::exit(e.severity().exit_code());
    }
}

async fn run(cli: CliConfig) -> Result<(), EtlError> {
    let settings = cli.into_settings()?;
    settings.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let source = settings.source.build();
    let renderer = if settings.strict_template {
        JinjaRenderer::strict()
    } else {
        JinjaRenderer::new()
    };
    let reloader = settings
        .reload
        .then(|| CommandReloader::new(settings.reload_command.clone()));

    let pipeline = ImportPipeline::new(source, LocalStorage::default(), settings, renderer);
    let mut engine = ImportEngine::new(pipeline);
    if let Some(reloader) = reloader {
        engine = engine.with_reloader(reloader);
    }

    let summary = engine.run().await?;
    match summary.outcome {
        LoadOutcome::Written(path) => {
            tracing::info!("✅ {} sites written to {}", summary.sites, path);
        }
        LoadOutcome::Rendered(output) => {
            tracing::info!("🔍 DRY RUN MODE - {} sites rendered", summary.sites);
            print!("{}", output);
        }
    }

    Ok(())
}
