use clap::Parser;
use ticket_triage::utils::{logger, validation::Validate};
use ticket_triage::{LocalStorage, SessionEngine, StdinSource, TriageConfig, TriagePipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = TriageConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ticket-triage session");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = TriagePipeline::new(StdinSource::new(), storage, config);
    let mut engine = SessionEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Session completed");
            println!();
            println!("Messages saved to '{}'. Goodbye!", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Session failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
