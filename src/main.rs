use clap::Parser;
use league_table::utils::{logger, validation::Validate};
use league_table::{CliConfig, FileSource, LeagueEngine, StandingsPipeline};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let source = FileSource::new(config.input.clone());
    let engine = LeagueEngine::new(StandingsPipeline::new(source, config));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match engine.run(&mut out) {
        Ok(summary) => {
            tracing::info!(
                "Done: {} lines read, {} teams ranked, {} lines skipped",
                summary.lines_read,
                summary.teams_ranked,
                summary.lines_skipped
            );
        }
        Err(e) => {
            tracing::error!("League table failed: {}", e);
            eprintln!("error: {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
