//! Telegram auto-forwarder - CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use telegram_autoforward::cli::Cli;
use telegram_autoforward::messenger::format_chat_list;
use telegram_autoforward::{relay, Config};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    // Configuration problems are fatal before any connection is attempted
    let config = match Config::load(cli.env_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.check {
        println!("✅ Configuration: OK");
        println!("   API ID: {}", config.api_id);
        println!("   Sources: {}", format_chat_list(&config.sources));
        println!("   Targets: {}", format_chat_list(&config.targets));
        return ExitCode::SUCCESS;
    }

    match relay::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
