//! Main entry point for the DeepL translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deepl_translator::cli::commands::{self, Commands};
use deepl_translator::ClientConfig;

/// DeepL translator - translate text and manage glossaries from the shell
#[derive(Parser, Debug)]
#[command(name = "deepl-translator", version, about, long_about = None)]
struct Args {
    /// DeepL auth key (optional, defaults to DEEPL_AUTH_KEY env var)
    #[arg(long)]
    auth_key: Option<String>,

    /// API base URL (optional, defaults to DEEPL_API_ENDPOINT or the endpoint matching the key)
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("deepl_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // CLI args override the environment
    let mut config = ClientConfig::from_env_with_key(args.auth_key)?;
    if let Some(base_url) = args.base_url {
        config.base_url = Some(base_url);
    }

    let client = config.build_client()?;
    commands::run(&client, args.command).await
}
