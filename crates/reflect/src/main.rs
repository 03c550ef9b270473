mod clipboard;

use anyhow::Result;
use clap::Parser;
use reflect_common::{logger, AppConfig};
use reflect_llm::{OpenAiClient, ReflectionGenerator};
use reflect_readwise::ReadwiseClient;
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
            return;
        }
    }

    // Fallback to default dotenv behavior
    dotenv::dotenv().ok();
}

#[derive(Parser)]
#[command(name = "reflect")]
#[command(about = "Turn a random favorite Readwise highlight into a reflection prompt", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<String>,

    /// Print the prompt without copying it to the clipboard
    #[arg(long)]
    no_copy: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    // Logging is not up yet; config errors are reported by anyhow alone.
    let config = AppConfig::from_env()?;
    let log_level = logger::parse_log_level(cli.log_level.as_deref().unwrap_or(&config.log_level))?;
    logger::setup_console_logging(log_level)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let readwise = ReadwiseClient::new(&config.readwise_token)?;
    let quote = readwise
        .favorite_quote(&mut rand::thread_rng())
        .await
        .inspect_err(|e| tracing::error!(kind = e.kind(), "Failed to get favorite quote: {}", e))?;

    if quote.is_empty() {
        tracing::warn!("No highlights tagged favorite; generating from an empty quote");
    }

    let generator = ReflectionGenerator::new(OpenAiClient::new(&config.openai_token)?);
    let prompt = generator
        .generate(&quote)
        .await
        .inspect_err(|e| tracing::error!(kind = e.kind(), "Failed to get reflection prompt: {}", e))?;

    println!("{}", prompt);

    if !cli.no_copy {
        eprintln!("Copying text to clipboard...");
        clipboard::copy_to_clipboard(&prompt)
            .inspect_err(|e| tracing::error!(kind = e.kind(), "{}", e))?;
    }

    Ok(())
}
