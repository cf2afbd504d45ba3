mod analyze;
mod feedback;
mod output;
mod state;

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use eurolens_store::HistoryStore;

use crate::state::CliState;

#[derive(Debug, Parser)]
#[command(name = "eurolens-cli")]
#[command(about = "EuroLens product-origin analysis, from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a photo or a typed product description.
    Analyze {
        #[command(subcommand)]
        input: AnalyzeInput,
    },
    /// Inspect or clear past analysis results.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Rate a prior analysis result.
    Feedback(feedback::FeedbackArgs),
}

#[derive(Debug, Subcommand)]
enum AnalyzeInput {
    /// Classify a photo from disk.
    Image {
        path: PathBuf,
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Classify user-typed product text.
    Text {
        text: String,
        #[arg(long)]
        prompt: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum HistoryAction {
    /// List past results, newest first.
    List,
    /// Delete all past results.
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = eurolens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let store = HistoryStore::open(&config.history_path);
    let mut state = CliState::load(&config.state_path);

    let now = Utc::now();
    if eurolens_core::should_prompt(now, state.last_open, store.is_empty()) {
        println!("Welcome back! Your past scans are still here. Point the camera at something new?");
    }
    state.last_open = Some(now);
    state.save(&config.state_path)?;

    match cli.command {
        Commands::Analyze { input } => match input {
            AnalyzeInput::Image { path, prompt } => {
                analyze::run_image(&config, &store, &path, prompt.as_deref()).await?;
            }
            AnalyzeInput::Text { text, prompt } => {
                analyze::run_text(&config, &store, &text, prompt.as_deref()).await?;
            }
        },
        Commands::History { action } => match action {
            HistoryAction::List => {
                let items = store.all();
                if items.is_empty() {
                    println!("history is empty");
                }
                for item in &items {
                    output::print_history_item(item);
                }
            }
            HistoryAction::Clear => {
                store.clear()?;
                println!("history cleared");
            }
        },
        Commands::Feedback(args) => {
            feedback::run(&config, &mut state, args).await?;
            state.save(&config.state_path)?;
        }
    }

    Ok(())
}
