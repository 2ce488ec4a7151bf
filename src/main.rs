use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use collegefit::cli::{self, QueryArgs};

#[derive(Parser)]
#[command(name = "collegefit")]
#[command(about = "College recommendation tool with ranked shortlists and AI advisory summaries", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank colleges against your preferences
    Rank {
        /// Path to the joint college dataset CSV
        #[arg(short, long)]
        data: String,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Print the RAG context for one ranked college
    Context {
        /// Path to the joint college dataset CSV
        #[arg(short, long)]
        data: String,

        #[command(flatten)]
        query: QueryArgs,

        /// 1-based position of the ranked college to inspect
        #[arg(long, default_value = "1")]
        pick: usize,
    },

    /// Generate an AI advisory summary for one ranked college
    Summarize {
        /// Path to the joint college dataset CSV
        #[arg(short, long)]
        data: String,

        #[command(flatten)]
        query: QueryArgs,

        /// 1-based position of the ranked college to summarize
        #[arg(long, default_value = "1")]
        pick: usize,

        /// Generation model identifier
        #[arg(short, long, default_value = "gemini-2.5-flash")]
        model: String,

        /// Override the generation API base URL
        #[arg(long)]
        api_base: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "collegefit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank { data, query } => {
            cli::rank(data, query).await?;
        }

        Commands::Context { data, query, pick } => {
            cli::context(data, query, pick).await?;
        }

        Commands::Summarize {
            data,
            query,
            pick,
            model,
            api_base,
        } => {
            cli::summarize(data, query, pick, model, api_base).await?;
        }
    }

    Ok(())
}
