use anyhow::Result;
use clap::{Parser, Subcommand};
use indexer::Corpus;
use trigram::DocId;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Load documents into an in-memory trigram index and search them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for substrings
    Search {
        /// Input path (file or directory of .json, .jsonl or .txt)
        #[arg(long, env = "TRIGRAM_INPUT")]
        input: String,
        /// Delete these document ids before searching
        #[arg(long)]
        delete: Vec<DocId>,
        /// Drop candidates whose text does not contain the pattern
        #[arg(long, default_value_t = false)]
        verify: bool,
        /// Patterns to search for
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Print index statistics
    Stats {
        /// Input path (file or directory of .json, .jsonl or .txt)
        #[arg(long, env = "TRIGRAM_INPUT")]
        input: String,
        /// Number of most common trigrams to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { input, delete, verify, patterns } => {
            let mut corpus = Corpus::load(&input)?;
            for doc_id in delete {
                if !corpus.remove(doc_id) {
                    tracing::warn!(doc_id, "unknown document id, not deleted");
                }
            }
            for pattern in &patterns {
                let resp = corpus.search(pattern, verify);
                println!("{}", serde_json::to_string(&resp)?);
            }
        }
        Commands::Stats { input, top } => {
            let corpus = Corpus::load(&input)?;
            println!("{}", serde_json::to_string_pretty(&corpus.stats(top))?);
        }
    }
    Ok(())
}
