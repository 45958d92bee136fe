use clap::{Parser, Subcommand};
use reelrank::prelude::*;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A content-based recommender built on TF-IDF and cosine similarity
#[derive(Parser, Debug)]
#[command(name = "reelrank")]
#[command(about = "Build and query content-similarity artifacts", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the offline pipeline and persist the artifact
    Build {
        /// JSON file with an array of raw metadata records
        #[arg(short, long)]
        input: PathBuf,

        /// Output artifact path
        #[arg(short, long, default_value = "catalog.artifact")]
        output: PathBuf,

        /// Minimum document frequency for vocabulary terms
        #[arg(long, default_value_t = 1)]
        min_df: usize,

        /// Cap the vocabulary at the most frequent terms
        #[arg(long)]
        max_features: Option<usize>,

        /// Keep English stopwords instead of dropping them
        #[arg(long)]
        keep_stop_words: bool,
    },
    /// Query an artifact for the top-K most similar items
    Recommend {
        /// Artifact path
        #[arg(short, long, default_value = "catalog.artifact")]
        artifact: PathBuf,

        /// Exact title of the query item
        title: String,

        /// Number of neighbors to return
        #[arg(short, long, default_value_t = DEFAULT_K)]
        k: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Build {
            input,
            output,
            min_df,
            max_features,
            keep_stop_words,
        } => {
            info!("Starting reelrank build v{}", env!("CARGO_PKG_VERSION"));
            info!("Input: {:?}", input);

            let raw = std::fs::read_to_string(&input)?;
            let records: Vec<RawRecord> = serde_json::from_str(&raw)?;

            let catalog = build_catalog(&records)?;
            let tag_texts: Vec<&str> =
                catalog.iter().map(|item| item.tag_text.as_str()).collect();

            let mut vectorizer = TfidfVectorizer::new().with_min_df(min_df);
            if let Some(max_features) = max_features {
                vectorizer = vectorizer.with_max_features(max_features);
            }
            if keep_stop_words {
                vectorizer = vectorizer.with_stop_words(StopWords::none());
            }

            let vectors = vectorizer.fit_transform(&tag_texts)?;
            let matrix = build_matrix(&vectors)?;
            let description = reelrank::artifact::save(&output, &catalog, &matrix)?;

            info!(
                "Artifact written: {} ({} bytes, sha256 {})",
                description.path.display(),
                description.size,
                description.checksum
            );
        }
        Command::Recommend { artifact, title, k } => {
            let (catalog, matrix) = reelrank::artifact::load(&artifact)?;
            let engine = Recommender::new(catalog, matrix)?;

            let results = engine.recommend(&title, k)?;
            for (rank, r) in results.iter().enumerate() {
                println!("{:>2}. {} (id {}, score {:.4})", rank + 1, r.title, r.id, r.score);
            }
        }
    }

    Ok(())
}
