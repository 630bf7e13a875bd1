use std::path::PathBuf;
use std::process;

use clap::Parser;
use shaney_core::corpus;
use shaney_core::model::chain::Chain;
use tracing::{error, info};

/// Generate pseudo-random text from sample prose.
///
/// Learns which words follow which word pairs in the given corpus
/// files, then prints randomly walked documents, one blank-line
/// separated paragraph each.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Corpus files to learn from
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of documents to generate
    #[arg(short = 'n', long = "documents", default_value_t = 5)]
    documents: usize,
}

fn main() {
    // Keep stdout for generated text only
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let mut chain = Chain::new();
    for file in &cli.files {
        info!("Reading corpus: {}", file.display());
        if let Err(e) = corpus::ingest_file(&mut chain, file) {
            error!("{}", e);
            process::exit(1);
        }
    }
    info!("Learned {} prefix windows", chain.prefix_count());

    for _ in 0..cli.documents {
        let words: Vec<String> = chain.generate().collect();
        println!("{}\n", words.join(" "));
    }
}
