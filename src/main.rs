use std::{error::Error as StdError, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, Subcommand};
use doc_similarity::{
    inverse_document_frequency, most_frequent_words, rank_by_frequency_with_counts,
    similarity_score, term_frequency, tfidf, tokenize, word_frequencies, DocumentSource,
    FileSource, FrequencyMap,
};
use log::info;
use serde::Serialize;

/// Compare documents by word overlap and weight their words by TF-IDF.
///
/// Documents are read whole, stripped of ASCII punctuation and lowercased
/// before any statistic is computed.
#[derive(Parser)]
#[command(name = "doc-similarity", version, about)]
struct Cli {
    /// Directory relative document paths are resolved against
    #[arg(long, global = true, env = "DOC_SIMILARITY_DIR")]
    dir: Option<PathBuf>,

    /// Print results as JSON instead of tab-separated lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Words of a document by descending count
    Rank {
        doc: String,
        /// Only print the first N words
        #[arg(long)]
        top: Option<usize>,
    },

    /// Most frequent word(s) across two documents combined
    MostFrequent { doc_a: String, doc_b: String },

    /// DIFF/ALL similarity of two documents (0.0 - 1.0)
    Similarity { doc_a: String, doc_b: String },

    /// Term frequency of every word of a document
    Tf { doc: String },

    /// Inverse document frequency of every word of a corpus
    Idf {
        #[arg(required = true)]
        docs: Vec<String>,
    },

    /// TF-IDF of a document's words against a corpus
    Tfidf {
        target: String,
        /// Corpus documents (normally including the target)
        #[arg(required = true)]
        corpus: Vec<String>,
        /// Only print the N highest-scoring words
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let source = match &cli.dir {
        Some(dir) => FileSource::with_base_dir(dir),
        None => FileSource::new(),
    };

    let start = Instant::now();
    let res = run(&cli, &source);
    info!("[time] total={:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, source: &FileSource) -> Result<(), Box<dyn StdError>> {
    match &cli.command {
        Commands::Rank { doc, top } => {
            let mut ranked = rank_by_frequency_with_counts(&frequencies(source, doc)?);
            if let Some(n) = top {
                ranked.truncate(*n);
            }
            emit(cli.json, &ranked, |(word, count)| format!("{}\t{}", count, word))
        }
        Commands::MostFrequent { doc_a, doc_b } => {
            let words = most_frequent_words(&frequencies(source, doc_a)?, &frequencies(source, doc_b)?)?;
            emit(cli.json, &words, |word| word.clone())
        }
        Commands::Similarity { doc_a, doc_b } => {
            let score = similarity_score(&frequencies(source, doc_a)?, &frequencies(source, doc_b)?)?;
            if cli.json {
                println!("{}", serde_json::to_string(&score)?);
            } else {
                println!("{:.2}", score);
            }
            Ok(())
        }
        Commands::Tf { doc } => {
            let tf = term_frequency(source, doc)?;
            let mut pairs: Vec<(&str, f64)> = tf.iter().collect();
            pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
            emit(cli.json, &pairs, |(word, tf)| format!("{}\t{}", tf, word))
        }
        Commands::Idf { docs } => {
            let t0 = Instant::now();
            let idf = inverse_document_frequency(source, docs)?;
            info!(
                "[time] idf over {} docs={:.2}ms",
                docs.len(),
                t0.elapsed().as_secs_f64() * 1000.0
            );
            emit(cli.json, &idf.sorted_by_word(), |(word, idf)| format!("{}\t{}", idf, word))
        }
        Commands::Tfidf { target, corpus, top } => {
            let t0 = Instant::now();
            let mut list = tfidf(source, target, corpus)?;
            info!(
                "[time] tfidf over {} docs={:.2}ms",
                corpus.len(),
                t0.elapsed().as_secs_f64() * 1000.0
            );
            if let Some(n) = top {
                list = list.split_off(list.len().saturating_sub(*n));
            }
            emit(cli.json, &list, |(word, score)| format!("{}\t{}", score, word))
        }
    }
}

fn frequencies(source: &FileSource, identifier: &str) -> doc_similarity::Result<FrequencyMap> {
    let text = source.load(identifier)?;
    Ok(word_frequencies(&tokenize(&text)))
}

/// Print a result list, one line per item or as a JSON array
fn emit<T, F>(json: bool, items: &[T], line: F) -> Result<(), Box<dyn StdError>>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}", line(item));
        }
    }
    Ok(())
}
