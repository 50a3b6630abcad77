use std::io;

use thiserror::Error;

/// Errors surfaced by the similarity and TF-IDF pipeline.
///
/// Every variant is a caller-visible failure: no computation substitutes a
/// default value for an undefined result.
#[derive(Debug, Error)]
pub enum Error {
    /// The document loader could not resolve or read the identifier
    #[error("document `{identifier}` is unavailable: {source}")]
    DocumentUnavailable {
        identifier: String,
        #[source]
        source: io::Error,
    },
    /// A formula denominator would be zero (no tokens, no documents)
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
    /// Maximum over an empty combined word set
    #[error("most frequent word is undefined over zero words")]
    UndefinedAggregate,
    /// TF-IDF requested for a word the corpus never contains
    #[error("word `{word}` does not occur in any corpus document")]
    MissingCorpusWord { word: String },
}

pub type Result<T> = std::result::Result<T, Error>;
