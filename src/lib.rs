/// This crate compares documents by word overlap and weights words by TF-IDF.
pub mod analyzer;
pub mod error;
pub mod loader;
pub mod utils;
pub mod vectorizer;

/// Error and Result
/// Every computation either returns a well-defined value or one of:
/// - `DocumentUnavailable`: the loader could not resolve or read a document
/// - `EmptyInput`: a formula denominator would be zero
/// - `UndefinedAggregate`: most frequent word over zero words
/// - `MissingCorpusWord`: TF-IDF for a word the corpus never contains
pub use error::{Error, Result};

/// Document loading
/// `DocumentSource` resolves identifiers into `NormalizedText` (lowercased,
/// ASCII punctuation removed).
/// - `FileSource`: reads files, optionally relative to a base directory
/// - `MemorySource`: in-memory documents, normalized the same way
///
/// `load_document` reads a single file with the default `FileSource`.
pub use loader::{load_document, normalize, DocumentSource, FileSource, MemorySource, NormalizedText};

/// Tokens and word counts
/// `tokenize` splits normalized text on whitespace runs.
/// `word_frequencies` turns the tokens into a `FrequencyMap`, whose counts
/// always sum to the number of tokens.
pub use analyzer::token::{tokenize, word_frequencies, FrequencyMap, TokenSequence};

/// Ranking and aggregation
/// - `rank_by_frequency`: words by descending count, ties alphabetical
/// - `combined_frequencies`: word-by-word sum of two maps (inputs untouched)
/// - `most_frequent_words`: every word sharing the highest combined count
pub use analyzer::rank::{
    combined_frequencies, most_frequent_words, rank_by_frequency, rank_by_frequency_with_counts,
    RankedWordList,
};

/// DIFF/ALL similarity
/// `1 - DIFF / ALL` rounded to two places, where DIFF is the total absolute
/// count difference and ALL the total token count of both documents.
pub use analyzer::compare::similarity_score;

/// Term frequency
/// `TF(word) = count(word) / total tokens` for a single document.
pub use vectorizer::tf::{term_frequency, TfMap};

/// Corpus and inverse document frequency
/// `Corpus` keeps, for every word, the number of documents containing it.
/// `IDF(word) = log10(documents / documents containing word)`; corpus
/// documents are loaded in parallel.
pub use vectorizer::corpus::{inverse_document_frequency, Corpus, IdfMap};

/// TF-IDF
/// `TF * IDF` for every word of a target document, ascending by score with
/// alphabetical tie-break.
pub use vectorizer::tfidf::{tfidf, TfIdfList};
