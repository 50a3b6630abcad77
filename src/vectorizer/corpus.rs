use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    analyzer::token::tokenize,
    error::{Error, Result},
    loader::DocumentSource,
};

/// Document counts of a reference corpus
/// Holds no document text: only how many documents were added and, for each
/// word, how many of them contain it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// word -> number of documents containing it
    word_doc_counts: IndexMap<String, u64>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            word_doc_counts: IndexMap::new(),
        }
    }

    /// Add one document's words to the corpus
    /// Repeated words inside the document count once.
    pub fn add_doc<T>(&mut self, words: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        self.add_set(words.iter().map(|w| w.as_ref()))
    }

    /// Add one document given by its words
    /// The words are deduplicated first, so each counts at most once.
    pub fn add_set<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        let distinct: IndexSet<&str> = words.iter().map(|w| w.as_ref()).collect();
        self.doc_num += 1;
        for word in distinct {
            if let Some(count) = self.word_doc_counts.get_mut(word) {
                *count += 1;
            } else {
                self.word_doc_counts.insert(word.to_string(), 1);
            }
        }
        self
    }

    /// Load every document of `identifiers` and count its distinct words
    ///
    /// Documents are loaded and tokenized in parallel, then merged in the
    /// order of `identifiers`, so the result equals a sequential build.
    ///
    /// # Errors
    /// * `DocumentUnavailable` when any document cannot be loaded
    pub fn from_source<S, I>(source: &S, identifiers: &[I]) -> Result<Self>
    where
        S: DocumentSource + Sync + ?Sized,
        I: AsRef<str> + Sync,
    {
        let doc_sets = identifiers
            .par_iter()
            .map(|identifier| -> Result<IndexSet<String>> {
                let text = source.load(identifier.as_ref())?;
                Ok(tokenize(&text)
                    .into_iter()
                    .map(str::to_string)
                    .collect::<IndexSet<String>>())
            })
            .collect::<Result<Vec<_>>>()?;

        let mut corpus = Corpus::new();
        for set in &doc_sets {
            corpus.add_set(set);
        }
        Ok(corpus)
    }

    /// Number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `word`
    #[inline]
    pub fn doc_count(&self, word: &str) -> u64 {
        self.word_doc_counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words across the corpus
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.word_doc_counts.len()
    }

    /// IDF of every word in the corpus
    ///
    /// `IDF(word) = log10(doc_num / doc_count(word))`. A word's document
    /// count never exceeds `doc_num`, so every value is >= 0 and a word found
    /// in every document gets exactly 0.
    ///
    /// # Errors
    /// * `EmptyInput` when the corpus has no documents
    pub fn idf(&self) -> Result<IdfMap> {
        if self.doc_num == 0 {
            return Err(Error::EmptyInput("corpus has zero documents"));
        }
        let doc_num = self.doc_num as f64;
        let idf = self
            .word_doc_counts
            .iter()
            .map(|(word, &doc_count)| {
                debug_assert!(doc_count >= 1 && doc_count <= self.doc_num);
                (word.clone(), (doc_num / doc_count as f64).log10())
            })
            .collect();
        Ok(IdfMap { idf })
    }
}

/// Inverse document frequencies over a corpus
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct IdfMap {
    idf: IndexMap<String, f64>,
}

impl IdfMap {
    /// IDF of a word, `None` when no corpus document contains it
    #[inline]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.idf.get(word).copied()
    }

    /// `(word, idf)` pairs in first-seen corpus order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.idf.iter().map(|(word, &idf)| (word.as_str(), idf))
    }

    /// `(word, idf)` pairs sorted by word
    pub fn sorted_by_word(&self) -> Vec<(String, f64)> {
        let mut pairs: Vec<(String, f64)> = self
            .idf
            .iter()
            .map(|(word, &idf)| (word.clone(), idf))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }
}

/// IDF of every word appearing anywhere in the documents of `identifiers`
///
/// # Errors
/// * `EmptyInput` when `identifiers` is empty
/// * `DocumentUnavailable` when a document cannot be loaded
pub fn inverse_document_frequency<S, I>(source: &S, identifiers: &[I]) -> Result<IdfMap>
where
    S: DocumentSource + Sync + ?Sized,
    I: AsRef<str> + Sync,
{
    if identifiers.is_empty() {
        return Err(Error::EmptyInput("corpus has zero documents"));
    }
    Corpus::from_source(source, identifiers)?.idf()
}
