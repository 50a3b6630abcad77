use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    analyzer::token::{tokenize, word_frequencies, FrequencyMap},
    error::{Error, Result},
    loader::DocumentSource,
};

/// Term frequencies of a single document
/// word -> count / total token count, every value in (0, 1].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct TfMap {
    tf: IndexMap<String, f64>,
}

impl TfMap {
    /// TF calculation
    ///
    /// # Arguments
    /// * `freq` - word counts of the document
    ///
    /// # Returns
    /// * `TfMap` - `TF(word) = count(word) / total_count`
    ///
    /// # Errors
    /// * `EmptyInput` when the document has no tokens
    pub fn from_frequencies(freq: &FrequencyMap) -> Result<Self> {
        let total = freq.total_count();
        if total == 0 {
            return Err(Error::EmptyInput("document has zero tokens"));
        }
        let tf = freq
            .iter()
            .map(|(word, count)| (word.to_string(), count as f64 / total as f64))
            .collect();
        Ok(TfMap { tf })
    }

    /// TF of a word, `None` when the document never contains it
    #[inline]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.tf.get(word).copied()
    }

    /// `(word, tf)` pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.tf.iter().map(|(word, &tf)| (word.as_str(), tf))
    }

    /// Number of distinct words
    #[inline]
    pub fn len(&self) -> usize {
        self.tf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tf.is_empty()
    }
}

/// Load, tokenize and compute the term frequencies of one document
///
/// # Errors
/// * `DocumentUnavailable` when the source cannot load `identifier`
/// * `EmptyInput` when the document has no tokens
pub fn term_frequency<S>(source: &S, identifier: &str) -> Result<TfMap>
where
    S: DocumentSource + ?Sized,
{
    let text = source.load(identifier)?;
    let freq = word_frequencies(&tokenize(&text));
    TfMap::from_frequencies(&freq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MemorySource;

    #[test]
    fn four_distinct_words_get_a_quarter_each() {
        let source: MemorySource = [("doc", "Hello there, general Kenobi!")].into_iter().collect();
        let tf = term_frequency(&source, "doc").unwrap();
        assert_eq!(tf.len(), 4);
        for word in ["hello", "there", "general", "kenobi"] {
            assert_eq!(tf.get(word), Some(0.25));
        }
    }

    #[test]
    fn repeated_words_share_the_document_length() {
        let freq = FrequencyMap::from_counts([("a", 3), ("b", 1)]);
        let tf = TfMap::from_frequencies(&freq).unwrap();
        assert_eq!(tf.get("a"), Some(0.75));
        assert_eq!(tf.get("b"), Some(0.25));
        assert_eq!(tf.get("c"), None);
        let sum: f64 = tf.iter().map(|(_, v)| v).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn values_are_in_unit_interval() {
        let freq = word_frequencies(&tokenize("x y y z z z"));
        let tf = TfMap::from_frequencies(&freq).unwrap();
        assert!(tf.iter().all(|(_, v)| v > 0.0 && v <= 1.0));
        let single = TfMap::from_frequencies(&FrequencyMap::from_counts([("only", 2)])).unwrap();
        assert_eq!(single.get("only"), Some(1.0));
    }

    #[test]
    fn empty_document_is_an_error() {
        let source: MemorySource = [("blank", " ... !!! ")].into_iter().collect();
        let err = term_frequency(&source, "blank").unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
    }

    #[test]
    fn unknown_document_is_unavailable() {
        let err = term_frequency(&MemorySource::new(), "ghost").unwrap_err();
        assert!(matches!(err, Error::DocumentUnavailable { .. }));
    }
}
