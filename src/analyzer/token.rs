use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered word tokens borrowed from the normalized text they were split from
pub type TokenSequence<'a> = Vec<&'a str>;

/// Split normalized text into word tokens
///
/// Runs of whitespace separate tokens; no empty token is ever produced and
/// the source order is preserved.
///
/// # Arguments
/// * `text` - lowercased, punctuation-free text
///
/// # Returns
/// * `TokenSequence` - tokens in document order (empty for empty text)
#[inline]
pub fn tokenize(text: &str) -> TokenSequence<'_> {
    text.split_whitespace().collect()
}

/// Count every token of a sequence
///
/// # Arguments
/// * `tokens` - token sequence, usually the output of [`tokenize`]
///
/// # Returns
/// * `FrequencyMap` - word -> count, counts summing to `tokens.len()`
#[inline]
pub fn word_frequencies<T>(tokens: &[T]) -> FrequencyMap
where
    T: AsRef<str>,
{
    let mut freq = FrequencyMap::new();
    freq.add_words(tokens);
    freq
}

/// FrequencyMap
/// Word occurrence counts of a single document.
///
/// Iteration follows first-seen order, which carries no meaning: every ranked
/// output of this crate sorts with an explicit key instead.
/// Equality compares the word -> count mapping only, not the order.
///
/// # Examples
/// ```
/// use doc_similarity::FrequencyMap;
/// let mut freq = FrequencyMap::new();
/// freq.add_word("dog").add_word("cat").add_word("dog");
///
/// assert_eq!(freq.count("dog"), 2);
/// assert_eq!(freq.total_count(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "IndexMap<String, u32>", into = "IndexMap<String, u32>")]
pub struct FrequencyMap {
    word_count: IndexMap<String, u32>,
    total_word_count: u64,
}

/// Word insertion
impl FrequencyMap {
    /// Create an empty FrequencyMap
    pub fn new() -> Self {
        FrequencyMap {
            word_count: IndexMap::new(),
            total_word_count: 0,
        }
    }

    /// Build a map from explicit `(word, count)` pairs
    /// Repeated words accumulate, zero counts are skipped.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut freq = FrequencyMap::new();
        for (word, count) in counts {
            freq.add_word_count(word.into(), count);
        }
        freq
    }

    /// Count one occurrence of a word
    ///
    /// # Arguments
    /// * `word` - the word to count
    #[inline]
    pub fn add_word(&mut self, word: &str) -> &mut Self {
        if let Some(count) = self.word_count.get_mut(word) {
            if *count == u32::MAX {
                return self;
            }
            *count += 1;
        } else {
            self.word_count.insert(word.to_string(), 1);
        }
        self.total_word_count += 1;
        self
    }

    /// Count every word of a slice
    ///
    /// # Arguments
    /// * `words` - slice of words to count
    #[inline]
    pub fn add_words<T>(&mut self, words: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
        self
    }

    /// Counts saturate at `u32::MAX`; the total only grows by what was stored
    #[inline]
    fn add_word_count(&mut self, word: String, count: u32) {
        if count == 0 {
            return;
        }
        let stored = self.word_count.entry(word).or_insert(0);
        let before = *stored;
        *stored = before.saturating_add(count);
        self.total_word_count += (*stored - before) as u64;
    }
}

/// Read access
impl FrequencyMap {
    /// Occurrences of a word, 0 when absent
    #[inline]
    pub fn count(&self, word: &str) -> u32 {
        self.word_count.get(word).copied().unwrap_or(0)
    }

    /// Sum of all counts
    /// Equal to the length of the token sequence the map was built from.
    #[inline]
    pub fn total_count(&self) -> u64 {
        self.total_word_count
    }

    /// Number of distinct words
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count.len()
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.word_count.contains_key(word)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word_count.is_empty()
    }

    /// `(word, count)` pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.word_count.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Largest single count, `None` for an empty map
    #[inline]
    pub fn max_count(&self) -> Option<u32> {
        self.word_count.values().max().copied()
    }

    /// Vocabulary diversity
    /// 1.0 means every token is distinct, values near 0.0 mean heavy repetition.
    ///
    /// # Returns
    /// * `f64` - distinct words / total tokens (0.0 for an empty map)
    #[inline]
    pub fn unique_word_ratio(&self) -> f64 {
        if self.total_word_count == 0 {
            return 0.0;
        }
        self.word_count.len() as f64 / self.total_word_count as f64
    }
}

impl<'a> FromIterator<&'a str> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut freq = FrequencyMap::new();
        for word in iter {
            freq.add_word(word);
        }
        freq
    }
}

impl From<IndexMap<String, u32>> for FrequencyMap {
    fn from(mut counts: IndexMap<String, u32>) -> Self {
        counts.retain(|_, count| *count > 0);
        let total_word_count = counts.values().map(|&c| c as u64).sum();
        FrequencyMap {
            word_count: counts,
            total_word_count,
        }
    }
}

impl From<FrequencyMap> for IndexMap<String, u32> {
    fn from(freq: FrequencyMap) -> Self {
        freq.word_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_whitespace_runs() {
        let tokens = tokenize("  the quick\tbrown \n\n fox  ");
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn tokenize_empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn counts_start_at_one_and_increment() {
        let freq = word_frequencies(&["a", "b", "a", "c", "a"]);
        assert_eq!(freq.count("a"), 3);
        assert_eq!(freq.count("b"), 1);
        assert_eq!(freq.count("c"), 1);
        assert_eq!(freq.count("missing"), 0);
        assert_eq!(freq.word_count(), 3);
    }

    #[test]
    fn counts_sum_to_token_length() {
        let text = "it was the best of times it was the worst of times";
        let tokens = tokenize(text);
        let freq = word_frequencies(&tokens);
        let sum: u64 = freq.iter().map(|(_, c)| c as u64).sum();
        assert_eq!(sum, tokens.len() as u64);
        assert_eq!(freq.total_count(), tokens.len() as u64);
    }

    #[test]
    fn empty_tokens_yield_empty_map() {
        let empty: [&str; 0] = [];
        let freq = word_frequencies(&empty);
        assert!(freq.is_empty());
        assert_eq!(freq.total_count(), 0);
        assert_eq!(freq.max_count(), None);
        assert_eq!(freq.unique_word_ratio(), 0.0);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = FrequencyMap::from_counts([("x", 2), ("y", 1)]);
        let b = FrequencyMap::from_counts([("y", 1), ("x", 2)]);
        assert_eq!(a, b);
    }

    #[test]
    fn from_counts_accumulates_repeated_words() {
        let freq = FrequencyMap::from_counts([("x", 2), ("x", 3)]);
        assert_eq!(freq.count("x"), 5);
        assert_eq!(freq.total_count(), 5);
    }

    #[test]
    fn zero_counts_are_skipped() {
        let freq = FrequencyMap::from_counts([("x", 0), ("y", 2), ("z", 0)]);
        assert_eq!(freq.word_count(), 1);
        assert!(!freq.contains("x"));
        assert_eq!(freq.total_count(), 2);

        let back: FrequencyMap = serde_json::from_str(r#"{"a":0,"b":1}"#).unwrap();
        assert_eq!(back, FrequencyMap::from_counts([("b", 1)]));
    }

    #[test]
    fn large_counts_saturate_and_keep_the_total_consistent() {
        let freq = FrequencyMap::from_counts([("x", u32::MAX - 1), ("x", 5), ("y", 3)]);
        assert_eq!(freq.count("x"), u32::MAX);
        let sum: u64 = freq.iter().map(|(_, c)| c as u64).sum();
        assert_eq!(freq.total_count(), sum);
    }

    #[test]
    fn from_iterator_counts_tokens() {
        let freq: FrequencyMap = tokenize("b a b").into_iter().collect();
        assert_eq!(freq, FrequencyMap::from_counts([("a", 1), ("b", 2)]));
        assert!((freq.unique_word_ratio() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn serializes_as_plain_json_object() {
        let freq = FrequencyMap::from_counts([("dog", 2), ("cat", 1)]);
        let json = serde_json::to_string(&freq).unwrap();
        assert_eq!(json, r#"{"dog":2,"cat":1}"#);
        let back: FrequencyMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_count(), 3);
        assert_eq!(back, freq);
    }
}
