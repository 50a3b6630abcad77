use crate::{
    analyzer::token::FrequencyMap,
    error::{Error, Result},
    utils::sort::sort_by_count_desc,
};

/// Words ordered by descending count, ties in ascending alphabetical order
pub type RankedWordList = Vec<String>;

/// Rank the words of a frequency map
///
/// # Arguments
/// * `freq` - word counts of one document
///
/// # Returns
/// * `RankedWordList` - most frequent first, equal counts alphabetical
pub fn rank_by_frequency(freq: &FrequencyMap) -> RankedWordList {
    rank_by_frequency_with_counts(freq)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

/// Same ordering as [`rank_by_frequency`], keeping each word's count
pub fn rank_by_frequency_with_counts(freq: &FrequencyMap) -> Vec<(String, u32)> {
    let mut ranked: Vec<(String, u32)> = freq
        .iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    sort_by_count_desc(&mut ranked);
    ranked
}

/// Sum two frequency maps word by word
/// A word missing from one side counts as 0 there.
/// Both inputs are left untouched; the sum is a fresh map.
pub fn combined_frequencies(a: &FrequencyMap, b: &FrequencyMap) -> FrequencyMap {
    FrequencyMap::from_counts(a.iter().chain(b.iter()))
}

/// Word(s) with the highest combined count across two documents
///
/// # Arguments
/// * `a` - word counts of the first document
/// * `b` - word counts of the second document
///
/// # Returns
/// * `Vec<String>` - every word sharing the maximum, alphabetical
///
/// # Errors
/// * `UndefinedAggregate` when both maps are empty
pub fn most_frequent_words(a: &FrequencyMap, b: &FrequencyMap) -> Result<Vec<String>> {
    let combined = combined_frequencies(a, b);
    let max = combined.max_count().ok_or(Error::UndefinedAggregate)?;
    let mut words: Vec<String> = combined
        .iter()
        .filter(|&(_, count)| count == max)
        .map(|(word, _)| word.to_string())
        .collect();
    words.sort_unstable();
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(pairs: &[(&str, u32)]) -> FrequencyMap {
        FrequencyMap::from_counts(pairs.iter().copied())
    }

    #[test]
    fn ranks_by_count_then_word() {
        let ranked = rank_by_frequency(&freq(&[("b", 2), ("a", 2), ("c", 1)]));
        assert_eq!(ranked, vec!["a", "b", "c"]);
    }

    #[test]
    fn ranking_ignores_insertion_order() {
        let one = rank_by_frequency(&freq(&[("x", 1), ("y", 5), ("w", 1)]));
        let two = rank_by_frequency(&freq(&[("w", 1), ("x", 1), ("y", 5)]));
        assert_eq!(one, vec!["y", "w", "x"]);
        assert_eq!(one, two);
    }

    #[test]
    fn ranking_with_counts_keeps_counts() {
        let ranked = rank_by_frequency_with_counts(&freq(&[("a", 1), ("b", 3)]));
        assert_eq!(ranked, vec![("b".to_string(), 3), ("a".to_string(), 1)]);
    }

    #[test]
    fn ranking_empty_map_is_empty() {
        assert!(rank_by_frequency(&FrequencyMap::new()).is_empty());
    }

    #[test]
    fn combined_sums_and_leaves_inputs_alone() {
        let a = freq(&[("dog", 3)]);
        let b = freq(&[("dog", 2), ("cat", 5)]);
        let a_before = a.clone();
        let b_before = b.clone();

        let combined = combined_frequencies(&a, &b);
        assert_eq!(combined, freq(&[("dog", 5), ("cat", 5)]));
        assert_eq!(combined.total_count(), a.total_count() + b.total_count());
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn combining_huge_counts_does_not_overflow() {
        let a = freq(&[("w", u32::MAX)]);
        let b = freq(&[("w", 1), ("v", 2)]);
        let combined = combined_frequencies(&a, &b);
        assert_eq!(combined.count("w"), u32::MAX);
        assert_eq!(most_frequent_words(&a, &b).unwrap(), vec!["w"]);
    }

    #[test]
    fn most_frequent_returns_all_tied_words_sorted() {
        let a = freq(&[("dog", 3)]);
        let b = freq(&[("dog", 2), ("cat", 5)]);
        assert_eq!(most_frequent_words(&a, &b).unwrap(), vec!["cat", "dog"]);
    }

    #[test]
    fn most_frequent_single_winner() {
        let a = freq(&[("hello", 2), ("world", 1)]);
        let b = freq(&[("world", 1), ("again", 1)]);
        assert_eq!(most_frequent_words(&a, &b).unwrap(), vec!["hello", "world"]);

        let c = freq(&[("rust", 4)]);
        assert_eq!(most_frequent_words(&c, &FrequencyMap::new()).unwrap(), vec!["rust"]);
        assert_eq!(most_frequent_words(&FrequencyMap::new(), &c).unwrap(), vec!["rust"]);
    }

    #[test]
    fn most_frequent_over_empty_maps_is_undefined() {
        let err = most_frequent_words(&FrequencyMap::new(), &FrequencyMap::new()).unwrap_err();
        assert!(matches!(err, Error::UndefinedAggregate));
    }
}
