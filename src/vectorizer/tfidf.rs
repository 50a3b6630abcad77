use crate::{
    error::{Error, Result},
    loader::DocumentSource,
    utils::sort::sort_by_score_asc,
    vectorizer::{
        corpus::{inverse_document_frequency, IdfMap},
        tf::{term_frequency, TfMap},
    },
};

/// `(word, tf * idf)` pairs, ascending by score, equal scores alphabetical
pub type TfIdfList = Vec<(String, f64)>;

/// Combine a document's TF with a corpus IDF
///
/// # Arguments
/// * `tf` - term frequencies of the target document
/// * `idf` - inverse document frequencies of the reference corpus
///
/// # Returns
/// * `TfIdfList` - one entry per distinct target word, ascending by score
///
/// # Errors
/// * `MissingCorpusWord` for the first target word (first-seen order) that
///   no corpus document contains
pub fn combine(tf: &TfMap, idf: &IdfMap) -> Result<TfIdfList> {
    let mut scores = tf
        .iter()
        .map(|(word, tf_value)| match idf.get(word) {
            Some(idf_value) => Ok((word.to_string(), tf_value * idf_value)),
            None => Err(Error::MissingCorpusWord {
                word: word.to_string(),
            }),
        })
        .collect::<Result<TfIdfList>>()?;
    sort_by_score_asc(&mut scores);
    Ok(scores)
}

/// TF-IDF of every word of `target` against the corpus `corpus`
///
/// The corpus normally includes the target document. It does not have to,
/// but then every target word must still occur in some corpus document.
///
/// # Errors
/// * `DocumentUnavailable` when any document cannot be loaded
/// * `EmptyInput` when the target has no tokens or the corpus is empty
/// * `MissingCorpusWord` when a target word occurs in no corpus document
pub fn tfidf<S, I>(source: &S, target: &str, corpus: &[I]) -> Result<TfIdfList>
where
    S: DocumentSource + Sync + ?Sized,
    I: AsRef<str> + Sync,
{
    let tf = term_frequency(source, target)?;
    let idf = inverse_document_frequency(source, corpus)?;
    combine(&tf, &idf)
}
