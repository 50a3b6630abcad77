//! Weighting track: term frequency, corpus IDF and their TF-IDF product.

pub mod corpus;
pub mod tf;
pub mod tfidf;
