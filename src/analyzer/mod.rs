//! Word-overlap track: tokens, counts, rankings and the DIFF/ALL score.

pub mod compare;
pub mod rank;
pub mod token;
