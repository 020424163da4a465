//! Corpus frequencies and information content.
//!
//! A [`FrequencyList`] is the raw word→count table for one word category.
//! [`CorpusStatistics`] propagates those counts bottom-up over the hyponymy
//! graph into per-synset cumulative frequencies and information-content
//! values, which the three IC-based relatedness measures consume.

pub mod frequency;
pub mod statistics;

pub use frequency::FrequencyList;
pub use statistics::CorpusStatistics;
