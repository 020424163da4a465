//! # Semnet
//!
//! An in-memory semantic network for a lexicon: concept nodes (synsets)
//! linked by typed conceptual relations, word senses (lexical units) linked
//! by typed lexical relations, and WordNet-style relatedness scoring on top.
//!
//! ## Features
//!
//! - Arena-style graph store with O(1) id lookup and category partitions
//! - Shortest hypernym distances and least common subsumers over the DAG
//! - Enumeration of all concrete shortest paths between two concepts
//! - Corpus frequency propagation and information content
//! - Six relatedness measures with optional linear rescaling
//! - Case-folded literal, regex, and edit-distance search over word forms

pub mod corpus;
pub mod error;
pub mod filter;
pub mod graph;
pub mod network;
pub mod relatedness;
pub mod taxonomy;
pub mod util;

pub mod prelude {
    //! Common imports for working with a semantic network.
    pub use crate::corpus::FrequencyList;
    pub use crate::error::{Result, SemnetError};
    pub use crate::filter::FilterConfig;
    pub use crate::graph::{
        ConRel, GraphBuilder, LexGraph, LexRel, LexUnitRecord, OrthVariant, RelDirection,
        WordCategory, WordClass,
    };
    pub use crate::network::SemanticNetwork;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
