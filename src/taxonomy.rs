//! Hypernym distances, least common subsumers, and shortest paths.
//!
//! [`HypernymDistances`] is built once over the frozen graph and records, for
//! every synset, the shortest hypernym-edge distance to each of its
//! ancestors. [`LcsEngine`] answers pairwise least-common-subsumer, distance
//! and path queries on top of it, and computes the corpus-wide longest-LCS
//! record per category that the relatedness measures normalize against.

pub mod distance;
pub mod lcs;

pub use distance::HypernymDistances;
pub use lcs::{LcsEngine, LcsPath, LeastCommonSubsumer};
