//! The semantic network graph: synsets, lexical units, and typed relations.
//!
//! The graph is an arena of nodes addressed by integer id. A [`GraphBuilder`]
//! collects nodes and edges during construction and freezes them into an
//! immutable [`LexGraph`]; every cross-reference between nodes is an id lookup
//! into the owning store, so there are no ownership cycles to manage.

pub mod category;
pub mod lex_unit;
pub mod relation;
pub mod store;
pub mod synset;

pub use category::{WordCategory, WordClass};
pub use lex_unit::{
    CompoundConstituent, CompoundInfo, CrossReference, Example, LexUnit, LexUnitId, OrthVariant,
};
pub use relation::{ConRel, LexRel, RelDirection};
pub use store::{GraphBuilder, LexGraph, LexUnitRecord};
pub use synset::{Synset, SynsetId};
