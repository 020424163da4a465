//! Semantic relatedness measures between synsets.
//!
//! Six measures over the least-common-subsumer machinery: three purely
//! path-based (SimplePath, Leacock–Chodorow, Wu–Palmer) and three based on
//! information content (Resnik, Jiang–Conrath, Lin), which additionally
//! require corpus frequency data. Every measure takes a `normalized_max`
//! argument: values `<= 0.0` return the raw score, positive values rescale
//! the raw score linearly into `[0, normalized_max]`.

pub mod engine;

pub use engine::{IC_TIE_EPSILON, RelatednessEngine};
