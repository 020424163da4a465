//! Typed relations between synsets and between lexical units.
//!
//! Relation directionality is a static property of the relation type: every
//! conceptual relation names its inverse (a symmetric relation is its own
//! inverse), and the loader materializes forward and inverse edges
//! independently at construction time. Nothing is resolved per query.

use serde::{Deserialize, Serialize};

/// Direction of an edge being added during graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelDirection {
    /// Record the edge on the source's outgoing map.
    Outgoing,
    /// Record the edge on the target's incoming map.
    Incoming,
}

/// A conceptual relation between two synsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConRel {
    /// The target is more general than the source.
    HasHypernym,
    /// The target is more specific than the source.
    HasHyponym,
    /// The target is a component part of the source.
    HasComponentMeronym,
    /// The source is a component part of the target.
    HasComponentHolonym,
    /// The target is a member of the source.
    HasMemberMeronym,
    /// The source is a member of the target.
    HasMemberHolonym,
    /// The target is a substance the source is made of.
    HasSubstanceMeronym,
    /// The source is a substance the target is made of.
    HasSubstanceHolonym,
    /// The target is a portion of the source.
    HasPortionMeronym,
    /// The source is a portion of the target.
    HasPortionHolonym,
    /// The source entails the target.
    Entails,
    /// The source is entailed by the target.
    IsEntailedBy,
    /// The source causes the target.
    Causes,
    /// The source is caused by the target.
    IsCausedBy,
    /// Unspecified association; symmetric.
    IsRelatedTo,
}

impl ConRel {
    /// All conceptual relation types.
    pub const ALL: [ConRel; 15] = [
        ConRel::HasHypernym,
        ConRel::HasHyponym,
        ConRel::HasComponentMeronym,
        ConRel::HasComponentHolonym,
        ConRel::HasMemberMeronym,
        ConRel::HasMemberHolonym,
        ConRel::HasSubstanceMeronym,
        ConRel::HasSubstanceHolonym,
        ConRel::HasPortionMeronym,
        ConRel::HasPortionHolonym,
        ConRel::Entails,
        ConRel::IsEntailedBy,
        ConRel::Causes,
        ConRel::IsCausedBy,
        ConRel::IsRelatedTo,
    ];

    /// Whether chains of this relation may be collapsed transitively.
    pub fn is_transitive(&self) -> bool {
        matches!(
            self,
            ConRel::HasHypernym
                | ConRel::HasHyponym
                | ConRel::HasComponentMeronym
                | ConRel::HasComponentHolonym
                | ConRel::HasMemberMeronym
                | ConRel::HasMemberHolonym
                | ConRel::HasSubstanceMeronym
                | ConRel::HasSubstanceHolonym
                | ConRel::HasPortionMeronym
                | ConRel::HasPortionHolonym
        )
    }

    /// The named inverse of this relation. A symmetric relation is its own
    /// inverse.
    pub fn inverse(&self) -> ConRel {
        match self {
            ConRel::HasHypernym => ConRel::HasHyponym,
            ConRel::HasHyponym => ConRel::HasHypernym,
            ConRel::HasComponentMeronym => ConRel::HasComponentHolonym,
            ConRel::HasComponentHolonym => ConRel::HasComponentMeronym,
            ConRel::HasMemberMeronym => ConRel::HasMemberHolonym,
            ConRel::HasMemberHolonym => ConRel::HasMemberMeronym,
            ConRel::HasSubstanceMeronym => ConRel::HasSubstanceHolonym,
            ConRel::HasSubstanceHolonym => ConRel::HasSubstanceMeronym,
            ConRel::HasPortionMeronym => ConRel::HasPortionHolonym,
            ConRel::HasPortionHolonym => ConRel::HasPortionMeronym,
            ConRel::Entails => ConRel::IsEntailedBy,
            ConRel::IsEntailedBy => ConRel::Entails,
            ConRel::Causes => ConRel::IsCausedBy,
            ConRel::IsCausedBy => ConRel::Causes,
            ConRel::IsRelatedTo => ConRel::IsRelatedTo,
        }
    }

    /// Whether the relation is symmetric.
    pub fn is_symmetric(&self) -> bool {
        *self == self.inverse()
    }
}

/// A lexical relation between two lexical units.
///
/// Synonymy is not listed: it is derived from shared synset membership and
/// never stored as an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexRel {
    /// The target means the opposite of the source; symmetric.
    HasAntonym,
    /// The source is an adjective derived from the target.
    HasPertainym,
    /// The source is a participle of the target verb.
    HasParticiple,
}

impl LexRel {
    /// All lexical relation types.
    pub const ALL: [LexRel; 3] = [LexRel::HasAntonym, LexRel::HasPertainym, LexRel::HasParticiple];

    /// The inverse of this relation, if one exists. Only symmetric lexical
    /// relations have an inverse; the others are directed-only.
    pub fn inverse(&self) -> Option<LexRel> {
        match self {
            LexRel::HasAntonym => Some(LexRel::HasAntonym),
            LexRel::HasPertainym | LexRel::HasParticiple => None,
        }
    }
}
