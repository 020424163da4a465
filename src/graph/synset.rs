//! Synsets: the concept nodes of the graph.

use std::collections::HashMap;

use crate::graph::category::{WordCategory, WordClass};
use crate::graph::lex_unit::LexUnitId;
use crate::graph::relation::ConRel;

/// Identifier of a synset.
pub type SynsetId = u32;

/// A set of synonymous lexical units sharing one concept.
///
/// Synsets are immutable once the graph is frozen. Edges are stored by
/// relation type in both directions; the loader materializes inverse edges
/// explicitly, so `outgoing` already contains e.g. both `HasHypernym` and
/// `HasHyponym` entries where the source data defines either.
#[derive(Debug, Clone)]
pub struct Synset {
    pub(crate) id: SynsetId,
    pub(crate) category: WordCategory,
    pub(crate) word_class: WordClass,
    pub(crate) lex_units: Vec<LexUnitId>,
    pub(crate) paraphrase: Option<String>,
    pub(crate) outgoing: HashMap<ConRel, Vec<SynsetId>>,
    pub(crate) incoming: HashMap<ConRel, Vec<SynsetId>>,
}

impl Synset {
    pub(crate) fn new(id: SynsetId, category: WordCategory, word_class: WordClass) -> Self {
        Synset {
            id,
            category,
            word_class,
            lex_units: Vec::new(),
            paraphrase: None,
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// The synset id.
    pub fn id(&self) -> SynsetId {
        self.id
    }

    /// The word category.
    pub fn category(&self) -> WordCategory {
        self.category
    }

    /// The finer word class.
    pub fn word_class(&self) -> WordClass {
        self.word_class
    }

    /// The optional paraphrase (a short gloss of the concept).
    pub fn paraphrase(&self) -> Option<&str> {
        self.paraphrase.as_deref()
    }

    /// Ids of the lexical units belonging to this synset. Never empty in a
    /// frozen graph.
    pub fn lex_unit_ids(&self) -> Vec<LexUnitId> {
        self.lex_units.clone()
    }

    /// Ids of synsets this one points to via `rel`.
    pub fn related(&self, rel: ConRel) -> Vec<SynsetId> {
        self.outgoing.get(&rel).cloned().unwrap_or_default()
    }

    /// Ids of synsets pointing to this one via `rel`.
    pub fn related_incoming(&self, rel: ConRel) -> Vec<SynsetId> {
        self.incoming.get(&rel).cloned().unwrap_or_default()
    }

    /// Direct hypernyms of this synset.
    pub fn hypernyms(&self) -> Vec<SynsetId> {
        self.related(ConRel::HasHypernym)
    }

    /// Direct hyponyms of this synset.
    pub fn hyponyms(&self) -> Vec<SynsetId> {
        self.related(ConRel::HasHyponym)
    }

    /// Number of outgoing edges of any type.
    pub fn out_degree(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }

    // Edge insertion is deduplicating: the loader may replay symmetric
    // schemas from both sides.
    pub(crate) fn add_outgoing(&mut self, rel: ConRel, target: SynsetId) {
        let targets = self.outgoing.entry(rel).or_default();
        if !targets.contains(&target) {
            targets.push(target);
        }
    }

    pub(crate) fn add_incoming(&mut self, rel: ConRel, source: SynsetId) {
        let sources = self.incoming.entry(rel).or_default();
        if !sources.contains(&source) {
            sources.push(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_insertion_deduplicates() {
        let mut synset = Synset::new(1, WordCategory::Noun, WordClass::Plant);
        synset.add_outgoing(ConRel::HasHypernym, 2);
        synset.add_outgoing(ConRel::HasHypernym, 2);
        synset.add_outgoing(ConRel::HasHypernym, 3);

        assert_eq!(synset.hypernyms(), vec![2, 3]);
        assert_eq!(synset.out_degree(), 2);
    }

    #[test]
    fn test_related_returns_fresh_copies() {
        let mut synset = Synset::new(1, WordCategory::Noun, WordClass::Plant);
        synset.add_outgoing(ConRel::HasHyponym, 5);

        let mut first = synset.related(ConRel::HasHyponym);
        first.push(99);
        assert_eq!(synset.related(ConRel::HasHyponym), vec![5]);
    }

    #[test]
    fn test_missing_relation_is_empty() {
        let synset = Synset::new(1, WordCategory::Verb, WordClass::Contact);
        assert!(synset.related(ConRel::Causes).is_empty());
        assert!(synset.related_incoming(ConRel::Causes).is_empty());
    }
}
