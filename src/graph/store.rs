//! Construction and storage of the semantic network graph.
//!
//! [`GraphBuilder`] is the only mutable surface: the loader adds nodes and
//! edges, then calls [`GraphBuilder::build`] to validate and freeze the
//! result into an immutable [`LexGraph`]. Every accessor on the frozen graph
//! that returns a collection allocates a fresh one, so callers can never
//! observe or disturb internal state.

use std::collections::HashMap;

use ahash::{AHashMap, AHashSet};
use log::{debug, info};

use crate::error::{Result, SemnetError};
use crate::graph::category::{WordCategory, WordClass};
use crate::graph::lex_unit::{CompoundInfo, CrossReference, Example, LexUnit, LexUnitId};
use crate::graph::relation::{ConRel, LexRel, RelDirection};
use crate::graph::synset::{Synset, SynsetId};

/// Plain input record for one lexical unit.
///
/// The loader fills in what the source data provides; optional slots default
/// to absent.
#[derive(Debug, Clone, Default)]
pub struct LexUnitRecord {
    /// Unit id. Must be unique across the graph.
    pub id: LexUnitId,
    /// Id of the owning synset. Must already exist.
    pub synset_id: SynsetId,
    /// The current main orthographic form. Required.
    pub orth_form: String,
    /// A current variant spelling.
    pub orth_var: Option<String>,
    /// The main form in the old orthography.
    pub old_orth_form: Option<String>,
    /// A variant spelling in the old orthography.
    pub old_orth_var: Option<String>,
    /// The sense number.
    pub sense: u32,
    /// Whether the unit carries a style marking.
    pub style_marked: bool,
    /// Whether the unit is artificial.
    pub artificial: bool,
    /// Whether the unit names a named entity.
    pub named_entity: bool,
    /// The source tag.
    pub source: String,
    /// Attached example records.
    pub examples: Vec<Example>,
    /// Attached subcategorization frames.
    pub frames: Vec<String>,
    /// Compound decomposition, if the unit is a compound.
    pub compound: Option<CompoundInfo>,
}

/// The construction-phase mutable store.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    synsets: AHashMap<SynsetId, Synset>,
    lex_units: AHashMap<LexUnitId, LexUnit>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        GraphBuilder::default()
    }

    /// Add a synset. Rejects duplicate ids and class/category combinations
    /// the class does not permit.
    pub fn add_synset(
        &mut self,
        id: SynsetId,
        category: WordCategory,
        word_class: WordClass,
    ) -> Result<()> {
        if self.synsets.contains_key(&id) {
            return Err(SemnetError::graph(format!("duplicate synset id {id}")));
        }
        if !word_class.is_valid_for(category) {
            return Err(SemnetError::graph(format!(
                "word class {word_class:?} is not valid for category {category}"
            )));
        }
        self.synsets.insert(id, Synset::new(id, category, word_class));
        Ok(())
    }

    /// Set the paraphrase of an existing synset.
    pub fn set_paraphrase(&mut self, id: SynsetId, paraphrase: &str) -> Result<()> {
        let synset = self
            .synsets
            .get_mut(&id)
            .ok_or_else(|| SemnetError::graph(format!("unknown synset id {id}")))?;
        synset.paraphrase = Some(paraphrase.to_string());
        Ok(())
    }

    /// Add a lexical unit to its owning synset.
    pub fn add_lex_unit(&mut self, record: LexUnitRecord) -> Result<()> {
        if self.lex_units.contains_key(&record.id) {
            return Err(SemnetError::graph(format!(
                "duplicate lex unit id {}",
                record.id
            )));
        }
        if record.orth_form.is_empty() {
            return Err(SemnetError::graph(format!(
                "lex unit {} has an empty orthographic form",
                record.id
            )));
        }
        let synset = self.synsets.get_mut(&record.synset_id).ok_or_else(|| {
            SemnetError::graph(format!(
                "lex unit {} references unknown synset {}",
                record.id, record.synset_id
            ))
        })?;
        synset.lex_units.push(record.id);

        let mut unit = LexUnit::new(record.id, record.synset_id, record.orth_form, record.sense);
        unit.orth_var = record.orth_var;
        unit.old_orth_form = record.old_orth_form;
        unit.old_orth_var = record.old_orth_var;
        unit.style_marked = record.style_marked;
        unit.artificial = record.artificial;
        unit.named_entity = record.named_entity;
        unit.source = record.source;
        unit.examples = record.examples;
        unit.frames = record.frames;
        unit.compound = record.compound;
        self.lex_units.insert(unit.id, unit);
        Ok(())
    }

    /// Add one conceptual relation edge.
    ///
    /// `RelDirection::Outgoing` records the directed edge `from --rel--> to`;
    /// `RelDirection::Incoming` records `to --rel--> from`. Forward and
    /// inverse edges are added independently, so a loader resolves symmetric
    /// ("both") and named-inverse ("revert") schemas by calling this once per
    /// materialized edge, consulting [`ConRel::inverse`].
    pub fn add_con_relation(
        &mut self,
        rel: ConRel,
        from: SynsetId,
        to: SynsetId,
        direction: RelDirection,
    ) -> Result<()> {
        if !self.synsets.contains_key(&from) {
            return Err(SemnetError::graph(format!("unknown synset id {from}")));
        }
        if !self.synsets.contains_key(&to) {
            return Err(SemnetError::graph(format!("unknown synset id {to}")));
        }
        let (source, target) = match direction {
            RelDirection::Outgoing => (from, to),
            RelDirection::Incoming => (to, from),
        };
        if let Some(synset) = self.synsets.get_mut(&source) {
            synset.add_outgoing(rel, target);
        }
        if let Some(synset) = self.synsets.get_mut(&target) {
            synset.add_incoming(rel, source);
        }
        Ok(())
    }

    /// Add one lexical relation edge; direction semantics as in
    /// [`GraphBuilder::add_con_relation`].
    pub fn add_lex_relation(
        &mut self,
        rel: LexRel,
        from: LexUnitId,
        to: LexUnitId,
        direction: RelDirection,
    ) -> Result<()> {
        if !self.lex_units.contains_key(&from) {
            return Err(SemnetError::graph(format!("unknown lex unit id {from}")));
        }
        if !self.lex_units.contains_key(&to) {
            return Err(SemnetError::graph(format!("unknown lex unit id {to}")));
        }
        let (source, target) = match direction {
            RelDirection::Outgoing => (from, to),
            RelDirection::Incoming => (to, from),
        };
        if let Some(unit) = self.lex_units.get_mut(&source) {
            unit.add_outgoing(rel, target);
        }
        if let Some(unit) = self.lex_units.get_mut(&target) {
            unit.add_incoming(rel, source);
        }
        Ok(())
    }

    /// Attach cross-reference records to their lexical units by id match.
    /// Records naming an unknown unit are skipped.
    pub fn attach_cross_references(&mut self, records: Vec<CrossReference>) {
        for record in records {
            match self.lex_units.get_mut(&record.lex_unit_id) {
                Some(unit) => unit.cross_references.push(record),
                None => {
                    debug!(
                        "skipping cross-reference for unknown lex unit {}",
                        record.lex_unit_id
                    );
                }
            }
        }
    }

    /// Validate and freeze the graph.
    ///
    /// Checks that every synset owns at least one lexical unit, that exactly
    /// one synset has no hypernyms (the root), and that every synset's
    /// category equals the category of each of its non-root direct hypernyms.
    pub fn build(self) -> Result<LexGraph> {
        for synset in self.synsets.values() {
            if synset.lex_units.is_empty() {
                return Err(SemnetError::graph(format!(
                    "synset {} has no lexical units",
                    synset.id
                )));
            }
        }

        let mut roots: Vec<SynsetId> = self
            .synsets
            .values()
            .filter(|s| s.related(ConRel::HasHypernym).is_empty())
            .map(Synset::id)
            .collect();
        roots.sort_unstable();
        let root = match roots.as_slice() {
            [root] => *root,
            [] => return Err(SemnetError::graph("graph has no root synset")),
            _ => {
                return Err(SemnetError::graph(format!(
                    "graph has multiple root synsets: {roots:?}"
                )));
            }
        };

        for synset in self.synsets.values() {
            for hypernym_id in synset.hypernyms() {
                if hypernym_id == root {
                    continue;
                }
                // Presence was checked on edge insertion.
                let hypernym = &self.synsets[&hypernym_id];
                if hypernym.category != synset.category {
                    return Err(SemnetError::graph(format!(
                        "synset {} ({}) has hypernym {} ({}) in a different category",
                        synset.id, synset.category, hypernym.id, hypernym.category
                    )));
                }
            }
        }

        let mut by_category: HashMap<WordCategory, Vec<SynsetId>> = HashMap::new();
        let mut by_class: HashMap<WordClass, Vec<SynsetId>> = HashMap::new();
        for synset in self.synsets.values() {
            by_category.entry(synset.category).or_default().push(synset.id);
            by_class.entry(synset.word_class).or_default().push(synset.id);
        }
        for ids in by_category.values_mut() {
            ids.sort_unstable();
        }
        for ids in by_class.values_mut() {
            ids.sort_unstable();
        }

        info!(
            "froze graph: {} synsets, {} lex units, root {}",
            self.synsets.len(),
            self.lex_units.len(),
            root
        );

        Ok(LexGraph {
            synsets: self.synsets,
            lex_units: self.lex_units,
            by_category,
            by_class,
            root,
        })
    }
}

/// The frozen, read-only semantic network graph.
#[derive(Debug)]
pub struct LexGraph {
    synsets: AHashMap<SynsetId, Synset>,
    lex_units: AHashMap<LexUnitId, LexUnit>,
    by_category: HashMap<WordCategory, Vec<SynsetId>>,
    by_class: HashMap<WordClass, Vec<SynsetId>>,
    root: SynsetId,
}

impl LexGraph {
    /// Look up a synset by id.
    pub fn synset(&self, id: SynsetId) -> Option<&Synset> {
        self.synsets.get(&id)
    }

    /// Look up a lexical unit by id.
    pub fn lex_unit(&self, id: LexUnitId) -> Option<&LexUnit> {
        self.lex_units.get(&id)
    }

    /// Id of the single root synset.
    pub fn root_id(&self) -> SynsetId {
        self.root
    }

    /// The single root synset.
    pub fn root(&self) -> &Synset {
        &self.synsets[&self.root]
    }

    /// Number of synsets.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Number of lexical units.
    pub fn lex_unit_count(&self) -> usize {
        self.lex_units.len()
    }

    /// All synsets, in unspecified order. Allocates per call.
    pub fn synsets(&self) -> Vec<&Synset> {
        self.synsets.values().collect()
    }

    /// All lexical units, in unspecified order. Allocates per call.
    pub fn lex_units(&self) -> Vec<&LexUnit> {
        self.lex_units.values().collect()
    }

    /// Ids of all synsets in the given category, ascending.
    pub fn synset_ids_in_category(&self, category: WordCategory) -> Vec<SynsetId> {
        self.by_category.get(&category).cloned().unwrap_or_default()
    }

    /// All synsets in the given category, ascending by id.
    pub fn synsets_in_category(&self, category: WordCategory) -> Vec<&Synset> {
        self.synset_ids_in_category(category)
            .iter()
            .map(|id| &self.synsets[id])
            .collect()
    }

    /// All synsets with the given word class, ascending by id.
    pub fn synsets_with_class(&self, word_class: WordClass) -> Vec<&Synset> {
        self.by_class
            .get(&word_class)
            .map(|ids| ids.iter().map(|id| &self.synsets[id]).collect())
            .unwrap_or_default()
    }

    /// The lexical units of the given synset.
    pub fn lex_units_of(&self, id: SynsetId) -> Vec<&LexUnit> {
        self.synset(id)
            .map(|synset| {
                synset
                    .lex_units
                    .iter()
                    .map(|unit_id| &self.lex_units[unit_id])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Synonyms of a lexical unit: the co-members of its owning synset,
    /// the unit itself excluded. Unknown ids yield an empty result.
    pub fn synonyms(&self, id: LexUnitId) -> Vec<&LexUnit> {
        self.lex_unit(id)
            .map(|unit| {
                self.lex_units_of(unit.synset)
                    .into_iter()
                    .filter(|other| other.id != id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Lexical units whose current main form equals `form` exactly.
    pub fn lex_units_with_orth_form(&self, form: &str) -> Vec<&LexUnit> {
        self.lex_units
            .values()
            .filter(|unit| unit.orth_form == form)
            .collect()
    }

    /// Synsets reachable from `id` over `rel`, ascending by id. For a
    /// transitive relation this is the full closure; for a non-transitive one
    /// it is the direct neighbors. The start synset is not included.
    pub fn transitive_related(&self, id: SynsetId, rel: ConRel) -> Vec<SynsetId> {
        let Some(start) = self.synset(id) else {
            return Vec::new();
        };
        if !rel.is_transitive() {
            return start.related(rel);
        }

        let mut seen = AHashSet::new();
        let mut queue: Vec<SynsetId> = start.related(rel);
        let mut result = Vec::new();
        while let Some(next) = queue.pop() {
            if !seen.insert(next) {
                continue;
            }
            result.push(next);
            if let Some(synset) = self.synset(next) {
                queue.extend(synset.related(rel));
            }
        }
        result.sort_unstable();
        result
    }
}
