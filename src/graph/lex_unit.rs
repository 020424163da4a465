//! Lexical units: the word-sense nodes of the graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::graph::category::WordCategory;
use crate::graph::relation::LexRel;
use crate::graph::synset::SynsetId;

/// Identifier of a lexical unit.
pub type LexUnitId = u32;

/// One of the four orthographic-form slots of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrthVariant {
    /// The current main form. Always present.
    OrthForm,
    /// A current variant spelling.
    OrthVar,
    /// The main form in the old orthography.
    OldOrthForm,
    /// A variant spelling in the old orthography.
    OldOrthVar,
}

impl OrthVariant {
    /// All variant slots, in a fixed order.
    pub const ALL: [OrthVariant; 4] = [
        OrthVariant::OrthForm,
        OrthVariant::OrthVar,
        OrthVariant::OldOrthForm,
        OrthVariant::OldOrthVar,
    ];
}

/// An example sentence attached to a lexical unit, with an optional frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// The example text.
    pub text: String,
    /// The subcategorization frame the example illustrates, if any.
    pub frame: Option<String>,
}

/// One constituent of a compound decomposition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundConstituent {
    /// The constituent word form.
    pub word: String,
    /// A property tag such as "abbreviation" or "opaque", if any.
    pub property: Option<String>,
    /// The constituent's word category, when known.
    pub category: Option<WordCategory>,
    /// Back-references to lexical units realizing this constituent.
    pub lex_unit_ids: Vec<LexUnitId>,
}

/// Decomposition of a compound word into modifier(s) and head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundInfo {
    /// The modifier constituents, in surface order.
    pub modifiers: Vec<CompoundConstituent>,
    /// The head constituent.
    pub head: CompoundConstituent,
}

/// A cross-reference record linking a lexical unit to an external resource.
///
/// Records are attached after graph construction by matching
/// `lex_unit_id`; records naming an unknown unit are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    /// The lexical unit this record belongs to.
    pub lex_unit_id: LexUnitId,
    /// The relation the external entry stands in, e.g. "synonym".
    pub relation: String,
    /// The orthographic form of the external entry.
    pub external_word: String,
    /// The identifier of the external entry.
    pub external_id: String,
}

/// One word-sense entry, belonging to exactly one synset.
///
/// Identity is by id. Synonymy between units is derived from shared synset
/// membership and never stored as an edge here.
#[derive(Debug, Clone)]
pub struct LexUnit {
    pub(crate) id: LexUnitId,
    pub(crate) synset: SynsetId,
    pub(crate) orth_form: String,
    pub(crate) orth_var: Option<String>,
    pub(crate) old_orth_form: Option<String>,
    pub(crate) old_orth_var: Option<String>,
    pub(crate) sense: u32,
    pub(crate) style_marked: bool,
    pub(crate) artificial: bool,
    pub(crate) named_entity: bool,
    pub(crate) source: String,
    pub(crate) examples: Vec<Example>,
    pub(crate) frames: Vec<String>,
    pub(crate) compound: Option<CompoundInfo>,
    pub(crate) cross_references: Vec<CrossReference>,
    pub(crate) outgoing: HashMap<LexRel, Vec<LexUnitId>>,
    pub(crate) incoming: HashMap<LexRel, Vec<LexUnitId>>,
}

impl LexUnit {
    pub(crate) fn new(id: LexUnitId, synset: SynsetId, orth_form: String, sense: u32) -> Self {
        LexUnit {
            id,
            synset,
            orth_form,
            orth_var: None,
            old_orth_form: None,
            old_orth_var: None,
            sense,
            style_marked: false,
            artificial: false,
            named_entity: false,
            source: String::new(),
            examples: Vec::new(),
            frames: Vec::new(),
            compound: None,
            cross_references: Vec::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// The lexical unit id.
    pub fn id(&self) -> LexUnitId {
        self.id
    }

    /// Id of the owning synset.
    pub fn synset_id(&self) -> SynsetId {
        self.synset
    }

    /// The current main orthographic form.
    pub fn orth_form(&self) -> &str {
        &self.orth_form
    }

    /// The form stored in the given variant slot, if present.
    pub fn form(&self, variant: OrthVariant) -> Option<&str> {
        match variant {
            OrthVariant::OrthForm => Some(&self.orth_form),
            OrthVariant::OrthVar => self.orth_var.as_deref(),
            OrthVariant::OldOrthForm => self.old_orth_form.as_deref(),
            OrthVariant::OldOrthVar => self.old_orth_var.as_deref(),
        }
    }

    /// All orthographic forms this unit exposes, in slot order.
    pub fn all_forms(&self) -> Vec<&str> {
        OrthVariant::ALL
            .iter()
            .filter_map(|variant| self.form(*variant))
            .collect()
    }

    /// The sense number distinguishing this unit from other senses of the
    /// same form.
    pub fn sense(&self) -> u32 {
        self.sense
    }

    /// Whether the unit carries a style marking.
    pub fn is_style_marked(&self) -> bool {
        self.style_marked
    }

    /// Whether the unit is an artificial node without a surface realization.
    pub fn is_artificial(&self) -> bool {
        self.artificial
    }

    /// Whether the unit names a named entity.
    pub fn is_named_entity(&self) -> bool {
        self.named_entity
    }

    /// The source tag of the unit.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The attached example records.
    pub fn examples(&self) -> Vec<Example> {
        self.examples.clone()
    }

    /// The attached subcategorization frames.
    pub fn frames(&self) -> Vec<String> {
        self.frames.clone()
    }

    /// The compound decomposition, if this unit is a compound.
    pub fn compound_info(&self) -> Option<&CompoundInfo> {
        self.compound.as_ref()
    }

    /// Cross-reference records attached to this unit.
    pub fn cross_references(&self) -> Vec<CrossReference> {
        self.cross_references.clone()
    }

    /// Ids of units this one points to via `rel`.
    pub fn related(&self, rel: LexRel) -> Vec<LexUnitId> {
        self.outgoing.get(&rel).cloned().unwrap_or_default()
    }

    /// Ids of units pointing to this one via `rel`.
    pub fn related_incoming(&self, rel: LexRel) -> Vec<LexUnitId> {
        self.incoming.get(&rel).cloned().unwrap_or_default()
    }

    pub(crate) fn add_outgoing(&mut self, rel: LexRel, target: LexUnitId) {
        let targets = self.outgoing.entry(rel).or_default();
        if !targets.contains(&target) {
            targets.push(target);
        }
    }

    pub(crate) fn add_incoming(&mut self, rel: LexRel, source: LexUnitId) {
        let sources = self.incoming.entry(rel).or_default();
        if !sources.contains(&source) {
            sources.push(source);
        }
    }
}
