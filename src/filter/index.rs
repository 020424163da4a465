//! Case-folded orthographic-form indices and query execution.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use ahash::AHashMap;
use log::info;
use regex::RegexBuilder;

use crate::error::Result;
use crate::filter::config::FilterConfig;
use crate::graph::{LexGraph, LexUnit, LexUnitId, OrthVariant, SynsetId, WordCategory};
use crate::util::levenshtein::levenshtein_distance_threshold;

/// Index for one word category.
#[derive(Debug, Default)]
struct CategoryIndex {
    /// Exact form → lex units exposing it, one map per variant slot.
    by_variant: HashMap<OrthVariant, AHashMap<String, Vec<LexUnitId>>>,
    /// Lowercased form → all observed casings.
    casings: AHashMap<String, BTreeSet<String>>,
}

/// Per-category orthographic-form indices over the frozen graph.
///
/// Literal case-sensitive queries are answered from the form index; literal
/// ignore-case queries expand the search string to every observed casing
/// first. Regex and edit-distance queries scan the candidate units' requested
/// variant strings directly, since neither is index-friendly.
#[derive(Debug)]
pub struct OrthIndex {
    graph: Arc<LexGraph>,
    by_category: HashMap<WordCategory, CategoryIndex>,
}

impl OrthIndex {
    /// Index every orthographic form in the graph.
    pub fn build(graph: Arc<LexGraph>) -> Self {
        let mut by_category: HashMap<WordCategory, CategoryIndex> = HashMap::new();
        let mut indexed = 0usize;

        for unit in graph.lex_units() {
            let Some(synset) = graph.synset(unit.synset_id()) else {
                continue;
            };
            let index = by_category.entry(synset.category()).or_default();
            for variant in OrthVariant::ALL {
                let Some(form) = unit.form(variant) else {
                    continue;
                };
                index
                    .by_variant
                    .entry(variant)
                    .or_default()
                    .entry(form.to_string())
                    .or_default()
                    .push(unit.id());
                index
                    .casings
                    .entry(form.to_lowercase())
                    .or_default()
                    .insert(form.to_string());
                indexed += 1;
            }
        }

        info!("indexed {indexed} orthographic forms");
        OrthIndex { graph, by_category }
    }

    /// Execute a query and return the matching lex unit ids, ascending and
    /// deduplicated. An empty search string or an empty restriction set
    /// yields an empty result; an invalid regex pattern is an error.
    pub fn search(&self, config: &FilterConfig) -> Result<Vec<LexUnitId>> {
        if config.search.is_empty()
            || config.categories.is_empty()
            || config.word_classes.is_empty()
            || config.variants.is_empty()
        {
            return Ok(Vec::new());
        }

        let mut hits: BTreeSet<LexUnitId> = BTreeSet::new();
        if config.reg_ex {
            self.search_regex(config, &mut hits)?;
        } else if config.edit_distance > 0 {
            self.search_edit_distance(config, &mut hits);
        } else {
            self.search_literal(config, &mut hits);
        }
        Ok(hits.into_iter().collect())
    }

    /// Execute a query and return the owning synsets of all matching lex
    /// units, ascending and deduplicated.
    pub fn search_synsets(&self, config: &FilterConfig) -> Result<Vec<SynsetId>> {
        let units = self.search(config)?;
        let mut synsets: BTreeSet<SynsetId> = BTreeSet::new();
        for id in units {
            if let Some(unit) = self.graph.lex_unit(id) {
                synsets.insert(unit.synset_id());
            }
        }
        Ok(synsets.into_iter().collect())
    }

    fn class_allowed(&self, config: &FilterConfig, unit: &LexUnit) -> bool {
        self.graph
            .synset(unit.synset_id())
            .is_some_and(|synset| config.word_classes.contains(&synset.word_class()))
    }

    fn search_literal(&self, config: &FilterConfig, hits: &mut BTreeSet<LexUnitId>) {
        for category in &config.categories {
            let Some(index) = self.by_category.get(category) else {
                continue;
            };

            // Ignore-case queries expand to every known casing up front.
            let needles: Vec<String> = if config.ignore_case {
                index
                    .casings
                    .get(&config.search.to_lowercase())
                    .map(|set| set.iter().cloned().collect())
                    .unwrap_or_default()
            } else {
                vec![config.search.clone()]
            };

            for variant in &config.variants {
                let Some(forms) = index.by_variant.get(variant) else {
                    continue;
                };
                for needle in &needles {
                    let Some(unit_ids) = forms.get(needle) else {
                        continue;
                    };
                    for &id in unit_ids {
                        if let Some(unit) = self.graph.lex_unit(id)
                            && self.class_allowed(config, unit)
                        {
                            hits.insert(id);
                        }
                    }
                }
            }
        }
    }

    fn search_regex(&self, config: &FilterConfig, hits: &mut BTreeSet<LexUnitId>) -> Result<()> {
        // Whole-form semantics; the edit-distance setting is ignored here.
        let pattern = format!(r"\A(?:{})\z", config.search);
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(config.ignore_case)
            .build()?;

        self.scan(config, hits, |form| regex.is_match(form));
        Ok(())
    }

    fn search_edit_distance(&self, config: &FilterConfig, hits: &mut BTreeSet<LexUnitId>) {
        let threshold = config.edit_distance as usize;
        let needle = if config.ignore_case {
            config.search.to_lowercase()
        } else {
            config.search.clone()
        };

        self.scan(config, hits, |form| {
            let candidate = if config.ignore_case {
                form.to_lowercase()
            } else {
                form.to_string()
            };
            levenshtein_distance_threshold(&needle, &candidate, threshold).is_some()
        });
    }

    fn scan<F: Fn(&str) -> bool>(
        &self,
        config: &FilterConfig,
        hits: &mut BTreeSet<LexUnitId>,
        matches: F,
    ) {
        for category in &config.categories {
            for synset in self.graph.synsets_in_category(*category) {
                if !config.word_classes.contains(&synset.word_class()) {
                    continue;
                }
                for unit in self.graph.lex_units_of(synset.id()) {
                    let matched = config.variants.iter().any(|variant| {
                        unit.form(*variant).is_some_and(|form| matches(form))
                    });
                    if matched {
                        hits.insert(unit.id());
                    }
                }
            }
        }
    }
}
