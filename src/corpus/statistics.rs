//! Cumulative frequencies and information content over the hyponymy graph.

use std::collections::HashMap;

use ahash::AHashMap;
use log::info;

use crate::corpus::frequency::FrequencyList;
use crate::graph::{LexGraph, SynsetId, WordCategory};

/// Per-synset cumulative frequencies and information content, computed once
/// from the raw per-category frequency tables.
///
/// The individual frequency of a synset is 1 plus the table counts of every
/// orthographic form it exposes; its cumulative frequency adds the cumulative
/// frequencies of all direct hyponyms. The root is special: its individual
/// frequency is 1 in every category, and its cumulative frequency per
/// category sums only the category-matching direct hyponyms (the root has
/// hyponyms of every category).
///
/// `IC(s) = -log10(cum(s) / cum(root))` within the synset's category;
/// `IC(root)` is exactly 0.0 in every category.
#[derive(Debug)]
pub struct CorpusStatistics {
    root: SynsetId,
    cumulative: AHashMap<SynsetId, u64>,
    root_cumulative: HashMap<WordCategory, u64>,
    ic: AHashMap<SynsetId, f64>,
    max_ic: HashMap<WordCategory, f64>,
    jcn_max: HashMap<WordCategory, f64>,
}

impl CorpusStatistics {
    /// Propagate the raw tables over the graph. Categories without a table
    /// behave as if their table were empty.
    pub fn compute(graph: &LexGraph, tables: &HashMap<WordCategory, FrequencyList>) -> Self {
        let root = graph.root_id();
        let empty = FrequencyList::new();

        let mut cumulative: AHashMap<SynsetId, u64> = AHashMap::new();
        for synset in graph.synsets() {
            if synset.id() != root {
                cumulative_frequency(graph, tables, &empty, &mut cumulative, synset.id());
            }
        }

        let mut root_cumulative = HashMap::new();
        for category in WordCategory::ALL {
            let sum: u64 = graph
                .root()
                .hyponyms()
                .iter()
                .filter(|id| {
                    graph
                        .synset(**id)
                        .is_some_and(|child| child.category() == category)
                })
                .filter_map(|id| cumulative.get(id).copied())
                .sum();
            root_cumulative.insert(category, 1 + sum);
        }

        let mut ic: AHashMap<SynsetId, f64> = AHashMap::new();
        let mut max_ic: HashMap<WordCategory, f64> = HashMap::new();
        for category in WordCategory::ALL {
            max_ic.insert(category, 0.0);
        }
        for synset in graph.synsets() {
            if synset.id() == root {
                continue;
            }
            let root_total = root_cumulative[&synset.category()];
            let value = -((cumulative[&synset.id()] as f64) / (root_total as f64)).log10();
            let entry = max_ic.entry(synset.category()).or_insert(0.0);
            if value > *entry {
                *entry = value;
            }
            ic.insert(synset.id(), value);
        }

        let mut jcn_max = HashMap::new();
        for category in WordCategory::ALL {
            jcn_max.insert(category, 2.0 * (root_cumulative[&category] as f64).log10());
        }

        info!(
            "computed corpus statistics for {} synsets, root totals {:?}",
            cumulative.len() + 1,
            root_cumulative
        );

        CorpusStatistics {
            root,
            cumulative,
            root_cumulative,
            ic,
            max_ic,
            jcn_max,
        }
    }

    /// Cumulative frequency of a non-root synset, or `None` for an unknown
    /// id. For the root, use
    /// [`CorpusStatistics::root_cumulative_frequency`].
    pub fn cumulative_frequency(&self, id: SynsetId) -> Option<u64> {
        self.cumulative.get(&id).copied()
    }

    /// Cumulative frequency of the root within one category.
    pub fn root_cumulative_frequency(&self, category: WordCategory) -> u64 {
        self.root_cumulative.get(&category).copied().unwrap_or(1)
    }

    /// Information content of a synset; exactly 0.0 for the root in every
    /// category, `None` for an unknown id.
    pub fn information_content(&self, id: SynsetId) -> Option<f64> {
        if id == self.root {
            return Some(0.0);
        }
        self.ic.get(&id).copied()
    }

    /// The largest information content observed in the category.
    pub fn max_ic(&self, category: WordCategory) -> f64 {
        self.max_ic.get(&category).copied().unwrap_or(0.0)
    }

    /// The Jiang–Conrath distance ceiling of the category:
    /// `2 * -log10(1 / cum(root))`.
    pub fn jcn_max(&self, category: WordCategory) -> f64 {
        self.jcn_max.get(&category).copied().unwrap_or(0.0)
    }
}

/// Memoized bottom-up recursion over hyponym edges. Each synset is computed
/// once and reused by all of its hypernyms; an unmemoized walk would be
/// exponential on a DAG.
fn cumulative_frequency(
    graph: &LexGraph,
    tables: &HashMap<WordCategory, FrequencyList>,
    empty: &FrequencyList,
    memo: &mut AHashMap<SynsetId, u64>,
    id: SynsetId,
) -> u64 {
    if let Some(&value) = memo.get(&id) {
        return value;
    }
    let Some(synset) = graph.synset(id) else {
        return 0;
    };
    let table = tables.get(&synset.category()).unwrap_or(empty);

    let mut value = 1;
    for unit in graph.lex_units_of(id) {
        for form in unit.all_forms() {
            value += table.count(form);
        }
    }
    for hyponym in synset.hyponyms() {
        value += cumulative_frequency(graph, tables, empty, memo, hyponym);
    }
    memo.insert(id, value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{ConRel, GraphBuilder, LexUnitRecord, RelDirection, WordClass};

    fn add_synset(
        builder: &mut GraphBuilder,
        id: SynsetId,
        category: WordCategory,
        word_class: WordClass,
        word: &str,
    ) {
        builder.add_synset(id, category, word_class).unwrap();
        builder
            .add_lex_unit(LexUnitRecord {
                id: id * 100,
                synset_id: id,
                orth_form: word.to_string(),
                sense: 1,
                ..Default::default()
            })
            .unwrap();
    }

    fn hypernym_edge(builder: &mut GraphBuilder, from: SynsetId, to: SynsetId) {
        builder
            .add_con_relation(ConRel::HasHypernym, from, to, RelDirection::Outgoing)
            .unwrap();
        builder
            .add_con_relation(ConRel::HasHyponym, to, from, RelDirection::Outgoing)
            .unwrap();
    }

    /// Root (1) over nouns 2→{3,4} and verb 5.
    fn graph() -> LexGraph {
        let mut builder = GraphBuilder::new();
        add_synset(&mut builder, 1, WordCategory::Noun, WordClass::Tops, "Wurzel");
        add_synset(&mut builder, 2, WordCategory::Noun, WordClass::Food, "Obst");
        add_synset(&mut builder, 3, WordCategory::Noun, WordClass::Food, "Apfel");
        add_synset(&mut builder, 4, WordCategory::Noun, WordClass::Food, "Birne");
        add_synset(&mut builder, 5, WordCategory::Verb, WordClass::Consumption, "essen");
        hypernym_edge(&mut builder, 2, 1);
        hypernym_edge(&mut builder, 3, 2);
        hypernym_edge(&mut builder, 4, 2);
        hypernym_edge(&mut builder, 5, 1);
        builder.build().unwrap()
    }

    fn tables() -> HashMap<WordCategory, FrequencyList> {
        let mut nouns = FrequencyList::new();
        nouns.add("Apfel", 9);
        nouns.add("Birne", 4);
        nouns.add("Obst", 2);
        let mut verbs = FrequencyList::new();
        verbs.add("essen", 19);
        let mut tables = HashMap::new();
        tables.insert(WordCategory::Noun, nouns);
        tables.insert(WordCategory::Verb, verbs);
        tables
    }

    #[test]
    fn test_cumulative_frequencies() {
        let graph = graph();
        let stats = CorpusStatistics::compute(&graph, &tables());

        // Leaves: 1 + own count.
        assert_eq!(stats.cumulative_frequency(3), Some(10));
        assert_eq!(stats.cumulative_frequency(4), Some(5));
        // Inner node: 1 + own count + children.
        assert_eq!(stats.cumulative_frequency(2), Some(18));
        assert_eq!(stats.cumulative_frequency(5), Some(20));
        assert_eq!(stats.cumulative_frequency(999), None);
    }

    #[test]
    fn test_root_cumulative_per_category() {
        let graph = graph();
        let stats = CorpusStatistics::compute(&graph, &tables());

        // 1 + category-matching direct hyponyms only.
        assert_eq!(stats.root_cumulative_frequency(WordCategory::Noun), 19);
        assert_eq!(stats.root_cumulative_frequency(WordCategory::Verb), 21);
        assert_eq!(stats.root_cumulative_frequency(WordCategory::Adjective), 1);
    }

    #[test]
    fn test_information_content() {
        let graph = graph();
        let stats = CorpusStatistics::compute(&graph, &tables());

        assert_eq!(stats.information_content(1), Some(0.0));
        let ic3 = stats.information_content(3).unwrap();
        let expected = -(10.0f64 / 19.0).log10();
        assert!((ic3 - expected).abs() < 1e-12);
        // More general concepts carry less information.
        assert!(stats.information_content(2).unwrap() < ic3);
        assert_eq!(stats.information_content(999), None);
    }

    #[test]
    fn test_max_ic_and_jcn_max() {
        let graph = graph();
        let stats = CorpusStatistics::compute(&graph, &tables());

        let ic4 = stats.information_content(4).unwrap();
        assert!((stats.max_ic(WordCategory::Noun) - ic4).abs() < 1e-12);
        let expected_jcn = 2.0 * 19.0f64.log10();
        assert!((stats.jcn_max(WordCategory::Noun) - expected_jcn).abs() < 1e-12);
        // A category with only the root keeps the defaults.
        assert_eq!(stats.max_ic(WordCategory::Adjective), 0.0);
        assert!((stats.jcn_max(WordCategory::Adjective)).abs() < 1e-12);
    }

    #[test]
    fn test_missing_tables_behave_as_empty() {
        let graph = graph();
        let stats = CorpusStatistics::compute(&graph, &HashMap::new());

        assert_eq!(stats.cumulative_frequency(3), Some(1));
        assert_eq!(stats.cumulative_frequency(2), Some(3));
        assert_eq!(stats.root_cumulative_frequency(WordCategory::Noun), 4);
    }
}
