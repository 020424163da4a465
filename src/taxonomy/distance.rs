//! Shortest hypernym distances from every synset to its ancestors.

use std::collections::HashMap;

use ahash::AHashMap;
use log::info;
use rayon::prelude::*;

use crate::graph::{LexGraph, SynsetId, WordCategory};

/// Per-synset shortest distances over hypernym edges.
///
/// For each synset the builder walks depth-first up through the hypernym
/// edges, recording the distance to an ancestor when it is first reached and
/// overwriting it when a shorter path arrives later. The walk continues from
/// an ancestor even when the current path to it was not the shortest: a DAG
/// may reach the same ancestor over several paths, and the ancestors above
/// it must be visited from every one. Acyclicity bounds the walk.
///
/// Every synset is its own ancestor at distance 0.
#[derive(Debug)]
pub struct HypernymDistances {
    distances: AHashMap<SynsetId, AHashMap<SynsetId, u32>>,
    max_distance: AHashMap<SynsetId, u32>,
    category_depth: HashMap<WordCategory, u32>,
    global_max: u32,
}

impl HypernymDistances {
    /// Build the distance maps for every synset in the graph.
    pub fn build(graph: &LexGraph) -> Self {
        let ids: Vec<SynsetId> = graph.synsets().iter().map(|s| s.id()).collect();

        // Per-synset walks are independent of each other.
        let built: Vec<(SynsetId, AHashMap<SynsetId, u32>)> = ids
            .par_iter()
            .map(|&id| (id, ancestor_map(graph, id)))
            .collect();

        let mut distances = AHashMap::with_capacity(built.len());
        let mut max_distance = AHashMap::with_capacity(built.len());
        for (id, map) in built {
            let max = map.values().copied().max().unwrap_or(0);
            max_distance.insert(id, max);
            distances.insert(id, map);
        }

        let mut category_depth: HashMap<WordCategory, u32> = HashMap::new();
        for category in WordCategory::ALL {
            let depth = graph
                .synset_ids_in_category(category)
                .iter()
                .filter_map(|id| max_distance.get(id).copied())
                .max()
                .unwrap_or(0);
            category_depth.insert(category, depth);
        }
        let global_max = category_depth.values().copied().max().unwrap_or(0);

        info!(
            "built hypernym distances for {} synsets, max depth {}",
            distances.len(),
            global_max
        );

        HypernymDistances {
            distances,
            max_distance,
            category_depth,
            global_max,
        }
    }

    /// Shortest distance from `id` up to `ancestor`, or `None` when `id` is
    /// unknown or `ancestor` is not one of its ancestors.
    pub fn distance(&self, id: SynsetId, ancestor: SynsetId) -> Option<u32> {
        self.distances.get(&id)?.get(&ancestor).copied()
    }

    /// All ancestors of `id` with their shortest distances. Allocates per
    /// call; unknown ids yield an empty result.
    pub fn ancestors(&self, id: SynsetId) -> Vec<(SynsetId, u32)> {
        self.distances
            .get(&id)
            .map(|map| map.iter().map(|(&a, &d)| (a, d)).collect())
            .unwrap_or_default()
    }

    /// The largest recorded ancestor distance of `id`.
    pub fn max_distance(&self, id: SynsetId) -> Option<u32> {
        self.max_distance.get(&id).copied()
    }

    /// The maximum of [`HypernymDistances::max_distance`] over all synsets of
    /// the category.
    pub fn category_depth(&self, category: WordCategory) -> u32 {
        self.category_depth.get(&category).copied().unwrap_or(0)
    }

    /// The maximum of [`HypernymDistances::category_depth`] over all
    /// categories; a pruning bound for the longest-LCS search.
    pub fn global_max(&self) -> u32 {
        self.global_max
    }

    pub(crate) fn map(&self, id: SynsetId) -> Option<&AHashMap<SynsetId, u32>> {
        self.distances.get(&id)
    }
}

fn ancestor_map(graph: &LexGraph, id: SynsetId) -> AHashMap<SynsetId, u32> {
    let mut map = AHashMap::new();
    map.insert(id, 0);
    walk(graph, &mut map, id, 0);
    map
}

fn walk(graph: &LexGraph, map: &mut AHashMap<SynsetId, u32>, current: SynsetId, depth: u32) {
    let Some(synset) = graph.synset(current) else {
        return;
    };
    for hypernym in synset.hypernyms() {
        let d = depth + 1;
        let known = map.get(&hypernym).copied();
        if known.is_none_or(|k| d < k) {
            map.insert(hypernym, d);
        }
        // Keep walking even over a non-improving path; ancestors above may
        // still be closer this way.
        walk(graph, map, hypernym, d);
    }
}
