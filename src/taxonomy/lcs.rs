//! Least common subsumers and hypernym paths between synsets.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use crate::graph::{LexGraph, SynsetId, WordCategory};
use crate::taxonomy::distance::HypernymDistances;

/// A common ancestor of two synsets at minimal combined hypernym distance.
///
/// Equal-distance distinct ancestors of the same pair coexist as separate
/// records. Equality is structural; the pair is stored with the smaller id
/// first, so the same unordered pair always compares equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeastCommonSubsumer {
    /// The subsuming ancestor synset.
    pub ancestor: SynsetId,
    /// The unordered pair of query synsets, smaller id first.
    pub pair: (SynsetId, SynsetId),
    /// Combined length of the shortest paths from both pair members up to
    /// the ancestor.
    pub distance: u32,
}

impl LeastCommonSubsumer {
    pub(crate) fn new(ancestor: SynsetId, a: SynsetId, b: SynsetId, distance: u32) -> Self {
        let pair = if a <= b { (a, b) } else { (b, a) };
        LeastCommonSubsumer {
            ancestor,
            pair,
            distance,
        }
    }
}

/// One concrete shortest-path witness for a least common subsumer: the full
/// hypernym walk from each query synset up to the subsumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsPath {
    /// The subsuming ancestor both walks end in.
    pub lcs: SynsetId,
    /// Walk from the first query synset to the subsumer, endpoints included.
    pub first: Vec<SynsetId>,
    /// Walk from the second query synset to the subsumer, endpoints included.
    pub second: Vec<SynsetId>,
}

/// Pairwise least-common-subsumer, distance and path queries, plus the
/// per-category corpus-wide longest-LCS record.
///
/// The longest-LCS computation is the only super-linear operation in the
/// crate; it runs at most once per category and the result is cached for the
/// engine's lifetime behind an idempotent write (concurrent first callers may
/// both compute, the value is deterministic and the first insert wins).
#[derive(Debug)]
pub struct LcsEngine {
    graph: Arc<LexGraph>,
    distances: Arc<HypernymDistances>,
    longest: RwLock<HashMap<WordCategory, Vec<LeastCommonSubsumer>>>,
}

impl LcsEngine {
    /// Create an engine over the frozen graph and its distance maps.
    pub fn new(graph: Arc<LexGraph>, distances: Arc<HypernymDistances>) -> Self {
        LcsEngine {
            graph,
            distances,
            longest: RwLock::new(HashMap::new()),
        }
    }

    /// The graph this engine reads.
    pub fn graph(&self) -> &Arc<LexGraph> {
        &self.graph
    }

    /// The distance maps this engine reads.
    pub fn distances(&self) -> &Arc<HypernymDistances> {
        &self.distances
    }

    /// All least common subsumers of `s1` and `s2`: every common ancestor
    /// whose combined distance to both is minimal, ties included. `None` when
    /// either id is unknown or the categories differ.
    pub fn least_common_subsumers(
        &self,
        s1: SynsetId,
        s2: SynsetId,
    ) -> Option<Vec<LeastCommonSubsumer>> {
        let first = self.graph.synset(s1)?;
        let second = self.graph.synset(s2)?;
        if first.category() != second.category() {
            return None;
        }

        let map1 = self.distances.map(s1)?;
        let map2 = self.distances.map(s2)?;
        // Iterate the smaller ancestor set, probe the larger.
        let (probe, base) = if map1.len() <= map2.len() {
            (map1, map2)
        } else {
            (map2, map1)
        };

        let mut min = u32::MAX;
        let mut result: Vec<LeastCommonSubsumer> = Vec::new();
        for (&ancestor, &da) in probe {
            let Some(&db) = base.get(&ancestor) else {
                continue;
            };
            let combined = da + db;
            if combined < min {
                min = combined;
                result.clear();
                result.push(LeastCommonSubsumer::new(ancestor, s1, s2, combined));
            } else if combined == min {
                result.push(LeastCommonSubsumer::new(ancestor, s1, s2, combined));
            }
        }
        // Candidate order is part of the contract: IC tie-breaking consumes
        // the set in ancestor-id order.
        result.sort_by_key(|lcs| lcs.ancestor);
        Some(result)
    }

    /// The minimal combined hypernym distance between two synsets; `None`
    /// under the same conditions as
    /// [`LcsEngine::least_common_subsumers`].
    pub fn distance_between(&self, s1: SynsetId, s2: SynsetId) -> Option<u32> {
        self.least_common_subsumers(s1, s2)
            .and_then(|set| set.first().map(|lcs| lcs.distance))
    }

    /// Every concrete shortest-path witness between two synsets: for each
    /// least common subsumer, the cross product of all shortest hypernym
    /// walks from `s1` and from `s2` up to it. Distinct walks for the same
    /// subsumer are distinct results.
    pub fn paths_between(&self, s1: SynsetId, s2: SynsetId) -> Option<Vec<LcsPath>> {
        let subsumers = self.least_common_subsumers(s1, s2)?;
        let mut paths = Vec::new();
        for lcs in &subsumers {
            let d1 = self.distances.distance(s1, lcs.ancestor)?;
            let d2 = self.distances.distance(s2, lcs.ancestor)?;
            let walks1 = self.shortest_walks(s1, lcs.ancestor, d1);
            let walks2 = self.shortest_walks(s2, lcs.ancestor, d2);
            for w1 in &walks1 {
                for w2 in &walks2 {
                    paths.push(LcsPath {
                        lcs: lcs.ancestor,
                        first: w1.clone(),
                        second: w2.clone(),
                    });
                }
            }
        }
        Some(paths)
    }

    /// The corpus-wide longest least common subsumers of the category: the
    /// LCS records achieving the maximum combined distance over all synset
    /// pairs. Computed at most once per category, then served from cache.
    pub fn longest_least_common_subsumers(
        &self,
        category: WordCategory,
    ) -> Vec<LeastCommonSubsumer> {
        if let Some(cached) = self.longest.read().get(&category) {
            return cached.clone();
        }
        let computed = self.compute_longest(category);
        let mut guard = self.longest.write();
        guard.entry(category).or_insert(computed).clone()
    }

    /// Combined distance of the category's longest least common subsumers,
    /// or `None` for a category without any synset pair.
    pub fn longest_lcs_distance(&self, category: WordCategory) -> Option<u32> {
        self.longest_least_common_subsumers(category)
            .first()
            .map(|lcs| lcs.distance)
    }

    fn compute_longest(&self, category: WordCategory) -> Vec<LeastCommonSubsumer> {
        let mut ids = self.graph.synset_ids_in_category(category);
        // Descending max distance lets the prune below fire early.
        ids.sort_by_key(|id| Reverse(self.distances.max_distance(*id).unwrap_or(0)));

        let global_max = self.distances.global_max();
        let mut record: u32 = 0;
        let mut best: Vec<LeastCommonSubsumer> = Vec::new();

        for (i, &first) in ids.iter().enumerate() {
            let max_first = self.distances.max_distance(first).unwrap_or(0);
            // No pair containing `first` can beat the record.
            if max_first + global_max < record {
                continue;
            }
            for &second in &ids[i + 1..] {
                let max_second = self.distances.max_distance(second).unwrap_or(0);
                if max_first + max_second < record {
                    continue;
                }
                let Some(subsumers) = self.least_common_subsumers(first, second) else {
                    continue;
                };
                let Some(distance) = subsumers.first().map(|lcs| lcs.distance) else {
                    continue;
                };
                if distance > record {
                    record = distance;
                    best = subsumers;
                } else if distance == record {
                    for lcs in subsumers {
                        if !best.contains(&lcs) {
                            best.push(lcs);
                        }
                    }
                }
            }
        }

        info!(
            "longest LCS for {category}: distance {}, {} record(s)",
            record,
            best.len()
        );
        best
    }

    /// All hypernym walks from `from` to `to` of exactly `length` edges.
    fn shortest_walks(&self, from: SynsetId, to: SynsetId, length: u32) -> Vec<Vec<SynsetId>> {
        let mut walks = Vec::new();
        let mut current = vec![from];
        self.extend_walk(&mut current, to, length, &mut walks);
        walks
    }

    fn extend_walk(
        &self,
        current: &mut Vec<SynsetId>,
        to: SynsetId,
        remaining: u32,
        walks: &mut Vec<Vec<SynsetId>>,
    ) {
        let Some(&last) = current.last() else {
            return;
        };
        if remaining == 0 {
            if last == to {
                walks.push(current.clone());
            }
            return;
        }
        let Some(synset) = self.graph.synset(last) else {
            return;
        };
        for hypernym in synset.hypernyms() {
            // Only step where `to` is still reachable within budget.
            if let Some(d) = self.distances.distance(hypernym, to)
                && d <= remaining - 1
            {
                current.push(hypernym);
                self.extend_walk(current, to, remaining - 1, walks);
                current.pop();
            }
        }
    }
}
