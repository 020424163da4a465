//! One handle over the whole semantic network.

use std::collections::HashMap;
use std::sync::Arc;

use log::info;

use crate::corpus::{CorpusStatistics, FrequencyList};
use crate::error::Result;
use crate::filter::{FilterConfig, OrthIndex};
use crate::graph::{LexGraph, LexUnit, LexUnitId, Synset, SynsetId, WordCategory};
use crate::relatedness::RelatednessEngine;
use crate::taxonomy::{HypernymDistances, LcsEngine, LcsPath, LeastCommonSubsumer};

/// The assembled semantic network: the frozen graph plus every derived
/// engine, wired in construction order.
///
/// Construction is single-threaded; afterwards the network is logically
/// immutable and all queries may run concurrently without external locking.
#[derive(Debug)]
pub struct SemanticNetwork {
    graph: Arc<LexGraph>,
    distances: Arc<HypernymDistances>,
    lcs: Arc<LcsEngine>,
    relatedness: RelatednessEngine,
    index: OrthIndex,
}

impl SemanticNetwork {
    /// Assemble a network without corpus frequency data. The IC-based
    /// relatedness measures will return `None`.
    pub fn new(graph: LexGraph) -> Self {
        Self::assemble(graph, None)
    }

    /// Assemble a network with one raw frequency table per category,
    /// enabling the IC-based relatedness measures.
    pub fn with_frequencies(
        graph: LexGraph,
        tables: &HashMap<WordCategory, FrequencyList>,
    ) -> Self {
        Self::assemble(graph, Some(tables))
    }

    fn assemble(graph: LexGraph, tables: Option<&HashMap<WordCategory, FrequencyList>>) -> Self {
        let graph = Arc::new(graph);
        let distances = Arc::new(HypernymDistances::build(&graph));
        let statistics = tables.map(|tables| CorpusStatistics::compute(&graph, tables));
        let lcs = Arc::new(LcsEngine::new(Arc::clone(&graph), Arc::clone(&distances)));
        let relatedness = RelatednessEngine::new(
            Arc::clone(&graph),
            Arc::clone(&distances),
            Arc::clone(&lcs),
            statistics,
        );
        let index = OrthIndex::build(Arc::clone(&graph));

        info!(
            "assembled semantic network ({} synsets, frequencies: {})",
            graph.synset_count(),
            tables.is_some()
        );

        SemanticNetwork {
            graph,
            distances,
            lcs,
            relatedness,
            index,
        }
    }

    /// The frozen graph.
    pub fn graph(&self) -> &LexGraph {
        &self.graph
    }

    /// The hypernym distance maps.
    pub fn distances(&self) -> &HypernymDistances {
        &self.distances
    }

    /// The LCS/path engine.
    pub fn lcs(&self) -> &LcsEngine {
        &self.lcs
    }

    /// The relatedness engine with the six measures.
    pub fn relatedness(&self) -> &RelatednessEngine {
        &self.relatedness
    }

    /// The orthographic-form index.
    pub fn index(&self) -> &OrthIndex {
        &self.index
    }

    /// Look up a synset by id.
    pub fn synset(&self, id: SynsetId) -> Option<&Synset> {
        self.graph.synset(id)
    }

    /// Look up a lexical unit by id.
    pub fn lex_unit(&self, id: LexUnitId) -> Option<&LexUnit> {
        self.graph.lex_unit(id)
    }

    /// Execute an orthographic-form query.
    pub fn search(&self, config: &FilterConfig) -> Result<Vec<LexUnitId>> {
        self.index.search(config)
    }

    /// Execute an orthographic-form query and return owning synsets.
    pub fn search_synsets(&self, config: &FilterConfig) -> Result<Vec<SynsetId>> {
        self.index.search_synsets(config)
    }

    /// All least common subsumers of a synset pair.
    pub fn least_common_subsumers(
        &self,
        s1: SynsetId,
        s2: SynsetId,
    ) -> Option<Vec<LeastCommonSubsumer>> {
        self.lcs.least_common_subsumers(s1, s2)
    }

    /// The minimal combined hypernym distance between two synsets.
    pub fn distance_between(&self, s1: SynsetId, s2: SynsetId) -> Option<u32> {
        self.lcs.distance_between(s1, s2)
    }

    /// Every concrete shortest-path witness between two synsets.
    pub fn paths_between(&self, s1: SynsetId, s2: SynsetId) -> Option<Vec<LcsPath>> {
        self.lcs.paths_between(s1, s2)
    }
}
