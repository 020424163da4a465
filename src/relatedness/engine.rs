//! The relatedness engine and its six measures.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::corpus::CorpusStatistics;
use crate::graph::{LexGraph, SynsetId, WordCategory};
use crate::taxonomy::{HypernymDistances, LcsEngine, LeastCommonSubsumer};

/// Tolerance for picking among co-minimal LCS candidates by information
/// content: a candidate within this epsilon of the running value replaces
/// it, so near-ties favor the later-seen candidate.
pub const IC_TIE_EPSILON: f64 = 1e-5;

/// Raw-score bounds per measure within one category; the rescale target.
#[derive(Debug, Clone, Copy)]
struct MeasureBounds {
    simple_path: (f64, f64),
    leacock_chodorow: (f64, f64),
    wu_palmer: (f64, f64),
    resnik: (f64, f64),
    jiang_conrath: (f64, f64),
    lin: (f64, f64),
}

/// Computes the six relatedness measures.
///
/// All queries are read-only and safe to issue from multiple threads; the
/// per-category bound table is populated once on first use behind a lock,
/// and the computed values are deterministic, so racing initializers agree.
#[derive(Debug)]
pub struct RelatednessEngine {
    graph: Arc<LexGraph>,
    distances: Arc<HypernymDistances>,
    lcs: Arc<LcsEngine>,
    statistics: Option<CorpusStatistics>,
    bounds: RwLock<HashMap<WordCategory, MeasureBounds>>,
}

impl RelatednessEngine {
    /// Create an engine. Passing `None` for `statistics` disables the three
    /// IC-based measures; the path-based measures keep working.
    pub fn new(
        graph: Arc<LexGraph>,
        distances: Arc<HypernymDistances>,
        lcs: Arc<LcsEngine>,
        statistics: Option<CorpusStatistics>,
    ) -> Self {
        RelatednessEngine {
            graph,
            distances,
            lcs,
            statistics,
            bounds: RwLock::new(HashMap::new()),
        }
    }

    /// The corpus statistics backing the IC measures, if supplied.
    pub fn statistics(&self) -> Option<&CorpusStatistics> {
        self.statistics.as_ref()
    }

    /// SimplePath: `(longest - lcs_dist) / longest`, where `longest` is the
    /// category's longest-LCS combined distance. 1.0 for identical synsets.
    pub fn simple_path(&self, s1: SynsetId, s2: SynsetId, normalized_max: f64) -> Option<f64> {
        let (category, subsumers) = self.pair(s1, s2)?;
        let lcs_dist = subsumers.first()?.distance as f64;
        let longest = self.lcs.longest_lcs_distance(category).unwrap_or(0) as f64;
        let raw = if longest == 0.0 {
            1.0
        } else {
            (longest - lcs_dist) / longest
        };
        Some(self.rescale(raw, self.bounds(category).simple_path, normalized_max))
    }

    /// Leacock–Chodorow: `-log10((lcs_dist + 1) / (2 * (depth + 1)))`, with
    /// `depth` the category's maximum hypernym distance.
    pub fn leacock_chodorow(
        &self,
        s1: SynsetId,
        s2: SynsetId,
        normalized_max: f64,
    ) -> Option<f64> {
        let (category, subsumers) = self.pair(s1, s2)?;
        let lcs_dist = subsumers.first()?.distance as f64;
        let depth = self.distances.category_depth(category) as f64;
        let raw = -((lcs_dist + 1.0) / (2.0 * (depth + 1.0))).log10();
        Some(self.rescale(raw, self.bounds(category).leacock_chodorow, normalized_max))
    }

    /// Wu–Palmer: `2 * d / (lcs_dist + 2 * d)`, with `d` the largest
    /// distance-to-root among the co-minimal LCS candidates.
    pub fn wu_palmer(&self, s1: SynsetId, s2: SynsetId, normalized_max: f64) -> Option<f64> {
        let (category, subsumers) = self.pair(s1, s2)?;
        let lcs_dist = subsumers.first()?.distance as f64;
        let root = self.graph.root_id();
        let depth = subsumers
            .iter()
            .filter_map(|lcs| self.distances.distance(lcs.ancestor, root))
            .max()
            .unwrap_or(0) as f64;
        let raw = if lcs_dist == 0.0 && depth == 0.0 {
            // Both arguments are the root.
            1.0
        } else {
            (2.0 * depth) / (lcs_dist + 2.0 * depth)
        };
        Some(self.rescale(raw, self.bounds(category).wu_palmer, normalized_max))
    }

    /// Resnik: the information content of the LCS candidate selected per
    /// [`IC_TIE_EPSILON`]. Requires frequency data.
    pub fn resnik(&self, s1: SynsetId, s2: SynsetId, normalized_max: f64) -> Option<f64> {
        let stats = self.statistics.as_ref()?;
        let (category, subsumers) = self.pair(s1, s2)?;
        let raw = lcs_information_content(stats, &subsumers)?;
        Some(self.rescale(raw, self.bounds(category).resnik, normalized_max))
    }

    /// Jiang–Conrath: `jcn_max - (IC(s1) + IC(s2) - 2 * lcs_ic)`. Requires
    /// frequency data.
    pub fn jiang_conrath(&self, s1: SynsetId, s2: SynsetId, normalized_max: f64) -> Option<f64> {
        let stats = self.statistics.as_ref()?;
        let (category, subsumers) = self.pair(s1, s2)?;
        let lcs_ic = lcs_information_content(stats, &subsumers)?;
        let ic1 = stats.information_content(s1)?;
        let ic2 = stats.information_content(s2)?;
        let raw = stats.jcn_max(category) - (ic1 + ic2 - 2.0 * lcs_ic);
        Some(self.rescale(raw, self.bounds(category).jiang_conrath, normalized_max))
    }

    /// Lin: `2 * lcs_ic / (IC(s1) + IC(s2))`. Requires frequency data.
    pub fn lin(&self, s1: SynsetId, s2: SynsetId, normalized_max: f64) -> Option<f64> {
        let stats = self.statistics.as_ref()?;
        let (category, subsumers) = self.pair(s1, s2)?;
        let lcs_ic = lcs_information_content(stats, &subsumers)?;
        let ic1 = stats.information_content(s1)?;
        let ic2 = stats.information_content(s2)?;
        let denominator = ic1 + ic2;
        let raw = if denominator == 0.0 {
            // Only possible when both arguments are the root.
            1.0
        } else {
            (2.0 * lcs_ic) / denominator
        };
        Some(self.rescale(raw, self.bounds(category).lin, normalized_max))
    }

    /// Category and co-minimal subsumers of a valid same-category pair.
    fn pair(
        &self,
        s1: SynsetId,
        s2: SynsetId,
    ) -> Option<(WordCategory, Vec<LeastCommonSubsumer>)> {
        let first = self.graph.synset(s1)?;
        let second = self.graph.synset(s2)?;
        if first.category() != second.category() {
            return None;
        }
        let subsumers = self.lcs.least_common_subsumers(s1, s2)?;
        if subsumers.is_empty() {
            return None;
        }
        Some((first.category(), subsumers))
    }

    fn bounds(&self, category: WordCategory) -> MeasureBounds {
        if let Some(bounds) = self.bounds.read().get(&category) {
            return *bounds;
        }
        let computed = self.compute_bounds(category);
        *self.bounds.write().entry(category).or_insert(computed)
    }

    fn compute_bounds(&self, category: WordCategory) -> MeasureBounds {
        let depth = self.distances.category_depth(category) as f64;
        let longest = self.lcs.longest_lcs_distance(category).unwrap_or(0) as f64;
        let lch_max = -(1.0 / (2.0 * (depth + 1.0))).log10();
        let lch_min = -((longest + 1.0) / (2.0 * (depth + 1.0))).log10();
        let (resnik_max, jcn_max) = match &self.statistics {
            Some(stats) => (stats.max_ic(category), stats.jcn_max(category)),
            None => (0.0, 0.0),
        };
        MeasureBounds {
            simple_path: (0.0, 1.0),
            leacock_chodorow: (lch_min, lch_max),
            wu_palmer: (0.0, 1.0),
            resnik: (0.0, resnik_max),
            jiang_conrath: (0.0, jcn_max),
            lin: (0.0, 1.0),
        }
    }

    fn rescale(&self, raw: f64, bounds: (f64, f64), normalized_max: f64) -> f64 {
        if normalized_max <= 0.0 {
            return raw;
        }
        let (min, max) = bounds;
        let span = max - min;
        if span <= f64::EPSILON {
            return raw;
        }
        (raw - min) / span * normalized_max
    }
}

/// The IC of the co-minimal LCS candidate with the largest information
/// content. Candidates are visited in ancestor-id order; one within
/// [`IC_TIE_EPSILON`] of the running value replaces it, only a clearly
/// smaller one is ignored.
fn lcs_information_content(
    stats: &CorpusStatistics,
    subsumers: &[LeastCommonSubsumer],
) -> Option<f64> {
    let mut running: Option<f64> = None;
    for lcs in subsumers {
        let ic = stats.information_content(lcs.ancestor)?;
        running = Some(match running {
            Some(best) if ic < best - IC_TIE_EPSILON => best,
            _ => ic,
        });
    }
    running
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::corpus::FrequencyList;
    use crate::graph::{
        ConRel, GraphBuilder, LexGraph, LexUnitRecord, RelDirection, WordClass,
    };
    use crate::taxonomy::HypernymDistances;

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

    /// A diamond: X (20) and Y (21) both below A (10) and B (11), which both
    /// sit directly below the root (1). A verb (30) hangs off the root.
    fn diamond_graph() -> LexGraph {
        let mut builder = GraphBuilder::new();
        add_synset(&mut builder, 1, WordCategory::Noun, WordClass::Tops, "Wurzel");
        add_synset(&mut builder, 10, WordCategory::Noun, WordClass::Artifact, "Awort");
        add_synset(&mut builder, 11, WordCategory::Noun, WordClass::Artifact, "Bwort");
        add_synset(&mut builder, 20, WordCategory::Noun, WordClass::Artifact, "Xwort");
        add_synset(&mut builder, 21, WordCategory::Noun, WordClass::Artifact, "Ywort");
        add_synset(&mut builder, 30, WordCategory::Verb, WordClass::Contact, "tun");
        hypernym_edge(&mut builder, 10, 1);
        hypernym_edge(&mut builder, 11, 1);
        hypernym_edge(&mut builder, 20, 10);
        hypernym_edge(&mut builder, 20, 11);
        hypernym_edge(&mut builder, 21, 10);
        hypernym_edge(&mut builder, 21, 11);
        hypernym_edge(&mut builder, 30, 1);
        builder.build().unwrap()
    }

    fn engine_with(tables: Option<HashMap<WordCategory, FrequencyList>>) -> RelatednessEngine {
        let graph = Arc::new(diamond_graph());
        let distances = Arc::new(HypernymDistances::build(&graph));
        let statistics = tables.map(|t| CorpusStatistics::compute(&graph, &t));
        let lcs = Arc::new(LcsEngine::new(graph.clone(), distances.clone()));
        RelatednessEngine::new(graph, distances, lcs, statistics)
    }

    /// Counts chosen so the two co-minimal subsumers A and B of the X/Y pair
    /// end up with information contents within [`IC_TIE_EPSILON`]; A (the
    /// earlier candidate) gets the slightly larger one.
    fn near_tie_tables() -> HashMap<WordCategory, FrequencyList> {
        let mut nouns = FrequencyList::new();
        nouns.add("Awort", 99997);
        nouns.add("Bwort", 99998);
        let mut tables = HashMap::new();
        tables.insert(WordCategory::Noun, nouns);
        tables
    }

    #[test]
    fn test_ic_tie_break_favors_later_candidate() {
        let engine = engine_with(Some(near_tie_tables()));
        let stats = engine.statistics().unwrap();

        // cum(A) = 1 + 99997 + cum(X) + cum(Y) = 100000, cum(B) = 100001.
        assert_eq!(stats.cumulative_frequency(10), Some(100000));
        assert_eq!(stats.cumulative_frequency(11), Some(100001));
        let ic_a = stats.information_content(10).unwrap();
        let ic_b = stats.information_content(11).unwrap();
        assert!(ic_a > ic_b);
        assert!(ic_a - ic_b < IC_TIE_EPSILON);

        // A plain max would pick A; the tie-break keeps the later B.
        let resnik = engine.resnik(20, 21, 0.0).unwrap();
        assert!((resnik - ic_b).abs() < 1e-12);
        assert!(resnik < ic_a);
    }

    #[test]
    fn test_clearly_larger_ic_wins_regardless_of_order() {
        let mut nouns = FrequencyList::new();
        // B is far more frequent, so its IC is clearly smaller and the
        // earlier A stays the pick.
        nouns.add("Bwort", 1000);
        let mut tables = HashMap::new();
        tables.insert(WordCategory::Noun, nouns);
        let engine = engine_with(Some(tables));
        let stats = engine.statistics().unwrap();

        let ic_a = stats.information_content(10).unwrap();
        let resnik = engine.resnik(20, 21, 0.0).unwrap();
        assert!((resnik - ic_a).abs() < 1e-12);
    }

    #[test]
    fn test_ic_measures_absent_without_frequency_data() {
        let engine = engine_with(None);
        assert!(engine.resnik(20, 21, 0.0).is_none());
        assert!(engine.jiang_conrath(20, 21, 0.0).is_none());
        assert!(engine.lin(20, 21, 0.0).is_none());
        // Path-based measures keep working.
        assert!(engine.simple_path(20, 21, 0.0).is_some());
        assert!(engine.leacock_chodorow(20, 21, 0.0).is_some());
        assert!(engine.wu_palmer(20, 21, 0.0).is_some());
    }

    #[test]
    fn test_cross_category_and_unknown_ids_absent() {
        let engine = engine_with(Some(near_tie_tables()));
        assert!(engine.simple_path(20, 30, 0.0).is_none());
        assert!(engine.leacock_chodorow(20, 30, 0.0).is_none());
        assert!(engine.wu_palmer(20, 30, 0.0).is_none());
        assert!(engine.resnik(20, 30, 0.0).is_none());
        assert!(engine.jiang_conrath(20, 30, 0.0).is_none());
        assert!(engine.lin(20, 30, 0.0).is_none());
        assert!(engine.simple_path(20, 424242, 0.0).is_none());
    }

    #[test]
    fn test_root_pair_guards() {
        let engine = engine_with(Some(near_tie_tables()));
        assert_eq!(engine.wu_palmer(1, 1, 0.0), Some(1.0));
        assert_eq!(engine.lin(1, 1, 0.0), Some(1.0));
    }

    #[test]
    fn test_normalization_rescales_linearly() {
        let engine = engine_with(Some(near_tie_tables()));
        for (raw, normalized) in [
            (engine.simple_path(20, 21, 0.0), engine.simple_path(20, 21, 10.0)),
            (
                engine.leacock_chodorow(20, 21, 0.0),
                engine.leacock_chodorow(20, 21, 10.0),
            ),
            (engine.lin(20, 21, 0.0), engine.lin(20, 21, 10.0)),
        ] {
            let normalized = normalized.unwrap();
            assert!((0.0..=10.0).contains(&normalized), "out of range: {normalized}");
            assert!(normalized.is_finite());
            let _ = raw.unwrap();
        }

        // SimplePath's raw range is already [0, 1], so rescaling to 10 is a
        // plain multiplication.
        let raw = engine.simple_path(20, 21, 0.0).unwrap();
        let scaled = engine.simple_path(20, 21, 10.0).unwrap();
        assert!((scaled - raw * 10.0).abs() < 1e-9);
    }
}
