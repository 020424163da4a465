//! Criterion benchmarks for the semantic network.
//!
//! Covers the hot query paths:
//! - Least-common-subsumer and distance lookups
//! - Relatedness measures (path-based and IC-based)
//! - Orthographic-form search (literal and edit-distance)

use std::collections::HashMap;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use semnet::corpus::FrequencyList;
use semnet::filter::FilterConfig;
use semnet::graph::{
    ConRel, GraphBuilder, LexUnitRecord, RelDirection, WordCategory, WordClass,
};
use semnet::network::SemanticNetwork;

/// Build a synthetic noun taxonomy: a root with `fanout` children, each with
/// `fanout` children, for `depth` levels.
fn build_network(depth: u32, fanout: u32) -> SemanticNetwork {
    let mut builder = GraphBuilder::new();
    builder
        .add_synset(1, WordCategory::Noun, WordClass::Tops)
        .unwrap();
    builder
        .add_lex_unit(LexUnitRecord {
            id: 1,
            synset_id: 1,
            orth_form: "wurzel".to_string(),
            sense: 1,
            ..Default::default()
        })
        .unwrap();

    let mut next_id = 2u32;
    let mut level = vec![1u32];
    for _ in 0..depth {
        let mut next_level = Vec::new();
        for &parent in &level {
            for _ in 0..fanout {
                let id = next_id;
                next_id += 1;
                builder
                    .add_synset(id, WordCategory::Noun, WordClass::Artifact)
                    .unwrap();
                builder
                    .add_lex_unit(LexUnitRecord {
                        id,
                        synset_id: id,
                        orth_form: format!("wort{id}"),
                        sense: 1,
                        ..Default::default()
                    })
                    .unwrap();
                builder
                    .add_con_relation(ConRel::HasHypernym, id, parent, RelDirection::Outgoing)
                    .unwrap();
                builder
                    .add_con_relation(ConRel::HasHyponym, parent, id, RelDirection::Outgoing)
                    .unwrap();
                next_level.push(id);
            }
        }
        level = next_level;
    }

    let mut nouns = FrequencyList::new();
    for id in 2..next_id {
        nouns.add(&format!("wort{id}"), u64::from(id % 97) + 1);
    }
    let mut tables = HashMap::new();
    tables.insert(WordCategory::Noun, nouns);

    SemanticNetwork::with_frequencies(builder.build().unwrap(), &tables)
}

fn bench_lcs_queries(c: &mut Criterion) {
    let network = build_network(5, 3);
    let leaves: Vec<u32> = network
        .graph()
        .synsets()
        .iter()
        .filter(|s| s.hyponyms().is_empty())
        .map(|s| s.id())
        .collect();
    let (a, b) = (leaves[0], leaves[leaves.len() - 1]);

    c.bench_function("lcs_distance_between", |bench| {
        bench.iter(|| black_box(network.distance_between(black_box(a), black_box(b))));
    });

    c.bench_function("lcs_paths_between", |bench| {
        bench.iter(|| black_box(network.paths_between(black_box(a), black_box(b))));
    });
}

fn bench_relatedness_measures(c: &mut Criterion) {
    let network = build_network(5, 3);
    let leaves: Vec<u32> = network
        .graph()
        .synsets()
        .iter()
        .filter(|s| s.hyponyms().is_empty())
        .map(|s| s.id())
        .collect();
    let (a, b) = (leaves[0], leaves[leaves.len() - 1]);
    // Populate the lazy per-category caches outside the measurement loop.
    let _ = network.relatedness().simple_path(a, b, 10.0);

    c.bench_function("relatedness_simple_path", |bench| {
        bench.iter(|| black_box(network.relatedness().simple_path(a, b, 10.0)));
    });

    c.bench_function("relatedness_lin", |bench| {
        bench.iter(|| black_box(network.relatedness().lin(a, b, 10.0)));
    });

    c.bench_function("relatedness_jiang_conrath", |bench| {
        bench.iter(|| black_box(network.relatedness().jiang_conrath(a, b, 10.0)));
    });
}

fn bench_filter_search(c: &mut Criterion) {
    let network = build_network(5, 3);

    let literal = FilterConfig::new("wort42");
    c.bench_function("filter_literal", |bench| {
        bench.iter(|| black_box(network.search(black_box(&literal))));
    });

    let fuzzy = FilterConfig::new("wort42").with_edit_distance(1);
    c.bench_function("filter_edit_distance", |bench| {
        bench.iter(|| black_box(network.search(black_box(&fuzzy))));
    });
}

criterion_group!(
    benches,
    bench_lcs_queries,
    bench_relatedness_measures,
    bench_filter_search
);
criterion_main!(benches);
