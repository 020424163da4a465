//! Integration tests for the orthographic-form search.

use semnet::filter::FilterConfig;
use semnet::graph::{
    ConRel, GraphBuilder, LexGraph, LexUnitRecord, OrthVariant, RelDirection, WordCategory,
    WordClass,
};
use semnet::network::SemanticNetwork;

fn fixture_graph() -> LexGraph {
    let mut builder = GraphBuilder::new();
    builder
        .add_synset(1, WordCategory::Noun, WordClass::Tops)
        .unwrap();
    builder
        .add_lex_unit(LexUnitRecord {
            id: 100,
            synset_id: 1,
            orth_form: "GNROOT".to_string(),
            sense: 1,
            ..Default::default()
        })
        .unwrap();

    builder
        .add_synset(2, WordCategory::Noun, WordClass::Food)
        .unwrap();
    builder
        .add_lex_unit(LexUnitRecord {
            id: 200,
            synset_id: 2,
            orth_form: "Apfel".to_string(),
            sense: 1,
            ..Default::default()
        })
        .unwrap();
    builder
        .add_lex_unit(LexUnitRecord {
            id: 201,
            synset_id: 2,
            orth_form: "Paradiesapfel".to_string(),
            sense: 1,
            ..Default::default()
        })
        .unwrap();

    builder
        .add_synset(3, WordCategory::Noun, WordClass::Artifact)
        .unwrap();
    builder
        .add_lex_unit(LexUnitRecord {
            id: 300,
            synset_id: 3,
            orth_form: "Fotografie".to_string(),
            old_orth_form: Some("Photographie".to_string()),
            sense: 1,
            ..Default::default()
        })
        .unwrap();

    builder
        .add_synset(4, WordCategory::Adjective, WordClass::General)
        .unwrap();
    builder
        .add_lex_unit(LexUnitRecord {
            id: 400,
            synset_id: 4,
            orth_form: "apfelgrün".to_string(),
            sense: 1,
            ..Default::default()
        })
        .unwrap();

    for (from, to) in [(2, 1), (3, 1), (4, 1)] {
        builder
            .add_con_relation(ConRel::HasHypernym, from, to, RelDirection::Outgoing)
            .unwrap();
        builder
            .add_con_relation(ConRel::HasHyponym, to, from, RelDirection::Outgoing)
            .unwrap();
    }

    builder.build().unwrap()
}

fn network() -> SemanticNetwork {
    SemanticNetwork::new(fixture_graph())
}

#[test]
fn test_literal_search_through_the_network() {
    let network = network();
    assert_eq!(network.search(&FilterConfig::new("Apfel")).unwrap(), vec![200]);
    assert_eq!(
        network.search_synsets(&FilterConfig::new("Apfel")).unwrap(),
        vec![2]
    );
}

#[test]
fn test_ignore_case_hits_all_casings() {
    let network = network();
    let config = FilterConfig::new("APFELGRÜN").with_ignore_case(true);
    assert_eq!(network.search(&config).unwrap(), vec![400]);
}

#[test]
fn test_old_orthography_slot() {
    let network = network();
    let config = FilterConfig::new("Photographie").with_variants([OrthVariant::OldOrthForm]);
    assert_eq!(network.search(&config).unwrap(), vec![300]);

    let config = FilterConfig::new("Photographie").with_variants([OrthVariant::OrthForm]);
    assert!(network.search(&config).unwrap().is_empty());
}

#[test]
fn test_regex_across_categories() {
    let network = network();
    let config = FilterConfig::new(".*[Aa]pfel.*").with_regex(true);
    assert_eq!(network.search(&config).unwrap(), vec![200, 201, 400]);

    let config = FilterConfig::new(".*[Aa]pfel.*")
        .with_regex(true)
        .with_categories([WordCategory::Adjective]);
    assert_eq!(network.search(&config).unwrap(), vec![400]);
}

#[test]
fn test_regex_config_ignores_edit_distance() {
    let network = network();
    // As a regex, "Azfel" matches nothing even though the edit distance
    // would admit "Apfel".
    let config = FilterConfig::new("Azfel").with_regex(true).with_edit_distance(1);
    assert!(network.search(&config).unwrap().is_empty());

    let config = FilterConfig::new("Azfel").with_edit_distance(1);
    assert_eq!(network.search(&config).unwrap(), vec![200]);
}

#[test]
fn test_empty_word_class_set_yields_nothing() {
    let network = network();
    let config = FilterConfig::new("Apfel").with_word_classes([]);
    assert!(network.search(&config).unwrap().is_empty());
}

#[test]
fn test_empty_search_string_yields_nothing() {
    let network = network();
    assert!(network.search(&FilterConfig::new("")).unwrap().is_empty());
}

#[test]
fn test_category_restriction() {
    let network = network();
    let config = FilterConfig::new(".*grün").with_regex(true).with_categories([
        WordCategory::Noun,
        WordCategory::Verb,
    ]);
    assert!(network.search(&config).unwrap().is_empty());
}
