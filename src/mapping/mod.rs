// Relationship inference — vocabulary, adjacency graph, and classification.
//
// The engine is synchronous and works on one fully loaded batch. Bad
// records (missing manufacturer, dangling match references) never error;
// they simply contribute nothing.

pub mod classifier;
pub mod graph;
pub mod models;
pub mod ordered;
pub mod vocabulary;

use tracing::info;

use classifier::ClassifierThresholds;
use graph::AdjacencyGraph;
use models::{ManufacturerRelation, Match, Product};
use vocabulary::BrandVocabulary;

/// Run vocabulary building, graph building and classification over a batch.
pub fn infer_relations(products: &[Product], matches: &[Match]) -> Vec<ManufacturerRelation> {
    infer_relations_with(products, matches, &ClassifierThresholds::default())
}

/// Same as [`infer_relations`] with explicit classifier thresholds.
pub fn infer_relations_with(
    products: &[Product],
    matches: &[Match],
    thresholds: &ClassifierThresholds,
) -> Vec<ManufacturerRelation> {
    info!(
        products = products.len(),
        matches = matches.len(),
        "Mapping manufacturers"
    );

    let vocabulary = BrandVocabulary::build(products);
    let graph = AdjacencyGraph::build(products, matches);
    let relations = classifier::classify(&graph, &vocabulary, thresholds);

    info!(
        relations = relations.len(),
        vocabularies = vocabulary.len(),
        "Manufacturer relations generated"
    );

    relations
}
