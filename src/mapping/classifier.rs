// Relationship classifier — labels every adjacency edge.
//
// Each directed pair (m1, m2) is labelled on its own:
//   1. near-identical names (similarity above the sibling threshold) are siblings
//   2. otherwise compare brand vocabularies: with at least one shared word,
//      the side with more exclusive words is the parent
//   3. anything else (no shared words, or a tie) is a sibling
//
// Because step 2 depends only on set sizes, A->B and B->A are evaluated
// independently and are not forced to be transposes of each other.

use super::graph::AdjacencyGraph;
use super::models::{ManufacturerRelation, RelatedManufacturer, Relationship};
use super::ordered::OrderedSet;
use super::vocabulary::BrandVocabulary;
use crate::similarity::similarity;

/// Tunable thresholds for classification.
pub struct ClassifierThresholds {
    /// Name similarity strictly above this labels the pair sibling (default 0.8)
    pub sibling_similarity: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            sibling_similarity: 0.8,
        }
    }
}

/// Word counts from comparing two vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyOverlap {
    pub common: usize,
    pub unique_first: usize,
    pub unique_second: usize,
}

impl VocabularyOverlap {
    /// Compare two vocabularies; `None` stands for an empty vocabulary.
    pub fn between(first: Option<&OrderedSet>, second: Option<&OrderedSet>) -> Self {
        let empty = OrderedSet::new();
        let first = first.unwrap_or(&empty);
        let second = second.unwrap_or(&empty);

        let common = first.iter().filter(|w| second.contains(w)).count();
        Self {
            common,
            unique_first: first.len() - common,
            unique_second: second.len() - common,
        }
    }
}

/// Label the directed pair (m1 -> m2).
pub fn determine_relationship(
    m1: &str,
    m2: &str,
    vocabulary: &BrandVocabulary,
    thresholds: &ClassifierThresholds,
) -> Relationship {
    if similarity(m1, m2) > thresholds.sibling_similarity {
        return Relationship::Sibling;
    }

    let overlap = VocabularyOverlap::between(vocabulary.words_for(m1), vocabulary.words_for(m2));

    if overlap.common > 0 {
        if overlap.unique_first > overlap.unique_second {
            return Relationship::Parent;
        }
        if overlap.unique_second > overlap.unique_first {
            return Relationship::Child;
        }
    }

    Relationship::Sibling
}

/// Classify every edge of the graph.
///
/// Produces one relation per node, nodes and neighbours in graph order.
pub fn classify(
    graph: &AdjacencyGraph,
    vocabulary: &BrandVocabulary,
    thresholds: &ClassifierThresholds,
) -> Vec<ManufacturerRelation> {
    graph
        .iter()
        .map(|(manufacturer, neighbours)| ManufacturerRelation {
            manufacturer: manufacturer.to_string(),
            related_manufacturers: neighbours
                .iter()
                .map(|related| RelatedManufacturer {
                    name: related.to_string(),
                    relationship: determine_relationship(
                        manufacturer,
                        related,
                        vocabulary,
                        thresholds,
                    ),
                })
                .collect(),
        })
        .collect()
}
