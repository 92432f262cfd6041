// Manufacturer adjacency graph built from cross-source product matches.
//
// Every match whose two sides resolve to products with a manufacturer adds
// an undirected edge between those manufacturers. Nodes and neighbours keep
// first-seen order so downstream output is deterministic.

use std::collections::HashMap;

use tracing::debug;

use super::models::{Match, Product};
use super::ordered::OrderedSet;

/// Symmetric manufacturer -> neighbours map.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    index: HashMap<String, usize>,
    nodes: Vec<(String, OrderedSet)>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from a product batch and a match batch.
    ///
    /// Matches that reference an unknown `(source, source_id)` or a product
    /// without a manufacturer are skipped. Duplicate product keys resolve to
    /// the last product in the batch.
    pub fn build(products: &[Product], matches: &[Match]) -> Self {
        let by_key: HashMap<(&str, &str), &Product> =
            products.iter().map(|p| (p.key(), p)).collect();

        let mut graph = Self::new();
        let mut skipped = 0usize;

        for m in matches {
            let main = by_key.get(&m.main_key());
            let competitor = by_key.get(&m.competitor_key());

            match (main, competitor) {
                (Some(main), Some(competitor))
                    if !main.manufacturer.is_empty() && !competitor.manufacturer.is_empty() =>
                {
                    graph.add_edge(&main.manufacturer, &competitor.manufacturer);
                }
                _ => skipped += 1,
            }
        }

        debug!(
            nodes = graph.node_count(),
            matches = matches.len(),
            skipped,
            "Adjacency graph built"
        );

        graph
    }

    /// Record an undirected edge. Re-adding an existing edge is a no-op.
    ///
    /// `a == b` records a self-edge.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.neighbours_mut(a).insert(b);
        self.neighbours_mut(b).insert(a);
    }

    fn neighbours_mut(&mut self, name: &str) -> &mut OrderedSet {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.nodes.len();
                self.nodes.push((name.to_string(), OrderedSet::new()));
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.nodes[idx].1
    }

    pub fn neighbours(&self, name: &str) -> Option<&OrderedSet> {
        self.index.get(name).map(|&idx| &self.nodes[idx].1)
    }

    #[cfg(test)]
    pub(crate) fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.neighbours(a).is_some_and(|n| n.contains(b))
    }

    /// Nodes with their neighbour sets, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrderedSet)> {
        self.nodes.iter().map(|(name, n)| (name.as_str(), n))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
