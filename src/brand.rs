// Brand lookup — find a known manufacturer name inside a product title.
//
// The brand list is every manufacturer and related name from a relation set,
// lowercased, in first-seen order. The first brand that appears as a
// substring of the lowercased title wins.
//
// Lookups are memoized per normalized title, misses included. The cache is
// owned by the assigner, never evicts, and lives as long as the assigner
// (one run).

use std::collections::HashMap;

use crate::mapping::models::ManufacturerRelation;
use crate::mapping::ordered::OrderedSet;

pub struct BrandAssigner {
    brands: OrderedSet,
    cache: HashMap<String, Option<String>>,
}

impl BrandAssigner {
    pub fn new(relations: &[ManufacturerRelation]) -> Self {
        let mut brands = OrderedSet::new();
        for relation in relations {
            brands.insert(&relation.manufacturer.to_lowercase());
            for related in &relation.related_manufacturers {
                brands.insert(&related.name.to_lowercase());
            }
        }

        Self {
            brands,
            cache: HashMap::new(),
        }
    }

    /// Return the first known brand contained in `title`, if any.
    pub fn assign_brand(&mut self, title: &str) -> Option<String> {
        let normalized = title.to_lowercase();

        if let Some(cached) = self.cache.get(&normalized) {
            return cached.clone();
        }

        let found = self
            .brands
            .iter()
            .find(|brand| normalized.contains(brand))
            .map(str::to_string);

        self.cache.insert(normalized, found.clone());
        found
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }

    #[cfg(test)]
    fn cached_titles(&self) -> usize {
        self.cache.len()
    }
}
