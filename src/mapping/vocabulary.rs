// Brand vocabulary — the distinct lowercase title words per manufacturer.
//
// Used by the classifier as a cheap proxy for product-line breadth: a
// manufacturer with many exclusive words likely covers more product lines.

use std::collections::HashMap;

use super::models::Product;
use super::ordered::OrderedSet;

/// Manufacturer name -> set of lowercase words from its product titles.
#[derive(Debug, Clone, Default)]
pub struct BrandVocabulary {
    words: HashMap<String, OrderedSet>,
}

impl BrandVocabulary {
    /// Build the vocabulary from a full product batch.
    ///
    /// Titles are lowercased and split on single spaces, so consecutive
    /// spaces contribute an empty token. Products without a manufacturer or
    /// title are skipped.
    pub fn build(products: &[Product]) -> Self {
        let mut words: HashMap<String, OrderedSet> = HashMap::new();

        for product in products {
            if product.manufacturer.is_empty() || product.title.is_empty() {
                continue;
            }
            let set = words.entry(product.manufacturer.clone()).or_default();
            for word in product.title.to_lowercase().split(' ') {
                set.insert(word);
            }
        }

        Self { words }
    }

    /// Words for a manufacturer. Unknown manufacturers have none.
    pub fn words_for(&self, manufacturer: &str) -> Option<&OrderedSet> {
        self.words.get(manufacturer)
    }

    /// Number of manufacturers with at least one title.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(manufacturer: &str, title: &str) -> Product {
        Product {
            manufacturer: manufacturer.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn words(vocab: &BrandVocabulary, manufacturer: &str) -> Vec<String> {
        vocab
            .words_for(manufacturer)
            .map(|s| s.iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_lowercases_and_dedupes_across_titles() {
        let vocab = BrandVocabulary::build(&[
            product("Acme", "Super Glue"),
            product("Acme", "super TAPE"),
        ]);
        assert_eq!(words(&vocab, "Acme"), vec!["super", "glue", "tape"]);
    }

    #[test]
    fn test_consecutive_spaces_yield_empty_token() {
        let vocab = BrandVocabulary::build(&[product("Acme", "glue  stick")]);
        assert_eq!(words(&vocab, "Acme"), vec!["glue", "", "stick"]);
    }

    #[test]
    fn test_skips_missing_fields() {
        let vocab = BrandVocabulary::build(&[
            product("", "Orphan title"),
            product("Acme", ""),
        ]);
        assert!(vocab.is_empty());
        assert!(vocab.words_for("Acme").is_none());
    }

    #[test]
    fn test_manufacturer_names_are_case_sensitive_keys() {
        let vocab = BrandVocabulary::build(&[product("Acme", "a"), product("ACME", "b")]);
        assert_eq!(vocab.len(), 2);
    }
}
