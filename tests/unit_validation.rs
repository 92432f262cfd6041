// Unit tests for relation validation.
//
// Boundary conditions for name length and the relation-count ratio, plus
// similarity flags on near-duplicate pairs.

use brandgraph::mapping::models::{ManufacturerRelation, RelatedManufacturer, Relationship};
use brandgraph::validation::{validate, IssueKind};

fn relation(manufacturer: &str, related: &[&str]) -> ManufacturerRelation {
    ManufacturerRelation {
        manufacturer: manufacturer.to_string(),
        related_manufacturers: related
            .iter()
            .map(|name| RelatedManufacturer {
                name: name.to_string(),
                relationship: Relationship::Sibling,
            })
            .collect(),
    }
}

fn kinds_for(result: &brandgraph::validation::ValidationResult, name: &str) -> Vec<IssueKind> {
    result
        .issues()
        .iter()
        .filter(|i| i.manufacturer == name)
        .map(|i| i.kind)
        .collect()
}

/// A hub related to `hub_degree` brands, padded with extra single-edge
/// relations until the batch holds `total` relations.
fn hub_batch(hub_degree: usize, total: usize) -> Vec<ManufacturerRelation> {
    let brands: Vec<String> = (1..=hub_degree).map(|i| format!("Brand{i:02}")).collect();
    let brand_refs: Vec<&str> = brands.iter().map(String::as_str).collect();

    let mut relations = vec![relation("Hub Holdings", &brand_refs)];
    for brand in &brands {
        relations.push(relation(brand, &["Hub Holdings"]));
    }
    let mut filler = 0;
    while relations.len() < total {
        filler += 1;
        relations.push(relation(&format!("Filler Works {filler}"), &["Zeta Industries"]));
    }
    relations
}

// ============================================================
// InvalidName
// ============================================================

#[test]
fn two_char_name_is_invalid_three_is_not() {
    let result = validate(&[relation("ab", &[]), relation("abc", &[])]);
    assert!(result.is_flagged("ab"));
    assert!(!result.is_flagged("abc"));
    assert_eq!(kinds_for(&result, "ab"), vec![IssueKind::InvalidName]);
}

#[test]
fn stop_words_are_invalid_in_any_case() {
    let result = validate(&[relation("The", &[]), relation("AND", &[])]);
    assert!(result.is_flagged("The"));
    assert!(result.is_flagged("AND"));
}

#[test]
fn digit_only_names_are_invalid() {
    let result = validate(&[relation("12345", &[]), relation("Brand 45", &[])]);
    assert!(result.is_flagged("12345"));
    assert!(!result.is_flagged("Brand 45"));
}

#[test]
fn invalid_related_name_is_flagged() {
    let result = validate(&[
        relation("Acme Corporation", &["an"]),
        relation("Zeta Industries", &[]),
        relation("Other Maker", &[]),
    ]);
    assert!(result.is_flagged("an"));
    assert!(!result.is_flagged("Acme Corporation"));
}

// ============================================================
// HighRelationCount
// ============================================================

#[test]
fn ratio_above_threshold_is_flagged() {
    let relations = hub_batch(9, 10);
    assert_eq!(relations.len(), 10);

    let result = validate(&relations);
    assert!(result.is_flagged("Hub Holdings"));
    assert_eq!(kinds_for(&result, "Hub Holdings"), vec![IssueKind::HighRelationCount]);
}

#[test]
fn ratio_exactly_at_threshold_is_not_flagged() {
    let relations = hub_batch(8, 10);
    assert_eq!(relations.len(), 10);

    let result = validate(&relations);
    assert!(!result.is_flagged("Hub Holdings"));
    assert!(result.is_clean());
}

#[test]
fn single_relation_batch_is_over_connected() {
    // one related entry out of one relation is a ratio of 1.0
    let result = validate(&[relation("Solo Brands", &["Other Maker"])]);
    assert_eq!(kinds_for(&result, "Solo Brands"), vec![IssueKind::HighRelationCount]);
}

// ============================================================
// HighSimilarity
// ============================================================

#[test]
fn near_duplicate_pair_is_flagged() {
    // "acme foods" vs "acme food": 0.9
    let relations = vec![
        relation("Acme Foods", &["Acme Food"]),
        relation("Acme Food", &["Acme Foods"]),
        relation("Zeta Industries", &[]),
    ];
    let result = validate(&relations);

    let similar: Vec<_> = result
        .issues()
        .iter()
        .filter(|i| i.kind == IssueKind::HighSimilarity)
        .collect();
    assert_eq!(similar.len(), 2);
    assert_eq!(similar[0].manufacturer, "Acme Foods");
    assert_eq!(similar[0].related_manufacturer.as_deref(), Some("Acme Food"));
    assert_eq!(result.flagged_manufacturers(), vec!["Acme Foods", "Acme Food"]);
}

#[test]
fn identical_names_are_not_similarity_issues() {
    let relations = vec![
        relation("Acme", &["ACME"]),
        relation("Zeta Industries", &[]),
        relation("Other Maker", &[]),
    ];
    let result = validate(&relations);
    assert!(result.is_clean());
}

#[test]
fn empty_batch_is_clean() {
    let result = validate(&[]);
    assert!(result.is_clean());
    assert_eq!(result.flagged_count(), 0);
}
