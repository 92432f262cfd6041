// Post-hoc validation of classified relations.
//
// Three checks, in this order for each relation:
//   - InvalidName on the manufacturer
//   - HighRelationCount on the manufacturer
//   - for each related entry: InvalidName on the related name, then
//     HighSimilarity on the (manufacturer, related) pair
//
// The relation-count ratio uses the number of relations in the whole batch
// as its denominator, not any node's degree.

use super::issues::{IssueKind, ValidationIssue, ValidationResult};
use crate::mapping::models::{ManufacturerRelation, RelatedManufacturer};
use crate::similarity::similarity;

/// Words that are never a real manufacturer name.
pub const COMMON_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
];

/// Thresholds for the validation checks.
pub struct ValidationThresholds {
    /// Names shorter than this many characters are invalid (default 3)
    pub min_name_length: usize,
    /// related / total above this is a high relation count (default 0.8)
    pub max_related_ratio: f64,
    /// Similarity above this (and below 1.0) is suspicious (default 0.7)
    pub min_similarity: f64,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            min_name_length: 3,
            max_related_ratio: 0.8,
            min_similarity: 0.7,
        }
    }
}

/// Validate a relation set with the default thresholds.
pub fn validate(relations: &[ManufacturerRelation]) -> ValidationResult {
    validate_with(relations, &ValidationThresholds::default())
}

/// Validate a relation set. Pure: does not log or touch the relations.
pub fn validate_with(
    relations: &[ManufacturerRelation],
    thresholds: &ValidationThresholds,
) -> ValidationResult {
    let mut result = ValidationResult::default();
    let total = relations.len();

    for relation in relations {
        validate_relation(relation, total, thresholds, &mut result);
    }

    result
}

fn validate_relation(
    relation: &ManufacturerRelation,
    total: usize,
    thresholds: &ValidationThresholds,
    result: &mut ValidationResult,
) {
    let manufacturer = &relation.manufacturer;

    if is_invalid_name(manufacturer, thresholds) {
        result.push(invalid_name(manufacturer));
    }

    let related_count = relation.related_manufacturers.len();
    if related_count > 0 && related_count as f64 / total as f64 > thresholds.max_related_ratio {
        result.push(ValidationIssue {
            kind: IssueKind::HighRelationCount,
            manufacturer: manufacturer.clone(),
            related_manufacturer: None,
            details: Some(format!(
                "{related_count} relations out of {total} total"
            )),
        });
    }

    for related in &relation.related_manufacturers {
        validate_related(manufacturer, related, thresholds, result);
    }
}

fn validate_related(
    manufacturer: &str,
    related: &RelatedManufacturer,
    thresholds: &ValidationThresholds,
    result: &mut ValidationResult,
) {
    if is_invalid_name(&related.name, thresholds) {
        result.push(invalid_name(&related.name));
    }

    let score = similarity(manufacturer, &related.name);
    if score > thresholds.min_similarity && score < 1.0 {
        result.push(ValidationIssue {
            kind: IssueKind::HighSimilarity,
            manufacturer: manufacturer.to_string(),
            related_manufacturer: Some(related.name.clone()),
            details: Some(format!("similarity {score:.2}")),
        });
    }
}

fn invalid_name(name: &str) -> ValidationIssue {
    ValidationIssue {
        kind: IssueKind::InvalidName,
        manufacturer: name.to_string(),
        related_manufacturer: None,
        details: None,
    }
}

/// Stop word (any case), shorter than the minimum length, or all digits.
pub fn is_invalid_name(name: &str, thresholds: &ValidationThresholds) -> bool {
    let lower = name.to_lowercase();
    COMMON_WORDS.contains(&lower.as_str())
        || name.chars().count() < thresholds.min_name_length
        || (!name.is_empty() && name.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::models::Relationship;

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

    #[test]
    fn test_name_length_boundary() {
        let t = ValidationThresholds::default();
        assert!(is_invalid_name("ab", &t));
        assert!(!is_invalid_name("abc", &t));
    }

    #[test]
    fn test_stop_words_any_case() {
        let t = ValidationThresholds::default();
        assert!(is_invalid_name("THE", &t));
        assert!(is_invalid_name("And", &t));
        assert!(!is_invalid_name("Theory", &t));
    }

    #[test]
    fn test_numeric_names() {
        let t = ValidationThresholds::default();
        assert!(is_invalid_name("12345", &t));
        assert!(is_invalid_name("4711", &t));
        assert!(!is_invalid_name("3M Company", &t));
        assert!(!is_invalid_name("٣٤٥٦", &t));
    }

    #[test]
    fn test_empty_name_is_invalid() {
        assert!(is_invalid_name("", &ValidationThresholds::default()));
    }

    #[test]
    fn test_issue_order_within_relation() {
        // One relation in the batch, two related: ratio 2.0.
        // "ab" is too short, "abc" vs "abcd" has similarity 0.75.
        let relations = vec![relation("abc", &["ab", "abcd"])];
        let result = validate(&relations);
        let kinds: Vec<IssueKind> = result.issues().iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::HighRelationCount,
                IssueKind::InvalidName,
                IssueKind::HighSimilarity,
            ]
        );
        assert_eq!(result.issues()[2].manufacturer, "abc");
        assert_eq!(
            result.issues()[2].related_manufacturer.as_deref(),
            Some("abcd")
        );
    }

    #[test]
    fn test_flagged_set_is_deduplicated() {
        let relations = vec![relation("12", &["34"]), relation("34", &["12"])];
        let result = validate(&relations);
        assert_eq!(result.flagged_manufacturers(), vec!["12", "34"]);
        assert!(result.issues().len() > 2);
    }

    #[test]
    fn test_identical_names_skip_similarity() {
        let relations = vec![relation("Acme", &["Acme"]), relation("Other", &[])];
        let result = validate(&relations);
        assert!(result
            .issues()
            .iter()
            .all(|i| i.kind != IssueKind::HighSimilarity));
    }
}
