// Data models for the mapping engine.
//
// Products and matches come straight from the CSV inputs; every column is a
// plain string and a missing column deserializes as "". Relations are the
// engine's output and what the database layer persists.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single product listing from one source.
///
/// Uniquely identified within a batch by `(source, source_id)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub title: String,
    pub manufacturer: String,
    pub source: String,
    pub source_id: String,
    pub country_code: String,
    pub barcode: String,
    pub composition: String,
    pub description: String,
}

impl Product {
    /// The `(source, source_id)` key matches refer to.
    pub fn key(&self) -> (&str, &str) {
        (&self.source, &self.source_id)
    }
}

/// An asserted equivalence between a "main" listing and a "competitor"
/// listing from another source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    pub id: String,
    pub m_source: String,
    pub c_source: String,
    pub m_country_code: String,
    pub c_country_code: String,
    pub m_source_id: String,
    pub c_source_id: String,
    pub validation_status: String,
}

impl Match {
    pub fn main_key(&self) -> (&str, &str) {
        (&self.m_source, &self.m_source_id)
    }

    pub fn competitor_key(&self) -> (&str, &str) {
        (&self.c_source, &self.c_source_id)
    }
}

/// Label assigned to a directed (manufacturer, related) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Parent => "parent",
            Relationship::Child => "child",
            Relationship::Sibling => "sibling",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(Relationship::Parent),
            "child" => Ok(Relationship::Child),
            "sibling" => Ok(Relationship::Sibling),
            other => anyhow::bail!("Unknown relationship type: {other}"),
        }
    }
}

/// One neighbour of a manufacturer together with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedManufacturer {
    pub name: String,
    pub relationship: Relationship,
}

/// The output unit: a manufacturer and every manufacturer it co-occurs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerRelation {
    pub manufacturer: String,
    pub related_manufacturers: Vec<RelatedManufacturer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_string_roundtrip() {
        for rel in [
            Relationship::Parent,
            Relationship::Child,
            Relationship::Sibling,
        ] {
            assert_eq!(rel.as_str().parse::<Relationship>().unwrap(), rel);
        }
    }

    #[test]
    fn test_relationship_rejects_unknown() {
        assert!("cousin".parse::<Relationship>().is_err());
        assert!("Parent".parse::<Relationship>().is_err());
    }

    #[test]
    fn test_relationship_serializes_lowercase() {
        let json = serde_json::to_string(&Relationship::Sibling).unwrap();
        assert_eq!(json, "\"sibling\"");
    }

    #[test]
    fn test_product_key() {
        let product = Product {
            source: "S1".to_string(),
            source_id: "42".to_string(),
            ..Default::default()
        };
        assert_eq!(product.key(), ("S1", "42"));
    }
}
