// Validation issue types and the logging sink they are forwarded to.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::mapping::ordered::OrderedSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// Stop word, too short, or purely numeric
    InvalidName,
    /// Related to a disproportionate share of the batch
    HighRelationCount,
    /// Related to a different manufacturer with a near-identical name
    HighSimilarity,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::InvalidName => "InvalidName",
            IssueKind::HighRelationCount => "HighRelationCount",
            IssueKind::HighSimilarity => "HighSimilarity",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub manufacturer: String,
    pub related_manufacturer: Option<String>,
    pub details: Option<String>,
}

/// Flagged names plus every issue that flagged them.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    flagged: OrderedSet,
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Record an issue and flag the manufacturer(s) it implicates.
    pub(crate) fn push(&mut self, issue: ValidationIssue) {
        self.flagged.insert(&issue.manufacturer);
        if let Some(related) = &issue.related_manufacturer {
            self.flagged.insert(related);
        }
        self.issues.push(issue);
    }

    /// Distinct flagged names in the order they were first flagged.
    pub fn flagged_manufacturers(&self) -> Vec<String> {
        self.flagged.iter().map(str::to_string).collect()
    }

    pub fn is_flagged(&self, name: &str) -> bool {
        self.flagged.contains(name)
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Forward every issue to the log, one warning per issue.
pub fn log_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        match issue.kind {
            IssueKind::InvalidName => {
                warn!(manufacturer = %issue.manufacturer, "Invalid manufacturer name");
            }
            IssueKind::HighRelationCount => {
                warn!(
                    manufacturer = %issue.manufacturer,
                    details = issue.details.as_deref().unwrap_or(""),
                    "Manufacturer has an unusually high number of relations"
                );
            }
            IssueKind::HighSimilarity => {
                warn!(
                    manufacturer = %issue.manufacturer,
                    related = issue.related_manufacturer.as_deref().unwrap_or(""),
                    "High similarity between related manufacturers"
                );
            }
        }
    }
}
