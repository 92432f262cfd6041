// Validation — flags suspicious manufacturers in a classified relation set.

pub mod issues;
pub mod validator;

pub use issues::{log_issues, IssueKind, ValidationIssue, ValidationResult};
pub use validator::{validate, validate_with, ValidationThresholds};
