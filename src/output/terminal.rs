// Colored terminal output for relation lists and validation reports.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use crate::mapping::models::{ManufacturerRelation, Relationship};
use crate::pipeline::mapping::MappingSummary;
use crate::validation::{IssueKind, ValidationIssue, ValidationResult};

/// Display a list of manufacturer relations.
pub fn display_relations(relations: &[ManufacturerRelation]) {
    if relations.is_empty() {
        println!("No manufacturer relations stored. Run `brandgraph map` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Manufacturer Relations ({} manufacturers) ===", relations.len()).bold()
    );

    for relation in relations {
        println!(
            "\n  {} {}",
            super::truncate_chars(&relation.manufacturer, 60).bold(),
            format!("({} related)", relation.related_manufacturers.len()).dimmed()
        );
        for related in &relation.related_manufacturers {
            println!(
                "    {:<10} {}",
                colorize_relationship(related.relationship),
                super::truncate_chars(&related.name, 60)
            );
        }
    }
    println!();
}

/// Display validation issues and the flagged-manufacturer count.
pub fn display_validation(result: &ValidationResult) {
    if result.is_clean() {
        println!("\n{}", "Validation: no issues found.".green());
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Validation ({} issues, {} flagged manufacturers) ===",
            result.issues().len(),
            result.flagged_count()
        )
        .bold()
    );
    println!();

    for issue in result.issues() {
        println!("  {:<18} {}", colorize_issue(issue.kind), describe_issue(issue));
    }

    let invalid = count_kind(result, IssueKind::InvalidName);
    let high_count = count_kind(result, IssueKind::HighRelationCount);
    let similar = count_kind(result, IssueKind::HighSimilarity);

    println!();
    if invalid > 0 {
        println!("  {} {} invalid names", "!".red().bold(), invalid);
    }
    if high_count > 0 {
        println!("  {} {} over-connected manufacturers", "!".bright_red(), high_count);
    }
    if similar > 0 {
        println!("  {} {} near-duplicate pairs", "~".yellow(), similar);
    }
}

/// Display the outcome of a mapping run.
pub fn display_summary(summary: &MappingSummary) {
    println!("\n{}", "Mapping complete.".bold());
    println!("  Products loaded:   {}", summary.products_loaded);
    println!("  Matches loaded:    {}", summary.matches_loaded);
    println!("  Manufacturers:     {}", summary.relations.len());

    let edges: usize = summary
        .relations
        .iter()
        .map(|r| r.related_manufacturers.len())
        .sum();
    println!("  Directed relations: {edges}");

    match summary.relationships_saved {
        Some(n) => println!("  Saved to database: {n} relationships"),
        None => println!("  {}", "Not saved (--no-save)".dimmed()),
    }

    println!(
        "  Flagged manufacturers: {}",
        summary.validation.flagged_count()
    );
}

fn describe_issue(issue: &ValidationIssue) -> String {
    let mut text = match &issue.related_manufacturer {
        Some(related) => format!("{} <-> {}", issue.manufacturer, related),
        None => issue.manufacturer.clone(),
    };
    if let Some(details) = &issue.details {
        text.push_str(&format!(" ({details})"));
    }
    text
}

fn count_kind(result: &ValidationResult, kind: IssueKind) -> usize {
    result.issues().iter().filter(|i| i.kind == kind).count()
}

fn colorize_relationship(relationship: Relationship) -> colored::ColoredString {
    match relationship {
        Relationship::Parent => relationship.as_str().cyan(),
        Relationship::Child => relationship.as_str().blue(),
        Relationship::Sibling => relationship.as_str().dimmed(),
    }
}

fn colorize_issue(kind: IssueKind) -> colored::ColoredString {
    match kind {
        IssueKind::InvalidName => kind.as_str().red(),
        IssueKind::HighRelationCount => kind.as_str().bright_red(),
        IssueKind::HighSimilarity => kind.as_str().yellow(),
    }
}
