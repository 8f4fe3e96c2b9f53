pub mod diagnostics;
pub mod rules;
pub mod runner;

pub use diagnostics::{Diagnostic, Location, Severity};
pub use rules::{Rule, RuleRegistry};
pub use runner::LintRunner;

use crate::Document;
use crate::config::Config;

/// Lint a parsed document and return diagnostics.
pub fn lint(document: &Document, input: &str, config: &Config) -> Vec<Diagnostic> {
    let registry = default_registry();
    let runner = LintRunner::new(registry);
    runner.run(document, input, config)
}

/// Create the default rule registry with all built-in rules.
fn default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(rules::duplicate_labels::DuplicateLabelsRule));
    registry.register(Box::new(rules::unused_abbreviations::UnusedAbbreviationsRule));
    registry.register(Box::new(rules::empty_title::EmptyTitleRule));
    registry
}
