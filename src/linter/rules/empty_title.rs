use mdabbr_parser::syntax::{AbbrDefinition, AstNode};

use crate::Document;
use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;

pub struct EmptyTitleRule;

impl Rule for EmptyTitleRule {
    fn name(&self) -> &str {
        "empty-abbreviation-title"
    }

    fn check(&self, document: &Document, input: &str, _config: &Config) -> Vec<Diagnostic> {
        document
            .cst
            .descendants()
            .filter_map(AbbrDefinition::cast)
            .filter(|definition| definition.value().trim().is_empty())
            .map(|definition| {
                Diagnostic::warning(
                    Location::from_node(definition.syntax(), input),
                    "empty-abbreviation-title",
                    format!(
                        "Abbreviation '{}' has an empty title",
                        definition.label()
                    ),
                )
            })
            .collect()
    }
}
