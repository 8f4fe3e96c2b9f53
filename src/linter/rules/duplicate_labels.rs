use std::collections::HashMap;

use crate::Document;
use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;

pub struct DuplicateLabelsRule;

impl Rule for DuplicateLabelsRule {
    fn name(&self) -> &str {
        "duplicate-abbreviation-labels"
    }

    fn check(&self, document: &Document, input: &str, _config: &Config) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut first_lines: HashMap<&str, usize> = HashMap::new();

        for entry in document.registry.definitions() {
            let location = Location::from_offsets(entry.range.clone(), input);

            if let Some(first_line) = first_lines.get(entry.label.as_str()) {
                diagnostics.push(Diagnostic::warning(
                    location,
                    "duplicate-abbreviation-labels",
                    format!(
                        "Duplicate abbreviation label '*[{}]' (first defined at line {}); this definition overrides it",
                        entry.label, first_line
                    ),
                ));
            } else {
                first_lines.insert(&entry.label, location.line);
            }
        }

        diagnostics
    }
}
