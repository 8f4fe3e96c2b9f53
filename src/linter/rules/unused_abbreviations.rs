use std::collections::HashSet;

use mdabbr_mdast::{Visit, visit};

use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::{Document, Node};

pub struct UnusedAbbreviationsRule;

impl Rule for UnusedAbbreviationsRule {
    fn name(&self) -> &str {
        "unused-abbreviations"
    }

    fn check(&self, document: &Document, input: &str, _config: &Config) -> Vec<Diagnostic> {
        let referenced = referenced_labels(&document.mdast);
        let registry = &document.registry;

        registry
            .definitions()
            .iter()
            // report each label once, at the definition that is in effect
            .filter(|entry| registry.get(&entry.label).map(|e| &e.range) == Some(&entry.range))
            .filter(|entry| !referenced.contains(entry.label.as_str()))
            .map(|entry| {
                Diagnostic::info(
                    Location::from_offsets(entry.range.clone(), input),
                    "unused-abbreviations",
                    format!("Abbreviation '{}' is defined but never used", entry.label),
                )
            })
            .collect()
    }
}

fn referenced_labels(tree: &Node) -> HashSet<String> {
    let mut labels = HashSet::new();
    visit(tree, |node, _, _| {
        if let Node::AbbrReference { label, .. } = node {
            labels.insert(label.clone());
            return Visit::Skip;
        }
        Visit::Continue
    });
    labels
}
