//! Lint for resources without methods.

use discogen_ir::ApiDocument;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about resources declaring no methods.
pub struct EmptyResourceLint;

impl Lint for EmptyResourceLint {
    fn name(&self) -> &'static str {
        "empty-resource"
    }

    fn description(&self) -> &'static str {
        "Warn about resources without methods"
    }

    fn check(&self, document: &ApiDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (name, resource) in &document.resources {
            if resource.methods.is_empty() {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("resource '{}' has no methods", name))
                        .at(format!("resources.{}", name)),
                );
            }
        }
    }
}
