//! Lint for schemas without properties.

use discogen_ir::ApiDocument;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that notes object schemas declaring no properties. Such schemas
/// generate empty structs.
pub struct EmptySchemaLint;

impl Lint for EmptySchemaLint {
    fn name(&self) -> &'static str {
        "empty-schema"
    }

    fn description(&self) -> &'static str {
        "Note schemas without properties"
    }

    fn check(&self, document: &ApiDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (id, schema) in &document.schemas {
            if schema.properties.is_empty() {
                diagnostics.push(
                    Diagnostic::info("validate", format!("schema '{}' has no properties", id))
                        .at(format!("schemas.{}", id)),
                );
            }
        }
    }
}
