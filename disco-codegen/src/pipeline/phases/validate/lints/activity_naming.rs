//! Lint for fully-qualified activity names.

use std::collections::HashSet;

use discogen_ir::ApiDocument;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that checks activity names have the `api.resource.method` shape.
///
/// A name without exactly three segments, or used twice, is an error. A name
/// whose segments disagree with the API name or with the keys it is declared
/// under is a warning.
pub struct ActivityNamingLint;

impl Lint for ActivityNamingLint {
    fn name(&self) -> &'static str {
        "activity-naming"
    }

    fn description(&self) -> &'static str {
        "Check activity names are unique and match their resource and method"
    }

    fn check(&self, document: &ApiDocument, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();

        for (resource, res) in &document.resources {
            for (method, activity) in &res.methods {
                let location = format!("resources.{}.methods.{}", resource, method);
                let fqan = activity.id.as_str();

                if !seen.insert(fqan) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!("activity '{}' is declared more than once", fqan),
                        )
                        .at(&location),
                    );
                }

                let segments: Vec<&str> = fqan.split('.').collect();
                let [api, fqan_resource, fqan_method] = segments.as_slice() else {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "activity name '{}' must have exactly 3 segments, got {}",
                                fqan,
                                segments.len()
                            ),
                        )
                        .at(location),
                    );
                    continue;
                };

                if *api != document.name {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "activity '{}' does not start with the api name '{}'",
                                fqan, document.name
                            ),
                        )
                        .at(&location),
                    );
                }
                if *fqan_resource != resource.as_str() || *fqan_method != method.as_str() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "activity '{}' is declared as '{}.{}'",
                                fqan, resource, method
                            ),
                        )
                        .at(location),
                    );
                }
            }
        }
    }
}
