//! Validate phase - runs lints on the document.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{ActivityNamingLint, DanglingReferenceLint, EmptyResourceLint, EmptySchemaLint};
use tracing::warn;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the document using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(ActivityNamingLint),
                Box::new(EmptyResourceLint),
                Box::new(DanglingReferenceLint),
                Box::new(EmptySchemaLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check document integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let start = ctx.diagnostics.len();
        for lint in &self.lints {
            lint.check(&ctx.document, &mut ctx.diagnostics);
        }

        for diag in ctx.diagnostics[start..]
            .iter()
            .filter(|d| d.severity.is_warning())
        {
            warn!(location = diag.location.as_deref(), "{}", diag.message);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use discogen_ir::{ApiDocument, Resource};

    use super::*;
    use crate::{TypeResolver, pipeline::Diagnostic};

    fn make_context(document: ApiDocument) -> CompilationContext {
        CompilationContext::new(document, TypeResolver::default())
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            [
                "activity-naming",
                "empty-resource",
                "dangling-reference",
                "empty-schema"
            ]
        );
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _document: &ApiDocument, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", "forced error"));
            }
        }

        let mut ctx = make_context(ApiDocument::default());
        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);

        assert!(phase.run(&mut ctx).is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let document = ApiDocument {
            name: "youtube".into(),
            resources: [("videos".to_string(), Resource::default())]
                .into_iter()
                .collect(),
            ..ApiDocument::default()
        };
        let mut ctx = make_context(document);

        let phase = ValidatePhase::empty().with_lint(EmptyResourceLint);
        assert!(phase.run(&mut ctx).is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }
}
