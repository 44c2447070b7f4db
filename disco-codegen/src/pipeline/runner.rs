//! Pipeline orchestrator.

use discogen_config::Config;
use discogen_ir::ApiDocument;
use eyre::Result;
use tracing::{debug, info};

use super::{
    CompilationContext, Phase,
    phases::{ClassifyPhase, IndexPhase, ResolvePhase, SynthesizePhase, ValidatePhase},
};
use crate::TypeResolver;

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, index, synthesize, resolve, classify)
/// and then any phases added with [`Pipeline::phase`].
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a document.
    ///
    /// # Errors
    ///
    /// Returns an error if validation reports an error diagnostic or if any
    /// phase fails fatally.
    pub fn run(&self, document: ApiDocument, config: &Config) -> Result<CompilationContext> {
        let resolver = TypeResolver::new(config.types.clone());
        let mut ctx = CompilationContext::new(document, resolver);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new()),
            Box::new(IndexPhase),
            Box::new(SynthesizePhase),
            Box::new(ResolvePhase),
            Box::new(ClassifyPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
            info!(
                phase = phase.name(),
                diagnostics = ctx.diagnostics.len(),
                "phase complete"
            );
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
