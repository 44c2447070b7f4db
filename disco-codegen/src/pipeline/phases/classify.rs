//! Classify phase - computes schema markers.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase, SchemaMarkers},
    schema_markers,
};

/// Phase that computes the markers of every schema, nested ones included.
///
/// Must run after the index phase.
pub struct ClassifyPhase;

impl Phase for ClassifyPhase {
    fn name(&self) -> &'static str {
        "classify"
    }

    fn description(&self) -> &'static str {
        "Compute the semantic markers of every schema"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let context = ctx.require_context()?;
        let markers: SchemaMarkers = ctx
            .document
            .schemas
            .values()
            .map(|schema| (schema.id.clone(), schema_markers(schema, context)))
            .collect();
        ctx.markers = Some(markers);
        Ok(())
    }
}
