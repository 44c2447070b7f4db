//! Resolve phase - maps every schema property to its type expression.

use eyre::Result;
use indexmap::IndexMap;
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase, PropertyTypes};

/// Phase that resolves the type of every property of every schema, nested
/// ones included.
///
/// Must run after the synthesize phase so inline objects resolve to the names
/// of their promoted schemas. The first unresolvable descriptor aborts the run.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve the type of every schema property"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut types = PropertyTypes::new();
        for schema in ctx.document.schemas.values() {
            let mut fields = IndexMap::with_capacity(schema.properties.len());
            for (property, descriptor) in &schema.properties {
                let ty = ctx
                    .resolver
                    .resolve(Some(schema.id.as_str()), property, descriptor, true)?;
                fields.insert(property.clone(), ty);
            }
            types.insert(schema.id.clone(), fields);
        }

        debug!(schemas = types.len(), "resolved property types");
        ctx.property_types = Some(types);
        Ok(())
    }
}
