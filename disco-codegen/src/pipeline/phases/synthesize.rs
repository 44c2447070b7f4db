//! Synthesize phase - promotes inline objects to nested schemas.

use discogen_ir::Schema;
use eyre::Result;

use crate::{
    iter_nested_types, merge_nested_types,
    pipeline::{CompilationContext, Phase},
};

/// Phase that adds a named schema for every inline object definition.
///
/// The schema set is scanned completely before anything is inserted.
pub struct SynthesizePhase;

impl Phase for SynthesizePhase {
    fn name(&self) -> &'static str {
        "synthesize"
    }

    fn description(&self) -> &'static str {
        "Promote inline object definitions to nested schemas"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let nested: Vec<Schema> = iter_nested_types(&ctx.document.schemas).collect();
        let added = merge_nested_types(&mut ctx.document.schemas, nested)?;
        ctx.nested_count += added;
        if added > 0 {
            ctx.add_info(self.name(), format!("merged {} nested types", added));
        }
        Ok(())
    }
}
