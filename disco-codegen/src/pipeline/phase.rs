//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// One step of the pipeline.
///
/// A phase reads what earlier phases left in the [`CompilationContext`] and
/// adds its own results. Problems that should not stop the run go to
/// `ctx.diagnostics`; returning an error stops it.
pub trait Phase: Send + Sync {
    /// Short identifier used in diagnostics and logs ("index").
    fn name(&self) -> &'static str;

    /// One-line summary, logged when the phase starts.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}

/// A phase backed by a closure.
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(FnPhase::new(
///     "count-parts",
///     "Count schemas only used inside others",
///     |ctx| {
///         let parts = ctx.markers.iter().flatten().filter(|(_, m)| m.contains(&Marker::Part));
///         ctx.add_info("count-parts", format!("{} part types", parts.count()));
///         Ok(())
///     },
/// ));
/// ```
pub struct FnPhase<F> {
    name: &'static str,
    description: &'static str,
    run: F,
}

impl<F> FnPhase<F>
where
    F: Fn(&mut CompilationContext) -> Result<()> + Send + Sync,
{
    pub fn new(name: &'static str, description: &'static str, run: F) -> Self {
        Self {
            name,
            description,
            run,
        }
    }
}

impl<F> Phase for FnPhase<F>
where
    F: Fn(&mut CompilationContext) -> Result<()> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        (self.run)(ctx)
    }
}
