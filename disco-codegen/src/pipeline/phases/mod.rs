//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the document and collects diagnostics
//! - [`IndexPhase`] - builds the activity [`Context`](crate::Context)
//! - [`SynthesizePhase`] - promotes inline objects to nested schemas
//! - [`ResolvePhase`] - resolves the type of every schema property
//! - [`ClassifyPhase`] - computes the markers of every schema

mod classify;
mod index;
mod resolve;
mod synthesize;
mod validate;

pub use classify::ClassifyPhase;
pub use index::IndexPhase;
pub use resolve::ResolvePhase;
pub use synthesize::SynthesizePhase;
pub use validate::{
    ActivityNamingLint, DanglingReferenceLint, EmptyResourceLint, EmptySchemaLint, Lint,
    LintInfo, ValidatePhase,
};
