//! Compilation pipeline from a loaded document to classified schemas.
//!
//! A [`Pipeline`] runs the built-in phases (validate → index → synthesize →
//! resolve → classify) followed by any user phases, sharing state through a
//! [`CompilationContext`]. Non-fatal findings are collected as
//! [`Diagnostic`]s.
//!
//! # Example
//!
//! ```ignore
//! use discogen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(document, &config)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{CompilationContext, PropertyTypes, SchemaMarkers};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{FnPhase, Phase};
pub use runner::Pipeline;
