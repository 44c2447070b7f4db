//! Configuration for the discogen binding generator.
//!
//! The configuration is read from a `discogen.toml` file. Its main job is to
//! carry the [`TypeMap`], the table turning description type tags into
//! target type names, as an explicit value instead of process-wide state.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod type_map;

pub use config::Config;
pub use error::{Error, Result, SourceContext};
pub use type_map::TypeMap;
