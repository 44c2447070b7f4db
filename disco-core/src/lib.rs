//! Core utilities and types for the discogen binding generator.
//!
//! This crate provides the naming transforms and the fatal error kinds
//! shared by every other crate of the workspace.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod naming;

pub use error::{Error, Result};
// Identifier and type-name transforms
pub use naming::{
    activity_split, camel_to_under, canonical_type_name, capitalize, hub_type, is_rust_keyword,
    library_name, mangle_ident, method_builder_type, property_field_name, resource_builder_type,
    resource_type_name, singular, to_api_version, to_fqan,
};
