//! Type resolution and activity indexing for discogen.
//!
//! This crate turns a loaded [`ApiDocument`](discogen_ir::ApiDocument) into
//! everything the template layer needs to emit typed bindings.
//!
//! # Module Organization
//!
//! - [`type_mapper`] - Property descriptor to type expression ([`TypeResolver`])
//! - [`nested`] - Promotion of inline object definitions to named schemas
//! - [`context`] - Schema/activity cross-reference ([`Context`])
//! - [`markers`] - Semantic markers of a schema ([`Marker`])
//! - [`params`] - Ordering and filtering of method parameters
//! - [`pipeline`] - Phase orchestration from document to classified schemas

pub mod context;
pub mod markers;
pub mod nested;
pub mod params;
pub mod pipeline;
pub mod type_mapper;

pub use context::{Context, IndexedActivity};
pub use markers::{Marker, schema_markers};
pub use nested::{
    NestedTypes, is_nested_type_property, iter_nested_types, merge_nested_types, nested_type_name,
};
pub use params::{MethodParam, method_params};
pub use pipeline::{CompilationContext, Pipeline};
pub use type_mapper::{DescriptorKind, TypeResolver, is_pod_property};
