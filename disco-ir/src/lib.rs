//! Data model of API description documents for discogen.
//!
//! These types mirror the JSON layout of a REST discovery document closely
//! enough to be deserialized with `serde_json` by the document loader.
//!
//! # Architecture
//!
//! ```text
//! discovery.json → loader → ApiDocument (this crate) → discogen-codegen
//! ```
//!
//! The model is deliberately loose: descriptors keep their raw type tag and
//! are only classified when a property is resolved, so malformed input is
//! reported with the schema and property it belongs to.

mod activity;
mod document;
mod schema;

pub use activity::{Activity, IoRole, Resource};
pub use document::ApiDocument;
pub use schema::{PropertyDescriptor, Schema};
