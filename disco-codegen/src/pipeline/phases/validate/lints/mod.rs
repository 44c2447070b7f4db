//! Built-in lints for document validation.

mod activity_naming;
mod dangling_reference;
mod empty_resource;
mod empty_schema;

pub use activity_naming::ActivityNamingLint;
pub use dangling_reference::DanglingReferenceLint;
pub use empty_resource::EmptyResourceLint;
pub use empty_schema::EmptySchemaLint;
