//! Promotion of anonymous inline objects to named schemas.
//!
//! Discovery is split in two phases. [`iter_nested_types`] scans the schema
//! set without touching it and yields one synthesized [`Schema`] per inline
//! object; [`merge_nested_types`] inserts them afterwards.

use std::collections::VecDeque;

use discogen_core::{Error, Result, canonical_type_name, capitalize};
use discogen_ir::{PropertyDescriptor, Schema};
use indexmap::IndexMap;
use tracing::debug;

/// Name of the type synthesized for an inline object
/// ("Video", "contentDetails" -> "VideoContentdetails").
pub fn nested_type_name(schema: &str, property: &str) -> String {
    format!("{}{}", canonical_type_name(schema), capitalize(property))
}

/// Returns true if the descriptor is an inline object definition.
pub fn is_nested_type_property(descriptor: &PropertyDescriptor) -> bool {
    descriptor.has_type("object")
        && descriptor.properties.is_some()
        && descriptor.additional_properties.is_none()
}

/// Find the inline object a property resolves to, looking through array
/// elements and map values the same way the type resolver does.
fn inline_object(descriptor: &PropertyDescriptor) -> Option<&PropertyDescriptor> {
    if descriptor.reference.is_some() {
        return None;
    }
    if is_nested_type_property(descriptor) {
        return Some(descriptor);
    }
    if descriptor.has_type("array") {
        return descriptor.items.as_deref().and_then(inline_object);
    }
    if descriptor.has_type("object") {
        return descriptor
            .additional_properties
            .as_deref()
            .and_then(inline_object);
    }
    None
}

/// Iterator over the nested types of a schema set, see [`iter_nested_types`].
pub struct NestedTypes<'a> {
    schemas: indexmap::map::Values<'a, String, Schema>,
    pending: VecDeque<Schema>,
}

impl NestedTypes<'_> {
    fn scan(&mut self, owner: &Schema) {
        for (property, descriptor) in &owner.properties {
            let Some(object) = inline_object(descriptor) else {
                continue;
            };
            self.pending.push_back(Schema {
                id: nested_type_name(&owner.id, property),
                type_tag: Some("object".to_string()),
                properties: object.properties.clone().unwrap_or_default(),
                nested: true,
                description: object.description.clone(),
            });
        }
    }
}

impl Iterator for NestedTypes<'_> {
    type Item = Schema;

    fn next(&mut self) -> Option<Schema> {
        loop {
            if let Some(nested) = self.pending.pop_front() {
                // Inline objects inside a promoted type are promoted too.
                self.scan(&nested);
                return Some(nested);
            }
            let schema = self.schemas.next()?;
            self.scan(schema);
        }
    }
}

/// Yield a synthesized schema for every inline object of `schemas`.
///
/// Schemas are visited in map order, so the sequence is deterministic.
pub fn iter_nested_types(schemas: &IndexMap<String, Schema>) -> NestedTypes<'_> {
    NestedTypes {
        schemas: schemas.values(),
        pending: VecDeque::new(),
    }
}

/// Insert synthesized schemas, returning how many were added.
///
/// A record equal to the schema already stored under its id is skipped, so
/// merging the same scan twice is a no-op. Any other clash is an error.
pub fn merge_nested_types(
    schemas: &mut IndexMap<String, Schema>,
    nested: impl IntoIterator<Item = Schema>,
) -> Result<usize> {
    let mut added = 0;
    for schema in nested {
        match schemas.get(&schema.id) {
            Some(existing) if *existing == schema => continue,
            Some(_) => {
                return Err(Error::consistency(format!(
                    "nested type '{}' collides with an existing schema",
                    schema.id
                )));
            }
            None => {
                debug!(schema = %schema.id, "merged nested type");
                schemas.insert(schema.id.clone(), schema);
                added += 1;
            }
        }
    }
    Ok(added)
}
