//! Semantic markers deciding which capabilities a generated type exposes.

use std::{collections::BTreeSet, fmt};

use discogen_ir::{IoRole, Schema};

use crate::Context;

/// A semantic category of a schema.
///
/// Variants are declared alphabetically so sets of markers sort by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    /// Promoted from an inline object definition.
    NestedType,
    /// Only used as part of other types.
    Part,
    /// Sent as the body of an activity.
    RequestResult,
    /// Managed by the resource of one of its activities.
    Resource,
    /// Returned as the body of an activity.
    ResponseResult,
}

impl Marker {
    /// Get the trait name used by the templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::NestedType => "NestedType",
            Marker::Part => "Part",
            Marker::RequestResult => "RequestResult",
            Marker::Resource => "Resource",
            Marker::ResponseResult => "ResponseResult",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the markers of a schema.
///
/// A schema no activity refers to is a [`Marker::Part`]. Otherwise it is a
/// [`Marker::Resource`] when the resource of one of its activities derives
/// its type name (compared case-insensitively), and a request/response result
/// for each role it plays. Nested schemas are always [`Marker::NestedType`].
pub fn schema_markers(schema: &Schema, ctx: &Context) -> BTreeSet<Marker> {
    let mut markers = BTreeSet::new();

    match ctx.activities_of(&schema.id).filter(|a| !a.is_empty()) {
        None => {
            markers.insert(Marker::Part);
        }
        Some(activities) => {
            let id = schema.id.to_lowercase();
            for (fqan, roles) in activities {
                let manages_schema = ctx
                    .activity(fqan)
                    .is_some_and(|a| a.resource_type.to_lowercase() == id);
                if manages_schema {
                    markers.insert(Marker::Resource);
                }
                if roles.contains(&IoRole::Response) {
                    markers.insert(Marker::ResponseResult);
                }
                if roles.contains(&IoRole::Request) {
                    markers.insert(Marker::RequestResult);
                }
            }
        }
    }

    if schema.is_nested() {
        markers.insert(Marker::NestedType);
    }
    markers
}
