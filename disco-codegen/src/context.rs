//! Cross-reference between schemas and the activities using them.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use discogen_core::{Error, Result, activity_split, resource_type_name};
use discogen_ir::{Activity, IoRole, Resource};
use indexmap::IndexMap;
use tracing::debug;

use crate::TypeResolver;

/// Activities associated with one schema type, with the roles it plays in each.
pub type ActivityRoles = BTreeMap<String, BTreeSet<IoRole>>;

/// An activity along with the parts of its fully-qualified name.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedActivity {
    /// Resource segment of the activity name ("videos").
    pub resource: String,
    /// Method segment of the activity name ("list").
    pub method: String,
    /// Schema type the resource is assumed to manage ("Video").
    pub resource_type: String,
    pub activity: Activity,
}

/// Immutable cross-reference of schemas, activities and resources.
///
/// Built once by [`Context::build`]; there is no way to add activities
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// schema type name -> { fqan -> roles }
    schema_activities: BTreeMap<String, ActivityRoles>,
    /// fqan -> activity
    activities: BTreeMap<String, IndexedActivity>,
    /// resource name -> method names
    resource_methods: BTreeMap<String, Vec<String>>,
}

impl Context {
    /// Index every activity of `resources` in a single pass.
    ///
    /// Each activity is recorded under the type of its request and response
    /// bodies with the matching role, and always under the type derived from
    /// its resource name, with no role if the bodies don't use that type.
    /// This covers activities without bodies (delete) and activities
    /// returning ancillary result types (getRating).
    ///
    /// # Errors
    ///
    /// Fails if two activities share a fully-qualified name, if a name does
    /// not have exactly three segments, or if a body type cannot be resolved.
    pub fn build(
        resources: &IndexMap<String, Resource>,
        resolver: &TypeResolver,
    ) -> Result<Self> {
        let mut ctx = Context::default();

        for activity in resources.values().flat_map(|r| r.methods.values()) {
            ctx.index(activity, resolver)?;
        }

        debug!(
            activities = ctx.activities.len(),
            schema_types = ctx.schema_activities.len(),
            "built activity context"
        );
        Ok(ctx)
    }

    fn index(&mut self, activity: &Activity, resolver: &TypeResolver) -> Result<()> {
        let fqan = activity.id.as_str();
        if self.activities.contains_key(fqan) {
            return Err(Error::duplicate_activity(fqan));
        }
        let (resource, method) = activity_split(fqan)?;
        let resource_type = resource_type_name(resource)?;

        for role in IoRole::ALL {
            let Some(body) = activity.io(role) else {
                continue;
            };
            let type_name = resolver.resolve(None, role.as_str(), body, false)?;
            self.schema_activities
                .entry(type_name)
                .or_default()
                .entry(fqan.to_string())
                .or_default()
                .insert(role);
        }

        self.schema_activities
            .entry(resource_type.clone())
            .or_default()
            .entry(fqan.to_string())
            .or_default();

        self.resource_methods
            .entry(resource.to_string())
            .or_default()
            .push(method.to_string());

        debug!(activity = fqan, resource, method, "indexed activity");
        self.activities.insert(
            fqan.to_string(),
            IndexedActivity {
                resource: resource.to_string(),
                method: method.to_string(),
                resource_type,
                activity: activity.clone(),
            },
        );
        Ok(())
    }

    /// Activities associated with a schema type, if any.
    pub fn activities_of(&self, type_name: &str) -> Option<&ActivityRoles> {
        self.schema_activities.get(type_name)
    }

    /// Look up an activity by its fully-qualified name.
    pub fn activity(&self, fqan: &str) -> Option<&IndexedActivity> {
        self.activities.get(fqan)
    }

    /// Method names of a resource, in document order.
    pub fn resource_methods(&self, resource: &str) -> &[String] {
        self.resource_methods
            .get(resource)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All resource names with their method names.
    pub fn resources(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.resource_methods
            .iter()
            .map(|(resource, methods)| (resource.as_str(), methods.as_slice()))
    }

    /// All activities, ordered by fully-qualified name.
    pub fn iter_activities(&self) -> impl Iterator<Item = &IndexedActivity> {
        self.activities.values()
    }

    /// All schema type names referenced by at least one activity.
    pub fn schema_type_names(&self) -> impl Iterator<Item = &str> {
        self.schema_activities.keys().map(String::as_str)
    }

    /// Number of indexed activities.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (type_name, activities) in &self.schema_activities {
            writeln!(f, "{}", type_name)?;
            for (fqan, roles) in activities {
                let roles: Vec<&str> = roles.iter().map(IoRole::as_str).collect();
                if roles.is_empty() {
                    writeln!(f, "  {}: -", fqan)?;
                } else {
                    writeln!(f, "  {}: {}", fqan, roles.join(", "))?;
                }
            }
        }
        Ok(())
    }
}
