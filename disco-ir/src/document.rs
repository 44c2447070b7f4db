//! Root of an API description.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Resource, Schema};

/// A loaded API description document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocument {
    /// API name, the first segment of every activity name.
    pub name: String,
    /// API version ("v3").
    pub version: String,
    /// Human-friendly name used for the hub type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Data types by id.
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
    /// Resources by name.
    #[serde(default)]
    pub resources: IndexMap<String, Resource>,
}

impl ApiDocument {
    /// Name used for the hub type, falling back to the API name.
    pub fn canonical_name(&self) -> &str {
        self.canonical_name.as_deref().unwrap_or(&self.name)
    }
}
