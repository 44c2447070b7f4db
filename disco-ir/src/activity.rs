//! Activities (API methods) and the resources grouping them.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::PropertyDescriptor;

/// Whether a schema is sent to or received from an activity.
///
/// Variants are ordered so role sets iterate as request, response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IoRole {
    Request,
    Response,
}

impl IoRole {
    /// Both roles, in declaration order.
    pub const ALL: [IoRole; 2] = [IoRole::Request, IoRole::Response];

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            IoRole::Request => "request",
            IoRole::Response => "response",
        }
    }
}

impl fmt::Display for IoRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A callable API method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Fully-qualified activity name (`api.resource.method`).
    pub id: String,
    /// HTTP verb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    /// Request body, usually a `$ref`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<PropertyDescriptor>,
    /// Response body, usually a `$ref`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<PropertyDescriptor>,
    /// Method parameters by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, PropertyDescriptor>,
    /// Declared positional order of the most important parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter_order: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Activity {
    /// Create an activity without request, response or parameters.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the request body to a schema reference.
    pub fn with_request(mut self, schema: impl Into<String>) -> Self {
        self.request = Some(PropertyDescriptor::reference(schema));
        self
    }

    /// Set the response body to a schema reference.
    pub fn with_response(mut self, schema: impl Into<String>) -> Self {
        self.response = Some(PropertyDescriptor::reference(schema));
        self
    }

    /// Get the body descriptor for the given role.
    pub fn io(&self, role: IoRole) -> Option<&PropertyDescriptor> {
        match role {
            IoRole::Request => self.request.as_ref(),
            IoRole::Response => self.response.as_ref(),
        }
    }
}

/// A named group of activities (e.g. "videos").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Activities by method name.
    #[serde(default)]
    pub methods: IndexMap<String, Activity>,
}

impl Resource {
    /// Create a resource from its activities, keyed by method name.
    pub fn with_methods(methods: impl IntoIterator<Item = (String, Activity)>) -> Self {
        Self {
            methods: methods.into_iter().collect(),
        }
    }
}
