//! Schema and property descriptors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named data-type definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Unique schema id, also the generated type name.
    pub id: String,
    /// Primitive type tag, usually "object".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
    /// Fields of the schema.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, PropertyDescriptor>,
    /// Set on schemas promoted from an inline object definition.
    #[serde(skip_deserializing, skip_serializing_if = "std::ops::Not::not")]
    pub nested: bool,
    /// Description for doc comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema {
    /// Create an object schema with the given properties.
    pub fn object(
        id: impl Into<String>,
        properties: impl IntoIterator<Item = (String, PropertyDescriptor)>,
    ) -> Self {
        Self {
            id: id.into(),
            type_tag: Some("object".into()),
            properties: properties.into_iter().collect(),
            nested: false,
            description: None,
        }
    }

    /// Returns true if this schema was promoted from an inline definition.
    pub fn is_nested(&self) -> bool {
        self.nested
    }
}

/// Description of a single property or method parameter.
///
/// The type tag is kept verbatim; classification happens when the property
/// is resolved to a type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Primitive type tag (boolean, integer, number, string, array, object).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
    /// Refinement of the type tag, e.g. "int32" or "double".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Element descriptor of an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertyDescriptor>>,
    /// Value descriptor of a map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<PropertyDescriptor>>,
    /// Inline object definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, PropertyDescriptor>>,
    /// Reference to another schema id.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Whether a method parameter must be provided.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Where a method parameter is sent ("query", "path").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyDescriptor {
    /// A descriptor with only a type tag.
    pub fn of_type(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: Some(type_tag.into()),
            ..Self::default()
        }
    }

    /// A reference to another schema.
    pub fn reference(id: impl Into<String>) -> Self {
        Self {
            reference: Some(id.into()),
            ..Self::default()
        }
    }

    /// An array of `items`.
    pub fn array_of(items: PropertyDescriptor) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of_type("array")
        }
    }

    /// A string-keyed map of `value`.
    pub fn map_of(value: PropertyDescriptor) -> Self {
        Self {
            additional_properties: Some(Box::new(value)),
            ..Self::of_type("object")
        }
    }

    /// An anonymous inline object.
    pub fn inline_object(
        properties: impl IntoIterator<Item = (String, PropertyDescriptor)>,
    ) -> Self {
        Self {
            properties: Some(properties.into_iter().collect()),
            ..Self::of_type("object")
        }
    }

    /// Set the format refinement.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Returns true if the type tag equals `tag`.
    pub fn has_type(&self, tag: &str) -> bool {
        self.type_tag.as_deref() == Some(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_schema() {
        let schema: Schema = serde_json::from_str(
            r#"{
                "id": "Video",
                "type": "object",
                "properties": {
                    "id": { "type": "string" },
                    "tags": { "type": "array", "items": { "type": "string" } },
                    "statistics": { "$ref": "VideoStatistics" },
                    "localizations": {
                        "type": "object",
                        "additionalProperties": { "$ref": "VideoLocalization" }
                    }
                }
            }"#,
        )
        .expect("schema should parse");

        assert_eq!(schema.id, "Video");
        assert!(!schema.is_nested());
        let keys: Vec<_> = schema.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "tags", "statistics", "localizations"]);
        assert_eq!(
            schema.properties["statistics"].reference.as_deref(),
            Some("VideoStatistics")
        );
        assert!(schema.properties["localizations"]
            .additional_properties
            .is_some());
    }

    #[test]
    fn test_nested_flag_is_not_deserialized() {
        let schema: Schema =
            serde_json::from_str(r#"{ "id": "Video", "nested": true }"#).expect("should parse");
        assert!(!schema.nested);
    }

    #[test]
    fn test_descriptor_builders() {
        let d = PropertyDescriptor::array_of(
            PropertyDescriptor::of_type("integer").with_format("int32"),
        );
        assert!(d.has_type("array"));
        assert_eq!(d.items.as_ref().and_then(|i| i.format.as_deref()), Some("int32"));

        let json = serde_json::to_string(&PropertyDescriptor::reference("Video")).unwrap();
        assert_eq!(json, r#"{"$ref":"Video"}"#);
    }
}
