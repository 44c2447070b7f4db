//! Mapping of property descriptors to target type expressions.

use discogen_config::TypeMap;
use discogen_core::{Error, Result};
use discogen_ir::PropertyDescriptor;
use indexmap::IndexMap;

use crate::nested::nested_type_name;

/// Classified shape of a [`PropertyDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DescriptorKind<'a> {
    /// `$ref` to another schema.
    Reference(&'a str),
    Boolean,
    String,
    /// `integer` or `number`, with its optional format.
    Numeric(Option<&'a str>),
    /// `array` with its element descriptor.
    Array(&'a PropertyDescriptor),
    /// `object` with a value descriptor.
    Map(&'a PropertyDescriptor),
    /// `object` with an inline property map.
    NestedObject(&'a IndexMap<String, PropertyDescriptor>),
}

impl<'a> DescriptorKind<'a> {
    /// Classify a descriptor, returning the reason when it is malformed.
    ///
    /// A `$ref` wins over any type tag. An object with both a value
    /// descriptor and inline properties is a map.
    pub fn of(descriptor: &'a PropertyDescriptor) -> std::result::Result<Self, String> {
        if let Some(reference) = descriptor.reference.as_deref() {
            return Ok(DescriptorKind::Reference(reference));
        }

        let Some(tag) = descriptor.type_tag.as_deref() else {
            return Err("descriptor has neither a type nor a $ref".to_string());
        };

        match tag {
            "boolean" => Ok(DescriptorKind::Boolean),
            "string" => Ok(DescriptorKind::String),
            "integer" | "number" => Ok(DescriptorKind::Numeric(descriptor.format.as_deref())),
            "array" => descriptor
                .items
                .as_deref()
                .map(DescriptorKind::Array)
                .ok_or_else(|| "array has no 'items' descriptor".to_string()),
            "object" => match (&descriptor.additional_properties, &descriptor.properties) {
                (Some(value), _) => Ok(DescriptorKind::Map(&**value)),
                (None, Some(properties)) => Ok(DescriptorKind::NestedObject(properties)),
                (None, None) => {
                    Err("object has neither 'additionalProperties' nor 'properties'".to_string())
                }
            },
            other => Err(format!(
                "property type '{}' unknown - add a new type mapping",
                other
            )),
        }
    }
}

/// Returns true if the parameter is passed by value: it declares a numeric
/// format or is a boolean.
pub fn is_pod_property(descriptor: &PropertyDescriptor) -> bool {
    descriptor.format.is_some() || descriptor.has_type("boolean")
}

/// Resolves property descriptors to type expressions using a [`TypeMap`].
///
/// The resolver holds no state beyond its table, so one instance can be
/// shared by every schema of a run.
#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
    types: TypeMap,
}

impl TypeResolver {
    /// Create a resolver for the given type table.
    pub fn new(types: TypeMap) -> Self {
        Self { types }
    }

    /// Get the type table.
    pub fn type_map(&self) -> &TypeMap {
        &self.types
    }

    /// Resolve the type of `property` of `schema`.
    ///
    /// References, inline objects and scalars are wrapped as optional when
    /// `allow_optionals` is set. Sequences and maps never are: an empty
    /// container already expresses absence. Elements and map values are
    /// always resolved without optionals.
    ///
    /// `schema` is `None` for method parameters and request/response bodies;
    /// such descriptors cannot hold inline objects.
    pub fn resolve(
        &self,
        schema: Option<&str>,
        property: &str,
        descriptor: &PropertyDescriptor,
        allow_optionals: bool,
    ) -> Result<String> {
        let kind = DescriptorKind::of(descriptor)
            .map_err(|reason| schema_error(schema, property, descriptor, reason))?;

        let scalar = match kind {
            DescriptorKind::Reference(id) => return Ok(self.wrap(id, allow_optionals)),
            DescriptorKind::NestedObject(_) => {
                let Some(schema_name) = schema else {
                    return Err(schema_error(
                        schema,
                        property,
                        descriptor,
                        "inline object definitions are only supported on schema properties",
                    ));
                };
                let name = nested_type_name(schema_name, property);
                return Ok(self.wrap(&name, allow_optionals));
            }
            DescriptorKind::Array(items) => {
                let element = self.resolve(schema, property, items, false)?;
                return Ok(self.types.sequence_of(&element));
            }
            DescriptorKind::Map(value) => {
                let value = self.resolve(schema, property, value, false)?;
                return Ok(self.types.map_of(&value));
            }
            DescriptorKind::Boolean => self.types.boolean.as_str(),
            // Numeric values serialized as strings, e.g. "viewCount".
            DescriptorKind::String if property.contains("Count") => {
                self.types.string_count.as_str()
            }
            DescriptorKind::String => self.types.string.as_str(),
            DescriptorKind::Numeric(None) => {
                return Err(schema_error(
                    schema,
                    property,
                    descriptor,
                    "numeric property has no format",
                ));
            }
            DescriptorKind::Numeric(Some(format)) => {
                self.types.format(format).ok_or_else(|| {
                    schema_error(
                        schema,
                        property,
                        descriptor,
                        format!("format '{}' unknown - add a new type mapping", format),
                    )
                })?
            }
        };

        Ok(self.wrap(scalar, allow_optionals))
    }

    /// Resolve the type of a method parameter.
    pub fn activity_type(
        &self,
        name: &str,
        descriptor: &PropertyDescriptor,
        allow_optionals: bool,
    ) -> Result<String> {
        self.resolve(None, name, descriptor, allow_optionals)
    }

    /// Type a generated setter takes for a method parameter.
    ///
    /// Text is borrowed as `&str`, POD values are copied, anything else is
    /// borrowed.
    pub fn activity_input_type(
        &self,
        name: &str,
        descriptor: &PropertyDescriptor,
    ) -> Result<String> {
        let ty = self.activity_type(name, descriptor, false)?;
        if ty == self.types.string {
            return Ok("&str".to_string());
        }
        if is_pod_property(descriptor) {
            return Ok(ty);
        }
        Ok(format!("&{}", ty))
    }

    fn wrap(&self, ty: &str, allow_optionals: bool) -> String {
        if allow_optionals {
            self.types.optional_of(ty)
        } else {
            ty.to_string()
        }
    }
}

fn schema_error(
    schema: Option<&str>,
    property: &str,
    descriptor: &PropertyDescriptor,
    reason: impl Into<String>,
) -> Box<Error> {
    let raw = serde_json::to_string(descriptor).unwrap_or_else(|_| format!("{:?}", descriptor));
    Error::schema(schema.unwrap_or("<parameter>"), property, raw, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> TypeResolver {
        TypeResolver::default()
    }

    fn resolve(property: &str, descriptor: &PropertyDescriptor, allow_optionals: bool) -> String {
        resolver()
            .resolve(Some("Video"), property, descriptor, allow_optionals)
            .expect("should resolve")
    }

    fn numeric(tag: &str, format: &str) -> PropertyDescriptor {
        PropertyDescriptor::of_type(tag).with_format(format)
    }

    #[test]
    fn test_reference() {
        let d = PropertyDescriptor::reference("VideoSnippet");
        assert_eq!(resolve("snippet", &d, true), "Option<VideoSnippet>");
        assert_eq!(resolve("snippet", &d, false), "VideoSnippet");
    }

    #[test]
    fn test_scalars() {
        let flag = PropertyDescriptor::of_type("boolean");
        let text = PropertyDescriptor::of_type("string");
        assert_eq!(resolve("embeddable", &flag, true), "Option<bool>");
        assert_eq!(resolve("title", &text, true), "Option<String>");
        assert_eq!(resolve("title", &text, false), "String");
    }

    #[test]
    fn test_numeric_formats() {
        assert_eq!(resolve("position", &numeric("integer", "int32"), false), "i32");
        assert_eq!(resolve("maxResults", &numeric("integer", "uint32"), false), "u32");
        assert_eq!(resolve("ratio", &numeric("number", "double"), false), "f64");
        assert_eq!(resolve("position", &numeric("integer", "int32"), true), "Option<i32>");
    }

    #[test]
    fn test_unmapped_format_fails() {
        let d = numeric("integer", "int64");
        let err = resolver().resolve(Some("Video"), "size", &d, true).unwrap_err();
        assert!(err.is_schema());
        assert!(err.to_string().contains("int64"));

        let err = resolver()
            .resolve(Some("Video"), "size", &PropertyDescriptor::of_type("number"), true)
            .unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn test_count_strings_are_integers() {
        let d = PropertyDescriptor::of_type("string").with_format("uint64");
        assert_eq!(resolve("viewCount", &d, true), "Option<i64>");
        assert_eq!(resolve("viewCount", &d, false), "i64");
        assert_eq!(resolve("commentCount", &PropertyDescriptor::of_type("string"), false), "i64");
        // Only the exact casing counts.
        assert_eq!(resolve("count", &PropertyDescriptor::of_type("string"), false), "String");
    }

    #[test]
    fn test_arrays_are_never_optional() {
        let d = PropertyDescriptor::array_of(PropertyDescriptor::of_type("string"));
        assert_eq!(resolve("tags", &d, true), "Vec<String>");
        assert_eq!(resolve("tags", &d, false), "Vec<String>");

        let refs = PropertyDescriptor::array_of(PropertyDescriptor::reference("Video"));
        assert_eq!(resolve("items", &refs, true), "Vec<Video>");

        let nested = PropertyDescriptor::array_of(PropertyDescriptor::array_of(numeric(
            "number", "double",
        )));
        assert_eq!(resolve("matrix", &nested, true), "Vec<Vec<f64>>");
    }

    #[test]
    fn test_maps() {
        let d = PropertyDescriptor::map_of(PropertyDescriptor::reference("VideoLocalization"));
        assert_eq!(resolve("localizations", &d, true), "HashMap<String, VideoLocalization>");

        let counts = PropertyDescriptor::map_of(PropertyDescriptor::of_type("string"));
        assert_eq!(resolve("labelCount", &counts, true), "HashMap<String, i64>");
    }

    #[test]
    fn test_inline_object_uses_nested_name() {
        let d = PropertyDescriptor::inline_object([(
            "title".to_string(),
            PropertyDescriptor::of_type("string"),
        )]);
        assert_eq!(resolve("snippet", &d, true), "Option<VideoSnippet>");
        assert_eq!(resolve("contentDetails", &d, false), "VideoContentdetails");

        let list = PropertyDescriptor::array_of(d.clone());
        assert_eq!(resolve("thumbnails", &list, true), "Vec<VideoThumbnails>");

        let err = resolver().activity_type("filter", &d, false).unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn test_malformed_descriptors() {
        let cases = [
            PropertyDescriptor::of_type("datetime"),
            PropertyDescriptor::of_type("array"),
            PropertyDescriptor::of_type("object"),
            PropertyDescriptor::default(),
        ];
        for d in &cases {
            let err = resolver().resolve(Some("Video"), "field", d, true).unwrap_err();
            assert!(err.is_schema(), "expected schema error for {:?}", d);
        }
    }

    #[test]
    fn test_schema_error_carries_descriptor() {
        let d = PropertyDescriptor::of_type("datetime");
        let err = resolver().resolve(Some("Video"), "publishedAt", &d, true).unwrap_err();
        match *err {
            Error::Schema {
                schema,
                property,
                descriptor,
                ..
            } => {
                assert_eq!(schema, "Video");
                assert_eq!(property, "publishedAt");
                assert_eq!(descriptor, r#"{"type":"datetime"}"#);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_type_map() {
        let types = TypeMap {
            array: "SmallVec".into(),
            optional: "Maybe".into(),
            ..TypeMap::default()
        };
        let resolver = TypeResolver::new(types);
        let d = PropertyDescriptor::array_of(PropertyDescriptor::of_type("boolean"));
        assert_eq!(
            resolver.resolve(Some("Video"), "flags", &d, true).unwrap(),
            "SmallVec<bool>"
        );
        assert_eq!(
            resolver
                .resolve(Some("Video"), "flag", &PropertyDescriptor::of_type("boolean"), true)
                .unwrap(),
            "Maybe<bool>"
        );
    }

    #[test]
    fn test_activity_input_type() {
        let r = resolver();
        assert_eq!(
            r.activity_input_type("id", &PropertyDescriptor::of_type("string")).unwrap(),
            "&str"
        );
        assert_eq!(
            r.activity_input_type("maxResults", &numeric("integer", "uint32")).unwrap(),
            "u32"
        );
        assert_eq!(
            r.activity_input_type("mine", &PropertyDescriptor::of_type("boolean")).unwrap(),
            "bool"
        );
        let list = PropertyDescriptor::array_of(PropertyDescriptor::of_type("string"));
        assert_eq!(r.activity_input_type("ids", &list).unwrap(), "&Vec<String>");
    }

    #[test]
    fn test_is_pod_property() {
        assert!(is_pod_property(&PropertyDescriptor::of_type("boolean")));
        assert!(is_pod_property(&numeric("integer", "int32")));
        assert!(!is_pod_property(&PropertyDescriptor::of_type("string")));
    }
}
