//! Mapping from description type tags to target type names.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Target type names for every primitive type tag and numeric format.
///
/// `integer` and `number` have no entry of their own: they are resolved
/// through [`TypeMap::formats`] using the descriptor's `format`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeMap {
    /// Type for `boolean`.
    pub boolean: String,
    /// Type for `string`.
    pub string: String,
    /// Sequence container for `array`.
    pub array: String,
    /// String-keyed map container for `object` with `additionalProperties`.
    pub object: String,
    /// Wrapper expressing optional values.
    pub optional: String,
    /// Type for string properties whose name contains "Count".
    pub string_count: String,
    /// Types for `integer`/`number` by format. Entries from the config file
    /// extend the defaults.
    #[serde(deserialize_with = "deserialize_formats")]
    pub formats: BTreeMap<String, String>,
}

impl Default for TypeMap {
    fn default() -> Self {
        Self {
            boolean: "bool".into(),
            string: "String".into(),
            array: "Vec".into(),
            object: "HashMap".into(),
            optional: "Option".into(),
            string_count: "i64".into(),
            formats: default_formats(),
        }
    }
}

fn default_formats() -> BTreeMap<String, String> {
    [("int32", "i32"), ("uint32", "u32"), ("double", "f64")]
        .into_iter()
        .map(|(format, ty)| (format.to_string(), ty.to_string()))
        .collect()
}

fn deserialize_formats<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut formats = default_formats();
    formats.extend(overrides);
    Ok(formats)
}

impl TypeMap {
    /// Get the type for a numeric format.
    pub fn format(&self, format: &str) -> Option<&str> {
        self.formats.get(format).map(String::as_str)
    }

    /// Wrap a type as optional (e.g., `Option<i32>`).
    pub fn optional_of(&self, inner: &str) -> String {
        format!("{}<{}>", self.optional, inner)
    }

    /// Sequence container of `element` (e.g., `Vec<String>`).
    pub fn sequence_of(&self, element: &str) -> String {
        format!("{}<{}>", self.array, element)
    }

    /// String-keyed map of `value` (e.g., `HashMap<String, f64>`).
    pub fn map_of(&self, value: &str) -> String {
        format!("{}<{}, {}>", self.object, self.string, value)
    }

    /// Find the first entry with an empty type name, as `(key, message)`.
    pub fn find_empty_entry(&self) -> Option<(String, String)> {
        let named = [
            ("boolean", &self.boolean),
            ("string", &self.string),
            ("array", &self.array),
            ("object", &self.object),
            ("optional", &self.optional),
            ("string_count", &self.string_count),
        ];
        let empty_named = named
            .into_iter()
            .find(|(_, ty)| ty.trim().is_empty())
            .map(|(key, _)| key.to_string());
        let empty_format = || {
            self.formats
                .iter()
                .find(|(_, ty)| ty.trim().is_empty())
                .map(|(key, _)| key.clone())
        };

        empty_named
            .or_else(empty_format)
            .map(|key| (key.clone(), format!("type name for '{}' must not be empty", key)))
    }
}
