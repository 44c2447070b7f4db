//! Parsing of discogen.toml.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result, SourceContext, TypeMap};

const DEFAULT_FILENAME: &str = "discogen.toml";

/// Root configuration for discogen.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Type mapping table handed to the type resolver.
    #[serde(default)]
    pub types: TypeMap,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl Config {
    /// Parse a discogen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a discogen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
        config.validate(&source_ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        match self.types.find_empty_entry() {
            Some((key, message)) => Err(ctx.validation_error(&key, message)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().expect("empty config should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.types.optional, "Option");
    }

    #[test]
    fn test_type_overrides() {
        let config: Config = r#"
            [types]
            array = "SmallVec"
            object = "BTreeMap"

            [types.formats]
            int64 = "i64"
        "#
        .parse()
        .expect("config should parse");

        assert_eq!(config.types.array, "SmallVec");
        assert_eq!(config.types.map_of("u32"), "BTreeMap<String, u32>");
        assert_eq!(config.types.format("int64"), Some("i64"));
        assert_eq!(config.types.format("int32"), Some("i32"));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::from_str("[types]\nlist = \"Vec\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_type_name_is_validation_error() {
        let err = Config::from_str("[types]\nboolean = \"\"\n").unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert!(span.is_some());
                assert!(message.contains("boolean"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_span_points_at_assignment() {
        let src = "[types]\nstring_count = \"i64\"\nstring = \"\"\n";
        let err = Config::from_str(src).unwrap_err();
        match *err {
            Error::Validation { span, .. } => {
                let span = span.expect("span");
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "string");
                assert_eq!(span.offset(), src.find("string = ").expect("assignment"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[types.formats]\nfloat = \"f32\"").expect("write config");

        let config = Config::from_file(file.path()).expect("config should load");
        assert_eq!(config.types.format("float"), Some("f32"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Config::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
