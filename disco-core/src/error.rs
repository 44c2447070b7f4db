use miette::Diagnostic;
use thiserror::Error;

/// Result type for discogen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Fatal errors raised while resolving types or indexing activities.
///
/// Both kinds abort the generation run. The input is a static document, so
/// nothing is retried and nothing is defaulted.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot resolve '{schema}.{property}': {reason}")]
    #[diagnostic(
        code(discogen::schema_error),
        help("offending descriptor: {descriptor}")
    )]
    Schema {
        schema: String,
        property: String,
        descriptor: String,
        reason: String,
    },

    #[error("{reason}")]
    #[diagnostic(code(discogen::consistency_error))]
    Consistency { reason: String },
}

impl Error {
    /// Create a schema error for a property descriptor.
    ///
    /// `descriptor` is the raw descriptor, usually rendered as JSON.
    pub fn schema(
        schema: impl Into<String>,
        property: impl Into<String>,
        descriptor: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Schema {
            schema: schema.into(),
            property: property.into(),
            descriptor: descriptor.into(),
            reason: reason.into(),
        })
    }

    /// Create a consistency error.
    pub fn consistency(reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::Consistency {
            reason: reason.into(),
        })
    }

    /// Two activities share one fully-qualified name.
    pub fn duplicate_activity(fqan: &str) -> Box<Self> {
        Self::consistency(format!("duplicate activity '{}'", fqan))
    }

    /// A fully-qualified activity name is not `api.resource.method`.
    pub fn invalid_fqan(fqan: &str) -> Box<Self> {
        Self::consistency(format!(
            "activity name '{}' must have exactly 3 dot-separated segments",
            fqan
        ))
    }

    /// Returns true for [`Error::Schema`].
    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema { .. })
    }

    /// Returns true for [`Error::Consistency`].
    pub fn is_consistency(&self) -> bool {
        matches!(self, Error::Consistency { .. })
    }
}
