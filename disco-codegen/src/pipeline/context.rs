//! Compilation context passed through pipeline phases.

use std::collections::{BTreeMap, BTreeSet};

use discogen_ir::ApiDocument;
use eyre::{Result, eyre};
use indexmap::IndexMap;

use super::diagnostic::{Diagnostic, Severity};
use crate::{Context, Marker, TypeResolver};

/// Markers of every schema, by schema id.
pub type SchemaMarkers = BTreeMap<String, BTreeSet<Marker>>;

/// Resolved type expression of every property, by schema id then property
/// name, both in document order.
pub type PropertyTypes = IndexMap<String, IndexMap<String, String>>;

/// State carried through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The document being compiled. The synthesize phase adds nested types
    /// to its schemas.
    pub document: ApiDocument,
    pub resolver: TypeResolver,
    /// Activity cross-reference (populated by the index phase).
    pub context: Option<Context>,
    /// Number of nested types merged by the synthesize phase.
    pub nested_count: usize,
    /// Property types (populated by the resolve phase).
    pub property_types: Option<PropertyTypes>,
    /// Schema markers (populated by the classify phase).
    pub markers: Option<SchemaMarkers>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(document: ApiDocument, resolver: TypeResolver) -> Self {
        Self {
            document,
            resolver,
            context: None,
            nested_count: 0,
            property_types: None,
            markers: None,
            diagnostics: Vec::new(),
        }
    }

    /// The activity context, failing if the index phase has not run.
    pub fn require_context(&self) -> Result<&Context> {
        self.context
            .as_ref()
            .ok_or_else(|| eyre!("context not set - the index phase must run first"))
    }

    /// Markers of a schema, if the classify phase has run and the schema exists.
    pub fn markers_of(&self, schema: &str) -> Option<&BTreeSet<Marker>> {
        self.markers.as_ref()?.get(schema)
    }

    /// Resolved type of a schema property, if the resolve phase has run.
    pub fn property_type(&self, schema: &str, property: &str) -> Option<&str> {
        self.property_types
            .as_ref()?
            .get(schema)?
            .get(property)
            .map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
