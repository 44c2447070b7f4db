//! Lint for `$ref`s naming unknown schemas.

use discogen_ir::{ApiDocument, IoRole, PropertyDescriptor};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about references to schemas the document does not define.
///
/// Properties, activity bodies and parameters are all checked, including
/// array elements, map values and inline object fields.
pub struct DanglingReferenceLint;

impl Lint for DanglingReferenceLint {
    fn name(&self) -> &'static str {
        "dangling-reference"
    }

    fn description(&self) -> &'static str {
        "Warn about references to undefined schemas"
    }

    fn check(&self, document: &ApiDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (id, schema) in &document.schemas {
            for (property, descriptor) in &schema.properties {
                let location = format!("schemas.{}.properties.{}", id, property);
                check_descriptor(document, descriptor, &location, diagnostics);
            }
        }

        for (resource, res) in &document.resources {
            for (method, activity) in &res.methods {
                let base = format!("resources.{}.methods.{}", resource, method);
                for role in IoRole::ALL {
                    if let Some(body) = activity.io(role) {
                        let location = format!("{}.{}", base, role);
                        check_descriptor(document, body, &location, diagnostics);
                    }
                }
                for (name, param) in &activity.parameters {
                    let location = format!("{}.parameters.{}", base, name);
                    check_descriptor(document, param, &location, diagnostics);
                }
            }
        }
    }
}

fn check_descriptor(
    document: &ApiDocument,
    descriptor: &PropertyDescriptor,
    location: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if let Some(reference) = &descriptor.reference {
        if !document.schemas.contains_key(reference) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("reference to undefined schema '{}'", reference),
                )
                .at(location),
            );
        }
    }
    if let Some(items) = &descriptor.items {
        check_descriptor(document, items, location, diagnostics);
    }
    if let Some(value) = &descriptor.additional_properties {
        check_descriptor(document, value, location, diagnostics);
    }
    for (field, nested) in descriptor.properties.iter().flatten() {
        let location = format!("{}.{}", location, field);
        check_descriptor(document, nested, &location, diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use discogen_ir::{Activity, Resource, Schema};

    use super::*;

    fn check(document: &ApiDocument) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        DanglingReferenceLint.check(document, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_dangling_references() {
        let video = Schema::object(
            "Video",
            [
                ("status".to_string(), PropertyDescriptor::reference("VideoStatus")),
                (
                    "thumbnails".to_string(),
                    PropertyDescriptor::map_of(PropertyDescriptor::reference("Thumbnail")),
                ),
                (
                    "snippet".to_string(),
                    PropertyDescriptor::inline_object([(
                        "tags".to_string(),
                        PropertyDescriptor::array_of(PropertyDescriptor::reference("Tag")),
                    )]),
                ),
            ],
        );
        let status = Schema::object("VideoStatus", []);
        let list = Activity::new("youtube.videos.list").with_response("VideoListResponse");

        let document = ApiDocument {
            name: "youtube".into(),
            schemas: [video, status]
                .into_iter()
                .map(|s| (s.id.clone(), s))
                .collect(),
            resources: [(
                "videos".to_string(),
                Resource::with_methods([("list".to_string(), list)]),
            )]
            .into_iter()
            .collect(),
            ..ApiDocument::default()
        };

        let diagnostics = check(&document);
        let locations: Vec<&str> = diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(
            locations,
            [
                "schemas.Video.properties.thumbnails",
                "schemas.Video.properties.snippet.tags",
                "resources.videos.methods.list.response",
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
    }
}
