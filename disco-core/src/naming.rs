//! Identifier and type-name transforms used throughout code generation.

use crate::{Error, Result};

/// Rust keywords that cannot be used as plain identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Check if a name is a reserved Rust keyword.
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Convert a camelCase name to snake_case (e.g., "contentDetails" -> "content_details").
///
/// A separator goes before an upper-case letter that starts a lower-case run,
/// and between a lower-case letter or digit and an upper-case letter, so
/// acronyms stay together: "HTTPServer" -> "http_server".
pub fn camel_to_under(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || next_is_lower {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Make a property name usable as a Rust field identifier.
///
/// The name is converted to snake_case; keywords get a trailing underscore
/// ("type" -> "type_").
pub fn mangle_ident(name: &str) -> String {
    let ident = camel_to_under(name);
    if is_rust_keyword(&ident) {
        format!("{}_", ident)
    } else {
        ident
    }
}

/// Storage field name for a property ("FooBar" -> "_foo_bar").
pub fn property_field_name(name: &str) -> String {
    format!("_{}", mangle_ident(name))
}

/// Singularize a plural noun: "ies" -> "y", a trailing "s" is dropped,
/// everything else is returned unchanged.
///
/// There is no table of irregular nouns; "data" becomes "dat". Generated type
/// names depend on this output, so it must stay stable.
pub fn singular(s: &str) -> Result<String> {
    if s.is_empty() {
        return Err(Error::consistency("cannot singularize an empty name"));
    }
    let stem = match s.strip_suffix("ies") {
        Some(stem) => format!("{}y", stem),
        None => s.strip_suffix('s').unwrap_or(s).to_string(),
    };
    if stem.is_empty() {
        return Err(Error::consistency(format!(
            "singular of '{}' is an empty name",
            s
        )));
    }
    Ok(stem)
}

/// Upper-case the first character and keep the rest ("videoList" -> "VideoList").
pub fn canonical_type_name(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Upper-case the first character and lower-case the rest ("contentDetails" -> "Contentdetails").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Schema type name a resource is assumed to manage ("videos" -> "Video").
pub fn resource_type_name(resource: &str) -> Result<String> {
    Ok(canonical_type_name(&singular(resource)?))
}

/// Type name of the builder grouping all methods of a resource.
pub fn resource_builder_type(resource: &str) -> Result<String> {
    Ok(format!(
        "{}MethodsBuilder",
        singular(&canonical_type_name(resource))?
    ))
}

/// Type name of the builder for one method of a resource
/// ("videos", "list" -> "VideoListMethodBuilder").
pub fn method_builder_type(resource: &str, method: &str) -> Result<String> {
    Ok(format!(
        "{}{}MethodBuilder",
        singular(&canonical_type_name(resource))?,
        capitalize(method)
    ))
}

/// Type name of the API hub from the document's canonical name.
pub fn hub_type(canonical_name: &str) -> String {
    canonical_type_name(canonical_name)
}

/// Split a fully-qualified activity name into `(resource, method)`.
pub fn activity_split(fqan: &str) -> Result<(&str, &str)> {
    let mut parts = fqan.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(resource), Some(method), None) => Ok((resource, method)),
        _ => Err(Error::invalid_fqan(fqan)),
    }
}

/// Inverse of [`activity_split`]; needs the API name.
pub fn to_fqan(api: &str, resource: &str, method: &str) -> String {
    format!("{}.{}.{}", api, resource, method)
}

/// Strip the `v` prefix of an API version ("v3" -> "3").
pub fn to_api_version(version: &str) -> Result<&str> {
    match version.strip_prefix('v') {
        Some(rest) if !rest.is_empty() => Ok(rest),
        _ => Err(Error::consistency(format!(
            "api version '{}' must look like 'v<number>'",
            version
        ))),
    }
}

/// Library name of an API ("youtube", "v3" -> "youtube3").
pub fn library_name(name: &str, version: &str) -> Result<String> {
    Ok(format!("{}{}", name, to_api_version(version)?))
}
