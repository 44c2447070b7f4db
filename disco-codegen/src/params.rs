//! Ordering and filtering of method parameters.

use discogen_ir::{Activity, PropertyDescriptor};

/// A method parameter with its position priority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodParam<'a> {
    pub name: &'a str,
    pub descriptor: &'a PropertyDescriptor,
    /// `len(parameterOrder) - index` for declared parameters, 0 otherwise.
    pub priority: usize,
}

/// Parameters of an activity, optionally restricted to those whose
/// `required` flag and `location` match.
///
/// Parameters listed in `parameterOrder` come first in declared order; the
/// remaining ones follow by name, both in descending order of
/// `(priority, name)`.
pub fn method_params<'a>(
    activity: &'a Activity,
    required: Option<bool>,
    location: Option<&str>,
) -> Vec<MethodParam<'a>> {
    let order = &activity.parameter_order;

    let mut params: Vec<MethodParam<'a>> = activity
        .parameters
        .iter()
        .filter(|(_, p)| required.is_none_or(|r| p.required == r))
        .filter(|(_, p)| location.is_none_or(|l| p.location.as_deref().unwrap_or("") == l))
        .map(|(name, descriptor)| MethodParam {
            name,
            descriptor,
            priority: order
                .iter()
                .position(|n| n == name)
                .map_or(0, |index| order.len() - index),
        })
        .collect();

    params.sort_by(|a, b| (b.priority, b.name).cmp(&(a.priority, a.name)));
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(required: bool, location: &str) -> PropertyDescriptor {
        PropertyDescriptor {
            required,
            location: Some(location.to_string()),
            ..PropertyDescriptor::of_type("string")
        }
    }

    fn activity() -> Activity {
        Activity {
            parameter_order: vec!["part".into(), "id".into()],
            parameters: [
                ("pageToken".to_string(), param(false, "query")),
                ("id".to_string(), param(true, "path")),
                ("maxResults".to_string(), param(false, "query")),
                ("part".to_string(), param(true, "query")),
            ]
            .into_iter()
            .collect(),
            ..Activity::new("youtube.videos.list")
        }
    }

    fn names(params: &[MethodParam<'_>]) -> Vec<String> {
        params.iter().map(|p| p.name.to_string()).collect()
    }

    #[test]
    fn test_declared_order_first() {
        let a = activity();
        let params = method_params(&a, None, None);
        assert_eq!(names(&params), ["part", "id", "pageToken", "maxResults"]);
        assert_eq!(params[0].priority, 2);
        assert_eq!(params[1].priority, 1);
        assert_eq!(params[2].priority, 0);
    }

    #[test]
    fn test_filters() {
        let a = activity();
        assert_eq!(names(&method_params(&a, Some(true), None)), ["part", "id"]);
        assert_eq!(
            names(&method_params(&a, Some(false), None)),
            ["pageToken", "maxResults"]
        );
        assert_eq!(names(&method_params(&a, None, Some("path"))), ["id"]);
        assert_eq!(names(&method_params(&a, Some(true), Some("query"))), ["part"]);
        assert!(method_params(&a, None, Some("body")).is_empty());
    }
}
