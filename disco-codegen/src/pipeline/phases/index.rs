//! Index phase - builds the activity context.

use eyre::Result;

use crate::{
    Context,
    pipeline::{CompilationContext, Phase},
};

/// Phase that indexes every activity of the document by schema type.
pub struct IndexPhase;

impl Phase for IndexPhase {
    fn name(&self) -> &'static str {
        "index"
    }

    fn description(&self) -> &'static str {
        "Index activities by the schema types they use"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let context = Context::build(&ctx.document.resources, &ctx.resolver)?;
        ctx.add_info(
            self.name(),
            format!("indexed {} activities", context.activity_count()),
        );
        ctx.context = Some(context);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use discogen_ir::{Activity, ApiDocument, Resource};

    use super::*;
    use crate::TypeResolver;

    fn make_context(activities: Vec<Activity>) -> CompilationContext {
        let methods = activities.into_iter().enumerate().map(|(i, a)| (i.to_string(), a));
        let document = ApiDocument {
            name: "youtube".into(),
            version: "v3".into(),
            resources: [("videos".to_string(), Resource::with_methods(methods))]
                .into_iter()
                .collect(),
            ..ApiDocument::default()
        };
        CompilationContext::new(document, TypeResolver::default())
    }

    #[test]
    fn test_index_populates_context() {
        let mut ctx = make_context(vec![
            Activity::new("youtube.videos.list").with_response("VideoListResponse"),
            Activity::new("youtube.videos.delete"),
        ]);
        IndexPhase.run(&mut ctx).expect("index should succeed");

        let context = ctx.require_context().expect("context");
        assert_eq!(context.activity_count(), 2);
        assert!(context.activities_of("VideoListResponse").is_some());
    }

    #[test]
    fn test_index_duplicate_is_fatal() {
        let mut ctx = make_context(vec![
            Activity::new("youtube.videos.list"),
            Activity::new("youtube.videos.list"),
        ]);
        assert!(IndexPhase.run(&mut ctx).is_err());
        assert!(ctx.context.is_none());
    }
}
