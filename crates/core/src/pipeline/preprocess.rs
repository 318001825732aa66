use crate::error::{LoaderError, Result};
use weave_api::{LoaderContext, PreprocessOptions, Preprocessor, Processed};

/// Run the external preprocessor and register what it read with the host.
///
/// On failure the failing file is registered before the error is returned,
/// so fixing that file retriggers the build.
pub(crate) async fn run(
    preprocessor: &dyn Preprocessor,
    ctx: &dyn LoaderContext,
    source: &str,
    options: &PreprocessOptions,
) -> Result<Processed> {
    match preprocessor.preprocess(source, options).await {
        Ok(processed) => {
            for dependency in &processed.dependencies {
                tracing::debug!("adding preprocess dependency {}", dependency.display());
                ctx.add_dependency(dependency);
            }
            Ok(processed)
        }
        Err(err) => {
            let err = LoaderError::preprocess(err);
            if let LoaderError::Preprocess {
                file: Some(file), ..
            } = &err
            {
                ctx.add_dependency(file);
            }
            tracing::warn!(
                "preprocess failed for {}: {}",
                ctx.resource_path().display(),
                err
            );
            Err(err)
        }
    }
}
