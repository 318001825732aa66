//! The per-request transform.
//!
//! ```text
//! Request ──► classify ──► ServeVirtual(path) ──► registry.take(path) ──► styles
//!                 │
//!                 └──► PrimaryCompile
//!                         preprocess ──► compile ──► route warnings
//!                             ──► [hot reload] ──► [emit virtual styles] ──► code + map
//! ```

mod compile;
mod diagnostics;
mod emit;
mod hot;
mod preprocess;

pub use compile::{DEFAULT_FORMAT, compile_options};
pub use emit::{import_statement, virtual_artifact_path};
pub use hot::module_id;

use crate::error::{LoaderError, Result};
use crate::request::{Request, RequestKind};
use crate::settings::LoaderSettings;
use crate::state::SharedState;
use serde_json::Value;
use std::sync::Arc;
use weave_api::{
    Compiler, HotInstrumentor, LoaderContext, LoaderOptions, LoaderOutput, Preprocessor,
    SourceMap, WarningHandler,
};

pub struct Loader {
    preprocessor: Arc<dyn Preprocessor>,
    compiler: Arc<dyn Compiler>,
    instrumentor: Option<Arc<dyn HotInstrumentor>>,
    onwarn: Option<Arc<dyn WarningHandler>>,
    state: Arc<SharedState>,
    settings: LoaderSettings,
}

pub struct LoaderBuilder {
    preprocessor: Arc<dyn Preprocessor>,
    compiler: Arc<dyn Compiler>,
    instrumentor: Option<Arc<dyn HotInstrumentor>>,
    onwarn: Option<Arc<dyn WarningHandler>>,
    state: Option<Arc<SharedState>>,
    settings: LoaderSettings,
}

impl LoaderBuilder {
    pub fn with_instrumentor(mut self, instrumentor: Arc<dyn HotInstrumentor>) -> Self {
        self.instrumentor = Some(instrumentor);
        self
    }

    /// Handler used for requests whose options carry no `onwarn` of their own.
    pub fn with_warning_handler(mut self, handler: Arc<dyn WarningHandler>) -> Self {
        self.onwarn = Some(handler);
        self
    }

    /// Use an isolated registry and allocator instead of the process-wide one.
    pub fn with_state(mut self, state: Arc<SharedState>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_settings(mut self, settings: LoaderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Loader {
        Loader {
            preprocessor: self.preprocessor,
            compiler: self.compiler,
            instrumentor: self.instrumentor,
            onwarn: self.onwarn,
            state: self.state.unwrap_or_else(SharedState::global),
            settings: self.settings,
        }
    }
}

impl Loader {
    pub fn builder(preprocessor: Arc<dyn Preprocessor>, compiler: Arc<dyn Compiler>) -> LoaderBuilder {
        LoaderBuilder {
            preprocessor,
            compiler,
            instrumentor: None,
            onwarn: None,
            state: None,
            settings: LoaderSettings::from_env().unwrap_or_default(),
        }
    }

    pub fn state(&self) -> &Arc<SharedState> {
        &self.state
    }

    /// Host entry point: decode `options`, transform, and complete exactly once.
    pub async fn handle<F>(
        &self,
        ctx: &dyn LoaderContext,
        source: String,
        map: Option<SourceMap>,
        options: &Value,
        callback: F,
    ) where
        F: FnOnce(Result<LoaderOutput>),
    {
        let result = match LoaderOptions::from_value(options) {
            Ok(options) => {
                let request = Request::new(ctx.resource_path(), source)
                    .with_input_map(map)
                    .with_options(options);
                self.transform(ctx, request).await
            }
            Err(err) => Err(LoaderError::Options(err)),
        };
        callback(result)
    }

    pub async fn transform(&self, ctx: &dyn LoaderContext, request: Request) -> Result<LoaderOutput> {
        ctx.cacheable(true);

        if let RequestKind::ServeVirtual(path) = request.classify() {
            return self.serve(path);
        }
        self.compile_primary(ctx, request).await
    }

    fn serve(&self, path: &str) -> Result<LoaderOutput> {
        if !self.state.registry.contains(path) {
            tracing::warn!("virtual artifact {} requested but not pending", path);
        }
        let payload = self.state.registry.take(path)?;
        tracing::debug!(
            "served virtual artifact {} ({} still pending)",
            path,
            self.state.registry.pending()
        );
        Ok(LoaderOutput::new(payload, None))
    }

    async fn compile_primary(&self, ctx: &dyn LoaderContext, request: Request) -> Result<LoaderOutput> {
        let Request {
            resource_path,
            source,
            input_map,
            mut options,
        } = request;
        if input_map.is_some() {
            tracing::debug!(
                "ignoring input source map for {}",
                resource_path.display()
            );
        }
        if options.onwarn.is_none() {
            options.onwarn = self.onwarn.clone();
        }

        let filename = resource_path.to_string_lossy().into_owned();
        let is_server = ctx.target().is_server()
            || options.compiler_options.is_ssr();
        let is_production = ctx.minimize() || self.settings.production;

        let mut compile_options = compile_options(&filename, &options);
        let mut preprocess_options = options.preprocess.clone();
        preprocess_options.filename = Some(filename.clone());

        tracing::debug!(
            "compiling {} (last style index {:?})",
            filename,
            self.state.allocator.current(&filename)
        );
        let processed =
            preprocess::run(self.preprocessor.as_ref(), ctx, &source, &preprocess_options).await?;
        let mut compiled =
            compile::run(self.compiler.as_ref(), processed, &source, &mut compile_options)?;

        diagnostics::route(ctx, options.onwarn.as_deref(), &compiled.warnings);

        if options.hot_reload && !is_production && !is_server {
            match &self.instrumentor {
                Some(instrumentor) => {
                    compiled.js.code = hot::instrument(
                        instrumentor.as_ref(),
                        &self.settings.working_dir,
                        &compiled,
                        &source,
                        &compile_options,
                        &options.hot_options,
                    )?;
                }
                None => tracing::warn!(
                    "hot reload requested for {} but no instrumentor is configured",
                    filename
                ),
            }
        }

        if options.emit_css
            && let Some(css) = compiled.css.take().filter(|css| !css.code.is_empty())
        {
            emit::emit_virtual_artifact(
                &self.state,
                &self.settings.loader_request,
                &filename,
                &mut compiled.js.code,
                css,
            )?;
        }

        Ok(LoaderOutput::new(compiled.js.code, Some(compiled.js.map)))
    }
}
