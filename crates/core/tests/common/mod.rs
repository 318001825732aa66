#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use weave_api::{
    ApiError, ApiResult, BuildTarget, CompileOptions, Compiled, Compiler, Diagnostic,
    HotInstrumentor, HotRequest, LoaderContext, Output, PreprocessOptions, Preprocessor,
    Processed, SourceMap,
};
use weave_core::{Loader, LoaderBuilder, SharedState};

/// Host context that records everything the loader tells it.
pub struct RecordingContext {
    resource: PathBuf,
    target: BuildTarget,
    minimize: bool,
    pub dependencies: Mutex<Vec<PathBuf>>,
    pub warnings: Mutex<Vec<Diagnostic>>,
    pub cacheable: AtomicBool,
}

impl RecordingContext {
    pub fn new(resource: impl Into<PathBuf>) -> Self {
        Self {
            resource: resource.into(),
            target: BuildTarget::Web,
            minimize: false,
            dependencies: Mutex::new(Vec::new()),
            warnings: Mutex::new(Vec::new()),
            cacheable: AtomicBool::new(false),
        }
    }

    pub fn with_target(mut self, target: BuildTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }

    pub fn dependencies(&self) -> Vec<PathBuf> {
        self.dependencies.lock().unwrap().clone()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings
            .lock()
            .unwrap()
            .iter()
            .map(|w| w.message.clone())
            .collect()
    }
}

impl LoaderContext for RecordingContext {
    fn resource_path(&self) -> &Path {
        &self.resource
    }

    fn target(&self) -> BuildTarget {
        self.target
    }

    fn minimize(&self) -> bool {
        self.minimize
    }

    fn cacheable(&self, flag: bool) {
        self.cacheable.store(flag, Ordering::SeqCst);
    }

    fn add_dependency(&self, file: &Path) {
        self.dependencies.lock().unwrap().push(file.to_path_buf());
    }

    fn emit_warning(&self, warning: &Diagnostic) {
        self.warnings.lock().unwrap().push(warning.clone());
    }
}

/// Prefixes the source with a marker; optionally fails or reports extras.
#[derive(Default)]
pub struct ScriptedPreprocessor {
    pub dependencies: Vec<PathBuf>,
    pub map: Option<SourceMap>,
    pub failing_file: Option<PathBuf>,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<PreprocessOptions>>,
}

#[async_trait]
impl Preprocessor for ScriptedPreprocessor {
    async fn preprocess(&self, source: &str, options: &PreprocessOptions) -> ApiResult<Processed> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(options.clone());
        tokio::task::yield_now().await;

        if self.fail {
            return Err(ApiError::Preprocess {
                file: self.failing_file.clone(),
                name: "Error".to_string(),
                message: "unknown mixin".to_string(),
            });
        }

        Ok(Processed {
            code: format!("/*pre*/{source}"),
            dependencies: self.dependencies.clone(),
            map: self.map.clone(),
        })
    }
}

/// Wraps the source in a call; styles and warnings are fixed up front.
#[derive(Default)]
pub struct ScriptedCompiler {
    pub css: Option<String>,
    pub warnings: Vec<Diagnostic>,
    pub map_sources_content: Option<Vec<Option<String>>>,
    pub failure: Option<(String, String)>,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<(String, CompileOptions)>>,
}

impl ScriptedCompiler {
    pub fn with_css(css: &str) -> Self {
        Self {
            css: Some(css.to_string()),
            ..Self::default()
        }
    }
}

impl Compiler for ScriptedCompiler {
    fn compile(&self, source: &str, options: &CompileOptions) -> ApiResult<Compiled> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((source.to_string(), options.clone()));

        if let Some((kind, message)) = &self.failure {
            return Err(ApiError::compile(kind.clone(), message.clone()));
        }

        Ok(Compiled {
            js: Output {
                code: format!("component({source:?});"),
                map: SourceMap {
                    sources: vec!["compiled".to_string()],
                    sources_content: self.map_sources_content.clone(),
                    mappings: "AAAA".to_string(),
                    ..SourceMap::default()
                },
            },
            css: self.css.as_ref().map(|code| Output {
                code: code.clone(),
                map: SourceMap::default(),
            }),
            warnings: self.warnings.clone(),
        })
    }
}

#[derive(Default)]
pub struct TaggingInstrumentor {
    pub ids: Mutex<Vec<String>>,
}

impl HotInstrumentor for TaggingInstrumentor {
    fn make_hot(&self, request: HotRequest<'_>) -> ApiResult<String> {
        self.ids.lock().unwrap().push(request.id.to_string());
        Ok(format!("/* hot {} */\n{}", request.id, request.code))
    }
}

pub fn builder(preprocessor: Arc<ScriptedPreprocessor>, compiler: Arc<ScriptedCompiler>) -> LoaderBuilder {
    Loader::builder(preprocessor, compiler).with_state(Arc::new(SharedState::new()))
}

pub fn loader(compiler: ScriptedCompiler) -> Loader {
    builder(Arc::new(ScriptedPreprocessor::default()), Arc::new(compiler)).build()
}
