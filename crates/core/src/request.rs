use std::path::PathBuf;
use weave_api::{LoaderOptions, SourceMap};

/// One invocation of the loader for a matched resource.
#[derive(Debug, Clone)]
pub struct Request {
    pub resource_path: PathBuf,
    pub source: String,
    pub input_map: Option<SourceMap>,
    pub options: LoaderOptions,
}

/// What a request asks the loader to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind<'a> {
    /// Hand back a style payload stashed by an earlier primary compile.
    ServeVirtual(&'a str),
    PrimaryCompile,
}

impl Request {
    pub fn new(resource_path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            source: source.into(),
            input_map: None,
            options: LoaderOptions::default(),
        }
    }

    pub fn with_input_map(mut self, map: Option<SourceMap>) -> Self {
        self.input_map = map;
        self
    }

    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn virtual_artifact_path(&self) -> Option<&str> {
        self.options.css_path.as_deref()
    }

    pub fn classify(&self) -> RequestKind<'_> {
        match self.virtual_artifact_path() {
            Some(path) => RequestKind::ServeVirtual(path),
            None => RequestKind::PrimaryCompile,
        }
    }
}
