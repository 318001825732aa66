use crate::compiler::Diagnostic;
use crate::source_map::SourceMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The environment the host is building for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    #[default]
    Web,
    Webworker,
    Node,
}

impl BuildTarget {
    pub fn is_server(&self) -> bool {
        matches!(self, BuildTarget::Node)
    }
}

/// Per-request view of the host build pipeline.
///
/// One context is handed to the loader for every matched resource. The
/// methods that record state take `&self` because the host may keep
/// observing the context from other tasks while the request is in flight.
pub trait LoaderContext: Send + Sync {
    /// Absolute path of the resource being transformed.
    fn resource_path(&self) -> &Path;

    fn target(&self) -> BuildTarget;

    /// True for minified (production) builds.
    fn minimize(&self) -> bool;

    /// Mark the output of this request as cacheable by the host.
    fn cacheable(&self, flag: bool);

    /// Rebuild this output whenever `file` changes.
    fn add_dependency(&self, file: &Path);

    fn emit_warning(&self, warning: &Diagnostic);
}

/// What the loader hands back to the host on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOutput {
    pub code: String,
    pub map: Option<SourceMap>,
}

impl LoaderOutput {
    pub fn new(code: impl Into<String>, map: Option<SourceMap>) -> Self {
        Self {
            code: code.into(),
            map,
        }
    }
}
