//! Interface boundary between the weave loader and the outside world.
//!
//! The host build pipeline talks to the loader through [`LoaderContext`];
//! the loader talks to the source compiler through [`Preprocessor`] and
//! [`Compiler`], and to the live-reload instrumentor through
//! [`HotInstrumentor`]. None of these are implemented here.

pub mod compiler;
pub mod error;
pub mod host;
pub mod options;
pub mod source_map;

pub use compiler::{
    Compiled, Compiler, Diagnostic, HotInstrumentor, HotRequest, Output, Preprocessor, Processed,
    Severity,
};
pub use error::{ApiError, ApiResult};
pub use host::{BuildTarget, LoaderContext, LoaderOutput};
pub use options::{
    CompileOptions, CompilerOptions, HotOptions, LoaderOptions, PreprocessOptions,
    WarningHandler,
};
pub use source_map::SourceMap;
