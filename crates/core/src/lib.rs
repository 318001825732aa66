//! Per-file transform that compiles a component through an external
//! compiler and splits extracted styles into a virtual module the host
//! fetches by re-entering the same loader.

pub mod allocator;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod registry;
pub mod request;
pub mod settings;
pub mod state;

pub use allocator::{IndexAllocator, posixify};
pub use error::{LoaderError, Result};
pub use pipeline::{Loader, LoaderBuilder};
pub use registry::VirtualArtifactRegistry;
pub use request::{Request, RequestKind};
pub use settings::LoaderSettings;
pub use state::SharedState;
