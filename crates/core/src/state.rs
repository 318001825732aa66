use crate::allocator::IndexAllocator;
use crate::registry::VirtualArtifactRegistry;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// State shared by every request a loader serves.
///
/// The primary compile of a resource and the later request that retrieves
/// its extracted styles must see the same instance.
#[derive(Debug, Default)]
pub struct SharedState {
    pub registry: VirtualArtifactRegistry,
    pub allocator: IndexAllocator,
}

static GLOBAL_STATE: Lazy<Arc<SharedState>> = Lazy::new(|| Arc::new(SharedState::default()));

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance, created on first use.
    pub fn global() -> Arc<SharedState> {
        Arc::clone(&GLOBAL_STATE)
    }
}
