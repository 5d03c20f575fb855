// ============================================================================
// DOM MODULE - Puerto Document + implementaciones + registro de handlers
// ============================================================================

pub mod document;
pub mod memory;
pub mod registry;
#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use document::*;
pub use memory::MemoryDocument;
pub use registry::HandlerRegistry;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDocument;
