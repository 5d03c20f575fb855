// ============================================================================
// STATE MODULE - Estado compartido y estado de vista del dashboard
// ============================================================================

pub mod app_state;
pub mod environment;
pub mod dashboard_state;

pub use app_state::*;
pub use environment::Environment;
pub use dashboard_state::*;
