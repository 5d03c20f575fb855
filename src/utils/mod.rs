// Utils compartidos

pub mod constants;
pub mod file_types;
pub mod format;
pub mod html;
pub mod storage;

pub use constants::*;
pub use format::{format_date, format_status};
pub use storage::{SessionStorage, MemoryStorage, load_from_storage, save_to_storage};
