pub mod bill;
pub mod session;

pub use bill::{Bill, BillRow, BillStatus};
pub use session::{Session, UserRole};
