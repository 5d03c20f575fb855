pub mod store;
pub mod auth_service;
pub mod bill_service;
#[cfg(target_arch = "wasm32")]
pub mod api_client;

pub use store::{BillsApi, CreateBillArgs, CreatedFile, Store, UpdateBillArgs};
pub use auth_service::AuthGate;
pub use bill_service::{list_all_bills, persist_status, update_bill, upload_receipt};
#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
