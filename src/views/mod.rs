// ============================================================================
// VIEWS - Funciones puras (datos) -> markup
// ============================================================================

pub mod icons;
pub mod layout;
pub mod status;
pub mod login;
pub mod bills;
pub mod new_bill;
pub mod dashboard;
pub mod dashboard_form;

pub use status::{render_error, render_loading, render_not_found};
pub use login::render_login;
pub use bills::render_bills;
pub use new_bill::render_new_bill;
pub use dashboard::{card, cards, filtered_bills, get_status, render_dashboard};
pub use dashboard_form::{render_big_billed_icon, render_dashboard_form};
