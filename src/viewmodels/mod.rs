// ============================================================================
// VIEWMODELS - Estado de vista + lógica de interacción por página
// ============================================================================
// Cada viewmodel se monta sobre el markup ya renderizado, enlaza sus handlers
// en un HandlerRegistry propio y los libera todos al desmontarse.
// ============================================================================

pub mod logout_viewmodel;
pub mod bills_viewmodel;
pub mod new_bill_viewmodel;
pub mod dashboard_viewmodel;

pub use logout_viewmodel::LogoutViewModel;
pub use bills_viewmodel::BillsViewModel;
pub use new_bill_viewmodel::{NewBillViewModel, StagedFile};
pub use dashboard_viewmodel::DashboardViewModel;

/// Vista montada por el router
pub trait MountedView {
    /// Quita todos los listeners; las tareas pendientes ya no tocan el DOM
    fn unmount(&self);
}
