// ============================================================================
// AUTH GATE - Usuario actual y control de rol (solo lectura)
// ============================================================================

use std::rc::Rc;
use crate::error::AppResult;
use crate::models::{Session, UserRole};
use crate::utils::{load_from_storage, SessionStorage, USER_STORAGE_KEY};

#[derive(Clone)]
pub struct AuthGate {
    storage: Rc<dyn SessionStorage>,
}

impl AuthGate {
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Sesión persistida; `None` si no hay o no se puede leer
    pub fn current_user(&self) -> Option<Session> {
        load_from_storage::<Session>(self.storage.as_ref(), USER_STORAGE_KEY)
    }

    pub fn require_role(&self, role: UserRole) -> bool {
        match self.current_user() {
            Some(session) => session.role == role,
            None => false,
        }
    }

    /// Único punto donde el núcleo escribe en el storage de sesión
    pub fn logout(&self) -> AppResult<()> {
        log::info!("🚪 [AUTH] Logout, limpiando storage");
        self.storage.clear()
    }
}
