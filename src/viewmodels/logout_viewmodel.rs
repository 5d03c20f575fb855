use std::rc::Rc;
use crate::dom::{EventKind, HandlerRegistry};
use crate::router::{Navigate, Route};
use crate::state::AppState;
use crate::views::layout::DISCONNECT_ID;

/// Botón de desconexión de la barra lateral
pub struct LogoutViewModel;

impl LogoutViewModel {
    pub fn bind(state: &AppState, registry: &HandlerRegistry, on_navigate: Navigate) -> bool {
        let auth = state.auth();
        registry.rebind(
            DISCONNECT_ID,
            EventKind::Click,
            Rc::new(move || {
                if let Err(e) = auth.logout() {
                    log::error!("❌ [AUTH] Error limpiando la sesión: {}", e);
                }
                on_navigate(Route::Login.path());
            }),
        )
    }
}
