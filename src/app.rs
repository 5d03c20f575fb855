// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Une AppState y Router. El arranque del navegador (lib.rs) solo construye los
// adaptadores web y delega aquí; el resto es independiente del entorno.
// ============================================================================

use std::rc::Rc;
use crate::router::{Navigate, RouteState, Router};
use crate::state::AppState;

pub struct App {
    state: AppState,
    router: Rc<Router>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let router = Router::new(state.clone());
        log::info!("🚀 [APP] Billed inicializada ({})", state.config.environment);
        Self { state, router }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> &Rc<Router> {
        &self.router
    }

    /// Primer render a partir de la ubicación actual del navegador
    pub fn start(&self, pathname: &str, hash: &str) -> RouteState {
        let path = initial_path(pathname, hash);
        log::info!("🔄 [APP] Arranque en {}", path);
        self.router.restore(&path)
    }

    /// Botón atrás/adelante del navegador
    pub fn on_history_change(&self, pathname: &str, hash: &str) -> RouteState {
        self.router.restore(&initial_path(pathname, hash))
    }

    pub fn navigate(&self, path: &str) -> RouteState {
        self.router.navigate(path)
    }

    pub fn on_navigate(&self) -> Navigate {
        self.router.on_navigate()
    }
}

/// El hash manda; sin hash se usa el pathname (la raíz es el login)
pub fn initial_path(pathname: &str, hash: &str) -> String {
    if hash.is_empty() || hash == "#" {
        if pathname.is_empty() {
            "/".to_string()
        } else {
            pathname.to_string()
        }
    } else {
        hash.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::models::UserRole;
    use crate::router::Route;
    use crate::testing::TestHost;

    #[test]
    fn initial_path_prefers_hash() {
        assert_eq!(initial_path("/", ""), "/");
        assert_eq!(initial_path("", "#"), "/");
        assert_eq!(initial_path("/", "#employee/bills"), "#employee/bills");
        assert_eq!(initial_path("/other", ""), "/other");
    }

    #[test]
    fn start_mounts_route_from_location() {
        let host = TestHost::new(vec![]);
        host.login_as(UserRole::Employee, "a@a");
        let app = App::new(host.state.clone());

        let state = app.start("/", "#employee/bill/new");

        assert_eq!(state, RouteState::Mounted(Route::NewBill));
        assert!(host.document.exists("form-new-bill"));
        assert!(host.document.history().is_empty());
    }

    #[test]
    fn unknown_start_path_is_not_fatal() {
        let host = TestHost::new(vec![]);
        let app = App::new(host.state.clone());
        assert!(matches!(app.start("/admin.php", ""), RouteState::NotFound(_)));
        assert!(matches!(app.navigate("/"), RouteState::Mounted(Route::Login)));
    }
}
