// ============================================================================
// BILLED - CLIENTE SPA DE NOTAS DE GASTOS (RUST PURO + MVVM)
// ============================================================================
// Arquitectura MVVM:
// - Views: funciones que generan markup (sin lógica)
// - ViewModels: estado de vista + handlers
// - Services: auth y store remoto
// - State: AppState explícito + estado del dashboard
// - Dom: puerto Document (web_sys en el navegador, memoria en tests)
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod dom;
pub mod state;
pub mod services;
pub mod utils;
pub mod views;
pub mod viewmodels;
pub mod router;
pub mod app;

#[cfg(test)]
mod testing;

pub use app::App;
pub use error::{AppError, AppResult};
pub use router::{Route, RouteState, Router};

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use crate::app::App;
    use crate::config::CONFIG;
    use crate::dom::{BrowserDocument, Document};
    use crate::services::{ApiClient, Store};
    use crate::state::{AppState, LocalFuture, Spawner};
    use crate::utils::storage::BrowserStorage;
    use crate::utils::SessionStorage;

    // Instancia global de la app (solo en el hilo de UI)
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    fn location() -> (String, String) {
        web_sys::window()
            .map(|w| w.location())
            .map(|l| (l.pathname().unwrap_or_default(), l.hash().unwrap_or_default()))
            .unwrap_or_else(|| ("/".to_string(), String::new()))
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        log::info!("🚀 Billed - Rust Puro + MVVM");

        let document: Rc<dyn Document> =
            Rc::new(BrowserDocument::new().map_err(|e| JsValue::from_str(&e.to_string()))?);
        let storage: Rc<dyn SessionStorage> = Rc::new(BrowserStorage);
        let store: Rc<dyn Store> = Rc::new(ApiClient::new(&CONFIG.backend_url, &CONFIG.jwt_storage_key, storage.clone()));
        let spawner: Spawner = Rc::new(|future: LocalFuture| wasm_bindgen_futures::spawn_local(future));

        let app = App::new(AppState::new(CONFIG.clone(), document, storage, Some(store), spawner));
        let (pathname, hash) = location();
        app.start(&pathname, &hash);

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });

        // Atrás/adelante del navegador. Se registra una sola vez en el arranque.
        if let Some(win) = web_sys::window() {
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                let (pathname, hash) = location();
                APP.with(|cell| {
                    if let Some(app) = cell.borrow().as_ref() {
                        app.on_history_change(&pathname, &hash);
                    }
                });
            }) as Box<dyn FnMut(web_sys::Event)>);
            win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Navegación desde JavaScript (p. ej. tras el login)
    #[wasm_bindgen]
    pub fn on_navigate(path: String) {
        let navigate = APP.with(|cell| cell.borrow().as_ref().map(|app| app.on_navigate()));
        match navigate {
            Some(navigate) => navigate(&path),
            None => log::warn!("⚠️ [APP] App no inicializada, navegación a {} ignorada", path),
        }
    }
}
