// ============================================================================
// APP STATE - Dependencias compartidas (sin singletons)
// ============================================================================
// Se clona en el Router y en cada viewmodel. Todo lo que antes era global
// (document, localStorage, store, config) entra por aquí.
// ============================================================================

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use crate::config::AppConfig;
use crate::dom::Document;
use crate::services::{AuthGate, Store};
use crate::state::Environment;
use crate::utils::SessionStorage;

pub type LocalFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Lanza una tarea en el hilo de UI (spawn_local en el navegador)
pub type Spawner = Rc<dyn Fn(LocalFuture)>;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub document: Rc<dyn Document>,
    pub storage: Rc<dyn SessionStorage>,
    pub store: Option<Rc<dyn Store>>,
    spawner: Spawner,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        document: Rc<dyn Document>,
        storage: Rc<dyn SessionStorage>,
        store: Option<Rc<dyn Store>>,
        spawner: Spawner,
    ) -> Self {
        Self {
            config,
            document,
            storage,
            store,
            spawner,
        }
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        (self.spawner)(Box::pin(future));
    }

    pub fn auth(&self) -> AuthGate {
        AuthGate::new(self.storage.clone())
    }

    /// Entorno resuelto para el usuario conectado ahora mismo
    pub fn environment(&self) -> Environment {
        Environment {
            current_user_email: self.auth().current_user().map(|s| s.email).filter(|e| !e.is_empty()),
            excluded_emails: self.config.test_users.clone(),
        }
    }
}
