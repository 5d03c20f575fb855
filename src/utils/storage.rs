// ============================================================================
// STORAGE - Acceso clave/valor síncrono (localStorage o memoria)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use serde::{Serialize, de::DeserializeOwned};
use crate::error::AppResult;

/// Almacén clave/valor síncrono, sin garantías transaccionales
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

pub fn save_to_storage<T: Serialize>(storage: &dyn SessionStorage, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    storage.set_item(key, &json)
}

/// `None` si la clave no existe o el contenido no es JSON válido para `T`
pub fn load_from_storage<T: DeserializeOwned>(storage: &dyn SessionStorage, key: &str) -> Option<T> {
    let json = storage.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Contenido ilegible en '{}': {}", key, e);
            None
        }
    }
}

/// Implementación en memoria (tests y entornos sin window)
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

/// localStorage del navegador
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| crate::error::AppError::Dom(format!("Error guardando '{}' en localStorage", key)))
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|_| crate::error::AppError::Dom(format!("Error eliminando '{}' de localStorage", key)))
    }

    fn clear(&self) -> AppResult<()> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, UserRole};

    #[test]
    fn roundtrips_json_values() {
        let storage = MemoryStorage::new();
        save_to_storage(&storage, "user", &Session::new(UserRole::Admin, "admin@test.tld")).unwrap();
        let loaded: Option<Session> = load_from_storage(&storage, "user");
        assert_eq!(loaded, Some(Session::new(UserRole::Admin, "admin@test.tld")));
    }

    #[test]
    fn garbage_loads_as_none() {
        let storage = MemoryStorage::new();
        storage.set_item("user", "{not json").unwrap();
        assert!(load_from_storage::<Session>(&storage, "user").is_none());
        assert!(load_from_storage::<Session>(&storage, "missing").is_none());
    }
}
