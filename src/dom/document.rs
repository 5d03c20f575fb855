// ============================================================================
// DOCUMENT - Puerto hacia la página anfitriona
// ============================================================================
// Los viewmodels nunca tocan web_sys directamente: todo pasa por este trait,
// implementado por BrowserDocument (wasm) y MemoryDocument (tests/headless).
// Los elementos se direccionan siempre por id.
// ============================================================================

use std::rc::Rc;
use crate::error::AppResult;

/// Callback de evento; se clona por Rc para poder dispararlo sin préstamos vivos
pub type Handler = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    Submit,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Submit => "submit",
        }
    }
}

/// Contenido de un fichero elegido en un `<input type="file">`
#[derive(Debug, Clone)]
pub enum FilePayload {
    Bytes(Vec<u8>),
    #[cfg(target_arch = "wasm32")]
    Browser(web_sys::File),
}

#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub payload: FilePayload,
}

impl SelectedFile {
    pub fn from_bytes(name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content_type: content_type.to_string(),
            payload: FilePayload::Bytes(bytes),
        }
    }
}

pub trait Document {
    /// Reemplaza el contenido del elemento; los nodos anteriores (y sus listeners) desaparecen
    fn set_inner_html(&self, id: &str, html: &str) -> AppResult<()>;
    fn exists(&self, id: &str) -> bool;
    fn set_style(&self, id: &str, property: &str, value: &str) -> AppResult<()>;
    fn add_class(&self, id: &str, class: &str) -> AppResult<()>;
    fn remove_class(&self, id: &str, class: &str) -> AppResult<()>;
    fn attribute(&self, id: &str, name: &str) -> Option<String>;
    /// Valor actual de un input/textarea/select
    fn value(&self, id: &str) -> Option<String>;
    fn selected_file(&self, id: &str) -> Option<SelectedFile>;
    fn clear_file_input(&self, id: &str);
    fn element_width(&self, id: &str) -> Option<f64>;

    /// `None` si el elemento no existe
    fn listen(&self, id: &str, event: EventKind, handler: Handler) -> Option<ListenerId>;
    fn unlisten(&self, listener: ListenerId);

    /// Muestra el modal `id` con `body_html`; `false` si el entorno no sabe abrir modales
    fn show_modal(&self, id: &str, body_html: &str) -> bool;
    /// Notificación bloqueante
    fn alert(&self, message: &str);
    /// Registra `path` en el historial del navegador
    fn push_location(&self, path: &str);
}
