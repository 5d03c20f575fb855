// ============================================================================
// BROWSER DOCUMENT - Implementación web_sys del puerto Document
// ============================================================================
// Cada listener guarda su Closure; al quitarlo se hace remove_event_listener y
// el Closure se libera en la siguiente microtarea (nunca durante su propia
// ejecución). Nada de closure.forget(): los handlers de tarjetas se re-enlazan
// en cada render.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use crate::dom::{Document, EventKind, FilePayload, Handler, ListenerId, SelectedFile};
use crate::error::{AppError, AppResult};

struct BrowserListener {
    element: Element,
    event: EventKind,
    closure: Closure<dyn FnMut(Event)>,
}

pub struct BrowserDocument {
    document: web_sys::Document,
    listeners: RefCell<HashMap<ListenerId, BrowserListener>>,
    next_listener: Cell<u64>,
}

impl BrowserDocument {
    pub fn new() -> AppResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Dom("No document".to_string()))?;
        Ok(Self {
            document,
            listeners: RefCell::new(HashMap::new()),
            next_listener: Cell::new(0),
        })
    }

    fn element(&self, id: &str) -> AppResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::missing_element(id))
    }

    fn html_element(&self, id: &str) -> AppResult<HtmlElement> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| AppError::Dom(format!("#{} no es un HtmlElement", id)))
    }
}

fn js_error(e: JsValue) -> AppError {
    AppError::Dom(format!("{:?}", e))
}

impl Document for BrowserDocument {
    fn set_inner_html(&self, id: &str, html: &str) -> AppResult<()> {
        self.element(id)?.set_inner_html(html);
        Ok(())
    }

    fn exists(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_style(&self, id: &str, property: &str, value: &str) -> AppResult<()> {
        self.html_element(id)?
            .style()
            .set_property(property, value)
            .map_err(js_error)
    }

    fn add_class(&self, id: &str, class: &str) -> AppResult<()> {
        self.element(id)?.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, id: &str, class: &str) -> AppResult<()> {
        self.element(id)?.class_list().remove_1(class).map_err(js_error)
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.get_attribute(name)
    }

    fn value(&self, id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Some(textarea.value());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        None
    }

    fn selected_file(&self, id: &str) -> Option<SelectedFile> {
        let input = self.document.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()?;
        let file = input.files()?.get(0)?;
        Some(SelectedFile {
            name: file.name(),
            content_type: file.type_(),
            payload: FilePayload::Browser(file),
        })
    }

    fn clear_file_input(&self, id: &str) {
        if let Some(input) = self
            .document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }

    fn element_width(&self, id: &str) -> Option<f64> {
        self.html_element(id).ok().map(|e| e.offset_width() as f64)
    }

    fn listen(&self, id: &str, event: EventKind, handler: Handler) -> Option<ListenerId> {
        let element = self.document.get_element_by_id(id)?;
        let closure = Closure::wrap(Box::new(move |e: Event| {
            if event == EventKind::Submit {
                e.prevent_default();
            }
            handler();
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) = element.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref()) {
            log::error!("❌ [DOM] No se pudo enlazar {} en #{}: {:?}", event.as_str(), id, e);
            return None;
        }

        let listener_id = ListenerId(self.next_listener.get() + 1);
        self.next_listener.set(listener_id.0);
        self.listeners.borrow_mut().insert(listener_id, BrowserListener { element, event, closure });
        Some(listener_id)
    }

    fn unlisten(&self, listener: ListenerId) {
        let removed = self.listeners.borrow_mut().remove(&listener);
        if let Some(listener) = removed {
            let _ = listener.element.remove_event_listener_with_callback(
                listener.event.as_str(),
                listener.closure.as_ref().unchecked_ref(),
            );
            wasm_bindgen_futures::spawn_local(async move {
                drop(listener);
            });
        }
    }

    fn show_modal(&self, id: &str, body_html: &str) -> bool {
        let selector = format!("#{} .modal-body", id);
        match self.document.query_selector(&selector) {
            Ok(Some(body)) => body.set_inner_html(body_html),
            _ => return false,
        }

        // Los modales son de Bootstrap (jQuery); sin $.fn.modal no hay nada que abrir
        let js_code = format!(
            "(typeof $ === 'function' && $.fn && typeof $.fn.modal === 'function') ? ($('#{}').modal('show'), true) : false",
            id
        );
        match js_sys::eval(&js_code) {
            Ok(result) => result.as_bool().unwrap_or(false),
            Err(e) => {
                log::warn!("⚠️ [DOM] Modal #{} no disponible: {:?}", id, e);
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn push_location(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let origin = window.location().origin().unwrap_or_default();
        if let Ok(history) = window.history() {
            let url = format!("{}/{}", origin, path.trim_start_matches('/'));
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, path, Some(&url)) {
                log::warn!("⚠️ [DOM] pushState falló para {}: {:?}", path, e);
            }
        }
    }
}
