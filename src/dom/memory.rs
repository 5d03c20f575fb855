// ============================================================================
// MEMORY DOCUMENT - Documento en memoria (tests y entornos sin navegador)
// ============================================================================
// Mantiene una tabla de elementos por id construida a partir del markup que se
// inyecta con set_inner_html. Reemplazar el contenido de un elemento destruye
// sus descendientes y los listeners asociados, igual que en el navegador.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use crate::dom::{Document, EventKind, Handler, ListenerId, SelectedFile};
use crate::error::{AppError, AppResult};
use crate::utils::ROOT_ID;

const DEFAULT_WIDTH: f64 = 500.0;

#[derive(Default)]
struct MemElement {
    tag: String,
    attributes: HashMap<String, String>,
    classes: Vec<String>,
    style: HashMap<String, String>,
    inner_html: String,
    children: Vec<String>,
    value: String,
    file: Option<SelectedFile>,
}

struct Listener {
    element_id: String,
    event: EventKind,
    handler: Handler,
}

struct Inner {
    elements: HashMap<String, MemElement>,
    listeners: HashMap<ListenerId, Listener>,
    next_listener: u64,
    alerts: Vec<String>,
    modals: Vec<(String, String)>,
    history: Vec<String>,
    modal_support: bool,
    widths: HashMap<String, f64>,
}

pub struct MemoryDocument {
    inner: RefCell<Inner>,
}

impl MemoryDocument {
    /// Documento con un único `<div id="root">` y soporte de modales
    pub fn new() -> Self {
        let mut elements = HashMap::new();
        elements.insert(
            ROOT_ID.to_string(),
            MemElement {
                tag: "div".to_string(),
                ..MemElement::default()
            },
        );
        Self {
            inner: RefCell::new(Inner {
                elements,
                listeners: HashMap::new(),
                next_listener: 0,
                alerts: Vec::new(),
                modals: Vec::new(),
                history: Vec::new(),
                modal_support: true,
                widths: HashMap::new(),
            }),
        }
    }

    pub fn without_modal_support(self) -> Self {
        self.inner.borrow_mut().modal_support = false;
        self
    }

    /// Dispara los listeners de `event` del elemento; devuelve cuántos se ejecutaron
    pub fn dispatch(&self, id: &str, event: EventKind) -> usize {
        let handlers: Vec<Handler> = {
            let inner = self.inner.borrow();
            let mut matching: Vec<(&ListenerId, &Listener)> = inner
                .listeners
                .iter()
                .filter(|(_, l)| l.element_id == id && l.event == event)
                .collect();
            matching.sort_by_key(|(listener_id, _)| **listener_id);
            matching.into_iter().map(|(_, l)| l.handler.clone()).collect()
        };
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    pub fn click(&self, id: &str) -> usize {
        self.dispatch(id, EventKind::Click)
    }

    pub fn listener_count(&self, id: &str, event: EventKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|l| l.element_id == id && l.event == event)
            .count()
    }

    pub fn total_listeners(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.inner.borrow().elements.get(id).map(|e| e.inner_html.clone())
    }

    pub fn style(&self, id: &str, property: &str) -> Option<String> {
        self.inner.borrow().elements.get(id)?.style.get(property).cloned()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.inner
            .borrow()
            .elements
            .get(id)
            .map(|e| e.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn tag(&self, id: &str) -> Option<String> {
        self.inner.borrow().elements.get(id).map(|e| e.tag.clone())
    }

    pub fn set_value(&self, id: &str, value: &str) -> AppResult<()> {
        let mut inner = self.inner.borrow_mut();
        let element = inner.elements.get_mut(id).ok_or_else(|| AppError::missing_element(id))?;
        element.value = value.to_string();
        Ok(())
    }

    pub fn set_file(&self, id: &str, file: SelectedFile) -> AppResult<()> {
        let mut inner = self.inner.borrow_mut();
        let element = inner.elements.get_mut(id).ok_or_else(|| AppError::missing_element(id))?;
        element.value = format!("C:\\fakepath\\{}", file.name);
        element.file = Some(file);
        Ok(())
    }

    pub fn set_width(&self, id: &str, width: f64) {
        self.inner.borrow_mut().widths.insert(id.to_string(), width);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.inner.borrow().alerts.clone()
    }

    pub fn modals(&self) -> Vec<(String, String)> {
        self.inner.borrow().modals.clone()
    }

    pub fn history(&self) -> Vec<String> {
        self.inner.borrow().history.clone()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn remove_subtree(&mut self, id: &str) {
        if let Some(element) = self.elements.remove(id) {
            self.listeners.retain(|_, l| l.element_id != id);
            for child in element.children {
                self.remove_subtree(&child);
            }
        }
    }
}

impl Document for MemoryDocument {
    fn set_inner_html(&self, id: &str, html: &str) -> AppResult<()> {
        let mut inner = self.inner.borrow_mut();
        let old_children = match inner.elements.get_mut(id) {
            Some(element) => std::mem::take(&mut element.children),
            None => return Err(AppError::missing_element(id)),
        };
        for child in old_children {
            inner.remove_subtree(&child);
        }

        let mut children = Vec::new();
        for tag in parse_tags(html) {
            let Some(child_id) = tag.attributes.get("id").cloned() else {
                continue;
            };
            if child_id == id {
                continue;
            }
            // Un id repetido fuera del subárbol se sustituye por el nuevo nodo
            inner.remove_subtree(&child_id);
            let classes = tag
                .attributes
                .get("class")
                .map(|c| c.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default();
            let value = tag.attributes.get("value").cloned().unwrap_or_default();
            inner.elements.insert(
                child_id.clone(),
                MemElement {
                    tag: tag.name,
                    attributes: tag.attributes,
                    classes,
                    value,
                    ..MemElement::default()
                },
            );
            match tag.parent.and_then(|parent| inner.elements.get_mut(&parent)) {
                Some(parent) => parent.children.push(child_id),
                None => children.push(child_id),
            }
        }

        if let Some(element) = inner.elements.get_mut(id) {
            element.children = children;
            element.inner_html = html.to_string();
        }
        Ok(())
    }

    fn exists(&self, id: &str) -> bool {
        self.inner.borrow().elements.contains_key(id)
    }

    fn set_style(&self, id: &str, property: &str, value: &str) -> AppResult<()> {
        let mut inner = self.inner.borrow_mut();
        let element = inner.elements.get_mut(id).ok_or_else(|| AppError::missing_element(id))?;
        element.style.insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn add_class(&self, id: &str, class: &str) -> AppResult<()> {
        let mut inner = self.inner.borrow_mut();
        let element = inner.elements.get_mut(id).ok_or_else(|| AppError::missing_element(id))?;
        if !element.classes.iter().any(|c| c == class) {
            element.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, id: &str, class: &str) -> AppResult<()> {
        let mut inner = self.inner.borrow_mut();
        let element = inner.elements.get_mut(id).ok_or_else(|| AppError::missing_element(id))?;
        element.classes.retain(|c| c != class);
        Ok(())
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.inner.borrow().elements.get(id)?.attributes.get(name).cloned()
    }

    fn value(&self, id: &str) -> Option<String> {
        self.inner.borrow().elements.get(id).map(|e| e.value.clone())
    }

    fn selected_file(&self, id: &str) -> Option<SelectedFile> {
        self.inner.borrow().elements.get(id)?.file.clone()
    }

    fn clear_file_input(&self, id: &str) {
        if let Some(element) = self.inner.borrow_mut().elements.get_mut(id) {
            element.file = None;
            element.value.clear();
        }
    }

    fn element_width(&self, id: &str) -> Option<f64> {
        let inner = self.inner.borrow();
        if !inner.elements.contains_key(id) {
            return None;
        }
        Some(inner.widths.get(id).copied().unwrap_or(DEFAULT_WIDTH))
    }

    fn listen(&self, id: &str, event: EventKind, handler: Handler) -> Option<ListenerId> {
        let mut inner = self.inner.borrow_mut();
        if !inner.elements.contains_key(id) {
            return None;
        }
        inner.next_listener += 1;
        let listener_id = ListenerId(inner.next_listener);
        inner.listeners.insert(
            listener_id,
            Listener {
                element_id: id.to_string(),
                event,
                handler,
            },
        );
        Some(listener_id)
    }

    fn unlisten(&self, listener: ListenerId) {
        // Soltar el handler fuera del préstamo: puede ser el último Rc de un viewmodel
        let removed = self.inner.borrow_mut().listeners.remove(&listener);
        drop(removed);
    }

    fn show_modal(&self, id: &str, body_html: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.modal_support || !inner.elements.contains_key(id) {
            return false;
        }
        inner.modals.push((id.to_string(), body_html.to_string()));
        true
    }

    fn alert(&self, message: &str) {
        self.inner.borrow_mut().alerts.push(message.to_string());
    }

    fn push_location(&self, path: &str) {
        self.inner.borrow_mut().history.push(path.to_string());
    }
}

struct ParsedTag {
    name: String,
    attributes: HashMap<String, String>,
    /// Ancestro más cercano con id dentro del mismo fragmento
    parent: Option<String>,
}

const VOID_TAGS: [&str; 8] = ["input", "img", "br", "hr", "meta", "link", "source", "path"];

/// Escaneo mínimo de etiquetas: atributos y anidamiento (solo ancestros con id)
fn parse_tags(html: &str) -> Vec<ParsedTag> {
    let bytes = html.as_bytes();
    let mut tags = Vec::new();
    let mut open: Vec<(String, Option<String>)> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        i += 1;
        if i < bytes.len() && bytes[i] == b'!' {
            while i < bytes.len() && bytes[i] != b'>' {
                i += 1;
            }
            continue;
        }
        if i < bytes.len() && bytes[i] == b'/' {
            let start = i + 1;
            while i < bytes.len() && bytes[i] != b'>' {
                i += 1;
            }
            let name = html[start..i].trim().to_ascii_lowercase();
            if let Some(pos) = open.iter().rposition(|(tag, _)| *tag == name) {
                open.truncate(pos);
            }
            continue;
        }

        let start = i;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
            i += 1;
        }
        if start == i {
            continue;
        }
        let name = html[start..i].to_ascii_lowercase();
        let mut attributes = HashMap::new();
        let mut self_closing = false;

        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= bytes.len() {
                break;
            }
            if bytes[i] == b'>' {
                i += 1;
                break;
            }
            if bytes[i] == b'/' {
                self_closing = true;
                i += 1;
                continue;
            }
            self_closing = false;

            let attr_start = i;
            while i < bytes.len()
                && !bytes[i].is_ascii_whitespace()
                && bytes[i] != b'='
                && bytes[i] != b'>'
                && bytes[i] != b'/'
            {
                i += 1;
            }
            let attr_name = html[attr_start..i].to_ascii_lowercase();
            if attr_name.is_empty() {
                i += 1;
                continue;
            }

            let mut value = String::new();
            if i < bytes.len() && bytes[i] == b'=' {
                i += 1;
                if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                    let quote = bytes[i];
                    i += 1;
                    let value_start = i;
                    while i < bytes.len() && bytes[i] != quote {
                        i += 1;
                    }
                    value = html[value_start..i].to_string();
                    i += 1;
                } else {
                    let value_start = i;
                    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                        i += 1;
                    }
                    value = html[value_start..i].to_string();
                }
            }
            attributes.insert(attr_name, value);
        }

        let parent = open.iter().rev().find_map(|(_, id)| id.clone());
        let own_id = attributes.get("id").cloned();
        if !self_closing && !VOID_TAGS.contains(&name.as_str()) {
            open.push((name.clone(), own_id));
        }
        tags.push(ParsedTag { name, attributes, parent });
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn parses_ids_classes_and_attributes() {
        let doc = MemoryDocument::new();
        doc.set_inner_html(
            "root",
            r#"<div class='icon-eye x' id="icon-eye-d" data-bill-url="https://a.tld/b.png?x=1&y=2"></div>
               <input id=amount type="number" value="12" />"#,
        )
        .unwrap();

        assert!(doc.has_class("icon-eye-d", "icon-eye"));
        assert_eq!(doc.attribute("icon-eye-d", "data-bill-url").as_deref(), Some("https://a.tld/b.png?x=1&y=2"));
        assert_eq!(doc.value("amount").as_deref(), Some("12"));
        assert_eq!(doc.tag("amount").as_deref(), Some("input"));
    }

    #[test]
    fn replacing_content_destroys_nested_elements_and_listeners() {
        let doc = MemoryDocument::new();
        doc.set_inner_html("root", r#"<div id="container"></div>"#).unwrap();
        doc.set_inner_html("container", r#"<div id="card"></div>"#).unwrap();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        doc.listen("card", EventKind::Click, Rc::new(move || flag.set(true))).unwrap();

        doc.set_inner_html("root", "<p>vacío</p>").unwrap();

        assert!(!doc.exists("container"));
        assert!(!doc.exists("card"));
        assert_eq!(doc.total_listeners(), 0);
        assert_eq!(doc.click("card"), 0);
        assert!(!fired.get());
    }

    #[test]
    fn nested_pane_replacement_drops_previous_content() {
        let doc = MemoryDocument::new();
        doc.set_inner_html(
            "root",
            r#"<div id="pane"><div id="placeholder"><svg><path d="M0"/></svg></div></div><input id="after">"#,
        )
        .unwrap();

        doc.set_inner_html("pane", r#"<form id="detail"><textarea id="note"></textarea></form>"#).unwrap();

        assert!(!doc.exists("placeholder"));
        assert!(doc.exists("note"));
        assert!(doc.exists("after"));

        doc.set_inner_html("root", "").unwrap();
        assert!(!doc.exists("note"));
    }

    #[test]
    fn listen_on_missing_element_fails() {
        let doc = MemoryDocument::new();
        assert!(doc.listen("ghost", EventKind::Click, Rc::new(|| {})).is_none());
        assert!(doc.set_inner_html("ghost", "").is_err());
    }

    #[test]
    fn modal_support_can_be_disabled() {
        let doc = MemoryDocument::new().without_modal_support();
        doc.set_inner_html("root", r#"<div id="modaleFile"></div>"#).unwrap();
        assert!(!doc.show_modal("modaleFile", "<img/>"));
        assert!(doc.modals().is_empty());
    }
}
