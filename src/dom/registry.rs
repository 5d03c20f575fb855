// ============================================================================
// HANDLER REGISTRY - Un único listener por clave
// ============================================================================
// Re-renderizar una lista invalida los listeners anteriores; enlazar de nuevo
// sin quitar el anterior acumula handlers y un click dispara la acción varias
// veces. `rebind` siempre quita el registro previo antes de instalar el nuevo.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::dom::{Document, EventKind, Handler, ListenerId};

pub struct HandlerRegistry {
    document: Rc<dyn Document>,
    bindings: RefCell<HashMap<String, ListenerId>>,
}

impl HandlerRegistry {
    pub fn new(document: Rc<dyn Document>) -> Self {
        Self {
            document,
            bindings: RefCell::new(HashMap::new()),
        }
    }

    /// Quita el registro de `element_id` y enlaza `handler` si el elemento existe.
    /// Devuelve si quedó enlazado.
    pub fn rebind(&self, element_id: &str, event: EventKind, handler: Handler) -> bool {
        self.unbind(element_id);
        match self.document.listen(element_id, event, handler) {
            Some(listener) => {
                self.bindings.borrow_mut().insert(element_id.to_string(), listener);
                true
            }
            None => false,
        }
    }

    pub fn unbind(&self, element_id: &str) {
        let previous = self.bindings.borrow_mut().remove(element_id);
        if let Some(listener) = previous {
            self.document.unlisten(listener);
        }
    }

    /// Libera todos los listeners (al desmontar la vista)
    pub fn clear(&self) {
        let drained: Vec<ListenerId> = self.bindings.borrow_mut().drain().map(|(_, l)| l).collect();
        for listener in drained {
            self.document.unlisten(listener);
        }
    }

    pub fn is_bound(&self, element_id: &str) -> bool {
        self.bindings.borrow().contains_key(element_id)
    }

    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use std::cell::Cell;

    fn document_with(html: &str) -> Rc<MemoryDocument> {
        let doc = Rc::new(MemoryDocument::new());
        doc.set_inner_html("root", html).unwrap();
        doc
    }

    #[test]
    fn rebind_replaces_previous_listener() {
        let doc = document_with(r#"<div id="open-bill1"></div>"#);
        let registry = HandlerRegistry::new(doc.clone());
        let hits = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let hits = hits.clone();
            registry.rebind("open-bill1", EventKind::Click, Rc::new(move || hits.set(hits.get() + 1)));
        }

        assert_eq!(doc.listener_count("open-bill1", EventKind::Click), 1);
        doc.click("open-bill1");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn missing_element_drops_stale_registration() {
        let doc = document_with(r#"<div id="btn-accept-bill"></div>"#);
        let registry = HandlerRegistry::new(doc.clone());
        assert!(registry.rebind("btn-accept-bill", EventKind::Click, Rc::new(|| {})));

        doc.set_inner_html("root", "<div></div>").unwrap();
        assert!(!registry.rebind("btn-accept-bill", EventKind::Click, Rc::new(|| {})));
        assert!(!registry.is_bound("btn-accept-bill"));
    }

    #[test]
    fn clear_releases_everything() {
        let doc = document_with(r#"<a id="a"></a><b id="b"></b>"#);
        let registry = HandlerRegistry::new(doc.clone());
        registry.rebind("a", EventKind::Click, Rc::new(|| {}));
        registry.rebind("b", EventKind::Click, Rc::new(|| {}));
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(doc.total_listeners(), 0);
    }
}
