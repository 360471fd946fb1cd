use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom::Dom;
use crate::error::{VisError, VisResult};

/// Browser DOM backend for `Visualization`.
pub struct WebDom {
    document: Document,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Binds to the document of the global `window`.
    pub fn from_window() -> VisResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| VisError::Backend("no global window document".to_owned()))?;
        Ok(Self::new(document))
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn create_element(&self, tag: &str) -> VisResult<Element> {
        self.document.create_element(tag).map_err(backend_error)
    }

    fn insert_before(
        &self,
        parent: &Element,
        child: &Element,
        reference: Option<&Element>,
    ) -> VisResult<()> {
        parent
            .insert_before(child, reference.map(|reference| &**reference))
            .map(drop)
            .map_err(backend_error)
    }

    fn remove_child(&self, parent: &Element, child: &Element) -> VisResult<()> {
        parent.remove_child(child).map(drop).map_err(backend_error)
    }

    fn add_class(&self, element: &Element, class: &str) -> VisResult<()> {
        element.class_list().add_1(class).map_err(backend_error)
    }

    fn remove_class(&self, element: &Element, class: &str) -> VisResult<()> {
        element.class_list().remove_1(class).map_err(backend_error)
    }

    fn has_class(&self, element: &Element, class: &str) -> VisResult<bool> {
        Ok(element.class_list().contains(class))
    }
}

fn backend_error(err: JsValue) -> VisError {
    VisError::Backend(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}
