use crate::core::{should_reveal, text_depth, ACTIVE_CLASS, CSS_VAR_BLUR, CSS_VAR_OPACITY};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page sections taking part in reveal and depth-text effects.
///
/// Queried once at startup; the set is static for the page's lifetime.
pub struct SceneList {
    elements: Vec<web::HtmlElement>,
}

impl SceneList {
    pub fn query(document: &web::Document, selector: &str) -> Self {
        let mut elements = Vec::new();
        match document.query_selector_all(selector) {
            Ok(list) => {
                for i in 0..list.length() {
                    if let Some(el) = list
                        .item(i)
                        .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
                    {
                        elements.push(el);
                    }
                }
            }
            Err(e) => log::error!("[scenes] bad selector {}: {:?}", selector, e),
        }
        Self { elements }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Mark every section whose top has risen above the reveal line as active.
    /// Never deactivates.
    pub fn reveal(&self, viewport_h: f64) {
        for (i, el) in self.elements.iter().enumerate() {
            let top = el.get_bounding_client_rect().top();
            if should_reveal(top, viewport_h) && !is_active(el) {
                _ = el.class_list().add_1(ACTIVE_CLASS);
                log::debug!("[scenes] revealed section {}", i);
            }
        }
    }

    /// Write `--depth-opacity` / `--depth-blur` for every section.
    pub fn update_text_depth(&self, viewport_h: f64) {
        for el in &self.elements {
            let rect = el.get_bounding_client_rect();
            let d = text_depth(rect.top(), rect.height(), viewport_h);
            let style = el.style();
            _ = style.set_property(CSS_VAR_OPACITY, &d.css_opacity());
            _ = style.set_property(CSS_VAR_BLUR, &d.css_blur());
        }
    }
}

#[inline]
fn is_active(el: &web::Element) -> bool {
    el.class_list().contains(ACTIVE_CLASS)
}
