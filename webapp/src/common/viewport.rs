use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use portfolio::scroll::{Viewport, navigate, scroll_to_top};

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| BrowserViewport { window })
    }
}

impl Viewport for BrowserViewport {
    fn offset_top(&self, anchor_id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(anchor_id)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;

        Some(f64::from(element.offset_top()))
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);

        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_anchor(anchor_id: &str, header_offset: f64) {
    if let Some(mut viewport) = BrowserViewport::new() {
        navigate(&mut viewport, anchor_id, header_offset);
    }
}

pub fn back_to_top() {
    if let Some(mut viewport) = BrowserViewport::new() {
        scroll_to_top(&mut viewport);
    }
}
