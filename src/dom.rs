//! Guarded DOM access shared by every widget.
//!
//! Nothing in here panics when an element or browser API is missing; lookups
//! return `Option` or an empty list so one absent node never stops the rest
//! of the page from initialising.

use std::collections::HashMap;
use std::hash::Hash;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document() {
        Some(document) => match document.query_selector_all(selector) {
            Ok(list) => collect_nodes(&list),
            Err(_) => Vec::new(),
        },
        None => Vec::new(),
    }
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| collect_nodes(&list))
        .unwrap_or_default()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn collect_nodes(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(element: &Element) -> Option<HtmlElement> {
    element.clone().dyn_into::<HtmlElement>().ok()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = as_html(element) {
        let _ = html.style().set_property(property, value);
    }
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn mark_root(class: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        add_class(&root, class);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0)
}

pub fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// A live event listener. Dropping it removes the listener.
pub struct EventSubscription {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    /// Subscribes on the window, if there is one.
    pub fn on_window<F>(kind: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        Self::new(&window, kind, handler)
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Element handles grouped by a typed key, resolved once at setup.
pub struct ElementRegistry<K> {
    groups: HashMap<K, Vec<Element>>,
}

impl<K: Copy + Eq + Hash + std::fmt::Debug> ElementRegistry<K> {
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    pub fn collect(&mut self, key: K, selector: &str) {
        let elements = query_all(selector);
        if elements.is_empty() {
            debug!("registry: no elements for {:?} ({})", key, selector);
        }
        self.groups.insert(key, elements);
    }

    pub fn get(&self, key: K) -> &[Element] {
        self.groups.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}
