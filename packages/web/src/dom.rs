//! Mount element descriptors onto a real DOM with `web-sys`.
//!
//! Native events are converted into the payloads `lattice-html` listeners expect: keyboard events become
//! [`KeyboardData`] and every other event becomes [`FormData`] read from the event target.

use std::{any::Any, rc::Rc};

use lattice_core::{AttributeValue, ElementDescriptor, Event};
use lattice_html::{FormData, HasFormData, HasKeyboardData, KeyboardData};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlInputElement, HtmlTextAreaElement};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window is available")]
    NoWindow,

    #[error("the window has no document")]
    NoDocument,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{value:?}"))
    }
}

/// Get the document of the global window.
pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// An element created from a descriptor. Dropping it removes the listeners it attached.
pub struct MountedElement {
    element: Element,
    closures: Vec<(&'static str, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl MountedElement {
    /// The DOM element. It is not attached to the document until the caller inserts it.
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Drop for MountedElement {
    fn drop(&mut self) {
        for (name, closure) in &self.closures {
            if let Err(err) = self
                .element
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                tracing::warn!("failed to remove {name} listener: {err:?}");
            }
        }
    }
}

/// Create a DOM element for the descriptor, set its attributes and attach its listeners.
pub fn mount(descriptor: &ElementDescriptor, document: &Document) -> Result<MountedElement, DomError> {
    let element = document.create_element(descriptor.tag)?;

    for attr in &descriptor.attributes {
        match &attr.value {
            AttributeValue::None | AttributeValue::Bool(false) => {}
            AttributeValue::Bool(true) => element.set_attribute(attr.name, "")?,
            value => element.set_attribute(attr.name, &value.to_string())?,
        }
    }

    // the value attribute only sets the default value of a text control
    if let (Some(input), Some(value)) = (
        element.dyn_ref::<HtmlInputElement>(),
        descriptor.get_attribute("value").and_then(AttributeValue::as_text),
    ) {
        input.set_value(value);
    }

    let mut closures = Vec::with_capacity(descriptor.listeners.len());
    for listener in &descriptor.listeners {
        let listener = listener.clone();
        let name = listener.name;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            listener.call(virtual_event_from_websys_event(event));
        });
        element.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closures.push((name, closure));
    }

    tracing::trace!("mounted <{}> with {} listeners", descriptor.tag, closures.len());

    Ok(MountedElement { element, closures })
}

fn virtual_event_from_websys_event(event: web_sys::Event) -> Event<dyn Any> {
    let bubbles = event.bubbles();
    let data: Rc<dyn Any> = match event.dyn_into::<web_sys::KeyboardEvent>() {
        Ok(keyboard) => Rc::new(KeyboardData::new(WebKeyboardData { event: keyboard })),
        Err(event) => Rc::new(FormData::new(WebFormData {
            target: event.target(),
            event,
        })),
    };
    Event::new(data, bubbles)
}

struct WebKeyboardData {
    event: web_sys::KeyboardEvent,
}

impl HasKeyboardData for WebKeyboardData {
    fn key(&self) -> String {
        self.event.key()
    }

    fn alt_key(&self) -> bool {
        self.event.alt_key()
    }

    fn ctrl_key(&self) -> bool {
        self.event.ctrl_key()
    }

    fn meta_key(&self) -> bool {
        self.event.meta_key()
    }

    fn shift_key(&self) -> bool {
        self.event.shift_key()
    }

    fn is_auto_repeating(&self) -> bool {
        self.event.repeat()
    }

    fn as_any(&self) -> &dyn Any {
        &self.event
    }
}

struct WebFormData {
    target: Option<EventTarget>,
    event: web_sys::Event,
}

impl HasFormData for WebFormData {
    fn value(&self) -> Option<String> {
        let target = self.target.as_ref()?;
        target
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| {
                target
                    .dyn_ref::<HtmlTextAreaElement>()
                    .map(|input| input.value())
            })
    }

    fn as_any(&self) -> &dyn Any {
        &self.event
    }
}
