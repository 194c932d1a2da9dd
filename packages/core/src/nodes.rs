//! Element descriptors
//!
//! A descriptor is the output of one render pass for one host element. It is cheap to rebuild, and the engine that
//! consumes it is free to diff it against the previous one. Listeners are compared by event name only: two descriptors
//! rendered from the same inputs are equal even though their closures are distinct allocations.

use std::{any::Any, fmt::Formatter, rc::Rc};

use crate::Event;

/// The description of a single host element: its tag, attributes and event listeners.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementDescriptor {
    /// The tag name of the element. For example, `input` or `div`
    pub tag: &'static str,

    /// The attributes of the element, in the order they were added
    pub attributes: Vec<Attribute>,

    /// The listeners attached to the element, in the order they were added
    pub listeners: Vec<Listener>,
}

impl ElementDescriptor {
    /// Create an element with no attributes and no listeners.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Add an attribute to the element.
    pub fn attribute(mut self, name: &'static str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Add a listener to the element.
    pub fn listener(mut self, listener: Listener) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Get the value of the first attribute with the given name.
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    /// Iterate over the listeners registered for an event name.
    pub fn listeners_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Listener> + 'a {
        self.listeners.iter().filter(move |l| l.name == name)
    }

    /// Run every listener registered for `name` with the event, returning how many listeners ran.
    ///
    /// Listeners run synchronously, in registration order. A listener that rejects the payload type or is already
    /// running is not counted.
    pub fn handle_event(&self, name: &str, event: Event<dyn Any>) -> usize {
        tracing::trace!("dispatching {name} to <{}>", self.tag);
        self.listeners_for(name)
            .filter(|listener| listener.call(event.clone()))
            .count()
    }

    /// Wrap a payload in an event and dispatch it. See [`ElementDescriptor::handle_event`].
    pub fn dispatch<T: 'static>(&self, name: &str, payload: T) -> usize {
        self.handle_event(name, Event::<dyn Any>::from_payload(payload))
    }
}

/// An attribute on an element.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// The name of the attribute.
    pub name: &'static str,

    /// The value of the attribute.
    pub value: AttributeValue,
}

impl Attribute {
    pub fn new(name: &'static str, value: impl Into<AttributeValue>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Possible values for an attribute
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(untagged))]
pub enum AttributeValue {
    /// Text attribute
    Text(String),

    /// A float
    Float(f64),

    /// Signed integer
    Int(i64),

    /// Boolean
    Bool(bool),

    /// A "none" value, resulting in the removal of an attribute from the dom
    None,
}

impl AttributeValue {
    /// Get the text of this value, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether a boolean attribute with this value is present. Empty text, `"0"`, `"false"`, zero and `None` are not.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::Text(t) => !t.is_empty() && t != "0" && !t.eq_ignore_ascii_case("false"),
            AttributeValue::Bool(t) => *t,
            AttributeValue::Int(t) => *t != 0,
            AttributeValue::Float(t) => *t != 0.0,
            AttributeValue::None => false,
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Text(a) => write!(f, "{a}"),
            AttributeValue::Float(a) => write!(f, "{a}"),
            AttributeValue::Int(a) => write!(f, "{a}"),
            AttributeValue::Bool(a) => write!(f, "{a}"),
            AttributeValue::None => Ok(()),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::None, Into::into)
    }
}

/// A listener for an event on an element.
#[derive(Clone)]
pub struct Listener {
    /// The name of the event, without the `on` prefix. For example, `input` or `keypress`
    pub name: &'static str,

    /// The callback that runs when the event fires
    pub callback: ListenerCallback,
}

impl Listener {
    /// Create a listener for events carrying a `T` payload.
    ///
    /// Events whose payload is not a `T` are dropped with a warning.
    pub fn new<T: 'static>(name: &'static str, mut handler: impl FnMut(Event<T>) + 'static) -> Self {
        Self {
            name,
            callback: ListenerCallback::new(move |event: Event<dyn Any>| match event.downcast::<T>() {
                Some(event) => {
                    handler(event);
                    true
                }
                None => {
                    tracing::warn!(
                        "{name} listener received a payload that is not a {}",
                        std::any::type_name::<T>()
                    );
                    false
                }
            }),
        }
    }

    /// Run the listener with an event. Returns `false` if the handler did not run.
    pub fn call(&self, event: Event<dyn Any>) -> bool {
        self.callback.call(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The type-erased callback behind a [`Listener`].
#[derive(Clone)]
pub struct ListenerCallback {
    callback: Rc<std::cell::RefCell<dyn FnMut(Event<dyn Any>) -> bool>>,
}

impl ListenerCallback {
    /// Wrap a callback that reports whether it handled the event.
    pub fn new(callback: impl FnMut(Event<dyn Any>) -> bool + 'static) -> Self {
        Self {
            callback: Rc::new(std::cell::RefCell::new(callback)),
        }
    }

    /// Call the callback with an event. A callback that is already running is not re-entered.
    pub fn call(&self, event: Event<dyn Any>) -> bool {
        match self.callback.try_borrow_mut() {
            Ok(mut callback) => (&mut *callback)(event),
            Err(_) => {
                tracing::warn!("skipping re-entrant call to a listener that is already running");
                false
            }
        }
    }
}
