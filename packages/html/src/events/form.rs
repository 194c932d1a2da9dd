use std::{any::Any, fmt::Debug};

use lattice_core::Event;

pub type FormEvent = Event<FormData>;

/// The payload of `input` and `change` events.
pub struct FormData {
    inner: Box<dyn HasFormData>,
}

impl<E: HasFormData> From<E> for FormData {
    fn from(e: E) -> Self {
        Self { inner: Box::new(e) }
    }
}

impl PartialEq for FormData {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Debug for FormData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEvent")
            .field("value", &self.value())
            .finish()
    }
}

impl FormData {
    /// Create a new form event
    pub fn new(event: impl HasFormData + 'static) -> Self {
        Self {
            inner: Box::new(event),
        }
    }

    /// Get the current value of the event's target.
    ///
    /// This is `None` when the target has no readable string value, for example when the event was dispatched on an
    /// element that is not a text control.
    pub fn value(&self) -> Option<String> {
        self.inner.value()
    }

    /// Downcast this event to a concrete event type
    pub fn downcast<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }
}

/// An object that has all the data for a form event
pub trait HasFormData: Any {
    fn value(&self) -> Option<String> {
        None
    }

    /// return self as Any
    fn as_any(&self) -> &dyn Any;
}

/// A form payload held as plain data, used for simulated events and serialized transports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SerializedFormData {
    value: Option<String>,
}

impl SerializedFormData {
    /// A payload whose target holds `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// A payload whose target has no readable value.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl HasFormData for SerializedFormData {
    fn value(&self) -> Option<String> {
        self.value.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for FormData {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SerializedFormData { value: self.value() }.serialize(serializer)
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for FormData {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = SerializedFormData::deserialize(deserializer)?;
        Ok(Self {
            inner: Box::new(data),
        })
    }
}

impl_event! {
    FormData;

    /// The `input` event fires every time the value of a text control changes.
    oninput

    /// The `change` event fires when the user commits a change to a control's value.
    onchange
}
