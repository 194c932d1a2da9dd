use std::{any::Any, fmt::Debug};

use lattice_core::Event;

pub type KeyboardEvent = Event<KeyboardData>;

/// The payload of `keydown`, `keypress` and `keyup` events.
pub struct KeyboardData {
    inner: Box<dyn HasKeyboardData>,
}

impl<E: HasKeyboardData> From<E> for KeyboardData {
    fn from(e: E) -> Self {
        Self { inner: Box::new(e) }
    }
}

impl PartialEq for KeyboardData {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
            && self.alt_key() == other.alt_key()
            && self.ctrl_key() == other.ctrl_key()
            && self.meta_key() == other.meta_key()
            && self.shift_key() == other.shift_key()
            && self.is_auto_repeating() == other.is_auto_repeating()
    }
}

impl Debug for KeyboardData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardData")
            .field("key", &self.key())
            .field("alt_key", &self.alt_key())
            .field("ctrl_key", &self.ctrl_key())
            .field("meta_key", &self.meta_key())
            .field("shift_key", &self.shift_key())
            .field("is_auto_repeating", &self.is_auto_repeating())
            .finish()
    }
}

impl KeyboardData {
    pub fn new(inner: impl HasKeyboardData + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    /// The value of the key pressed by the user, taking into consideration the state of modifier keys such as Shift
    /// as well as the keyboard locale and layout. For example `"Enter"`, `"a"` or `"A"`.
    pub fn key(&self) -> String {
        self.inner.key()
    }

    pub fn alt_key(&self) -> bool {
        self.inner.alt_key()
    }

    pub fn ctrl_key(&self) -> bool {
        self.inner.ctrl_key()
    }

    pub fn meta_key(&self) -> bool {
        self.inner.meta_key()
    }

    pub fn shift_key(&self) -> bool {
        self.inner.shift_key()
    }

    /// `true` if the key is being held down such that it is automatically repeating.
    pub fn is_auto_repeating(&self) -> bool {
        self.inner.is_auto_repeating()
    }

    /// Downcast this KeyboardData to a concrete type.
    pub fn downcast<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }
}

pub trait HasKeyboardData: Any {
    /// Get the key identifier of the event.
    fn key(&self) -> String;

    fn alt_key(&self) -> bool {
        false
    }

    fn ctrl_key(&self) -> bool {
        false
    }

    fn meta_key(&self) -> bool {
        false
    }

    fn shift_key(&self) -> bool {
        false
    }

    fn is_auto_repeating(&self) -> bool {
        false
    }

    /// return self as Any
    fn as_any(&self) -> &dyn Any;
}

/// A keyboard payload held as plain data, used for simulated events and serialized transports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SerializedKeyboardData {
    key: String,
    #[cfg_attr(feature = "serialize", serde(default))]
    alt_key: bool,
    #[cfg_attr(feature = "serialize", serde(default))]
    ctrl_key: bool,
    #[cfg_attr(feature = "serialize", serde(default))]
    meta_key: bool,
    #[cfg_attr(feature = "serialize", serde(default))]
    shift_key: bool,
    #[cfg_attr(feature = "serialize", serde(default))]
    repeat: bool,
}

impl SerializedKeyboardData {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_shift(mut self, shift_key: bool) -> Self {
        self.shift_key = shift_key;
        self
    }

    pub fn with_ctrl(mut self, ctrl_key: bool) -> Self {
        self.ctrl_key = ctrl_key;
        self
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }
}

impl HasKeyboardData for SerializedKeyboardData {
    fn key(&self) -> String {
        self.key.clone()
    }

    fn alt_key(&self) -> bool {
        self.alt_key
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl_key
    }

    fn meta_key(&self) -> bool {
        self.meta_key
    }

    fn shift_key(&self) -> bool {
        self.shift_key
    }

    fn is_auto_repeating(&self) -> bool {
        self.repeat
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for KeyboardData {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SerializedKeyboardData {
            key: self.key(),
            alt_key: self.alt_key(),
            ctrl_key: self.ctrl_key(),
            meta_key: self.meta_key(),
            shift_key: self.shift_key(),
            repeat: self.is_auto_repeating(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for KeyboardData {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = SerializedKeyboardData::deserialize(deserializer)?;
        Ok(Self {
            inner: Box::new(data),
        })
    }
}

impl_event! {
    KeyboardData;

    /// The `keydown` event fires when a key is pressed.
    onkeydown

    /// The `keypress` event fires when a key that produces a character value is pressed down.
    onkeypress

    /// The `keyup` event fires when a key is released.
    onkeyup
}
