//! Core types shared by every Lattice renderer.
//!
//! A renderer turns a declarative view into an [`ElementDescriptor`]: a tag, a list of attributes and a list of
//! listeners. The reconciliation engine that mounts and diffs those descriptors lives outside of this crate, and so does
//! the state container behind a [`Binding`]. This crate only defines the vocabulary they share.

mod binding;
mod callback;
mod error;
mod events;
mod nodes;

pub use binding::{Binding, State, StateOwner};
pub use callback::Callback;
pub use error::{BindingError, RenderError};
pub use events::Event;
pub use nodes::{Attribute, AttributeValue, ElementDescriptor, Listener, ListenerCallback};

pub mod prelude {
    pub use crate::{
        Attribute, AttributeValue, Binding, Callback, ElementDescriptor, Event, Listener,
        RenderError, State, StateOwner,
    };
}
