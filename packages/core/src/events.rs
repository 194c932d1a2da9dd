//! Synthetic events handed to listeners.
//!
//! Renderers are responsible for converting their native events into the payload types listeners expect. Listeners
//! are registered with a concrete payload type and receive events as `Event<dyn Any>`, then downcast.

use std::{any::Any, cell::Cell, ops::Deref, rc::Rc};

/// A synthetic event wrapping the payload delivered by the host event system.
pub struct Event<T: 'static + ?Sized> {
    /// The data associated with this event
    pub data: Rc<T>,
    pub(crate) propagates: Rc<Cell<bool>>,
}

impl<T: ?Sized + 'static> Event<T> {
    /// Create a new event from the inner data
    pub fn new(data: Rc<T>, propagates: bool) -> Self {
        Self {
            data,
            propagates: Rc::new(Cell::new(propagates)),
        }
    }

    /// Prevent this event from continuing to bubble up the tree to parent elements.
    pub fn stop_propagation(&self) {
        self.propagates.set(false);
    }

    /// Check if the event is still allowed to bubble.
    pub fn propagates(&self) -> bool {
        self.propagates.get()
    }

    /// Get a reference to the inner data from this event
    pub fn data(&self) -> Rc<T> {
        self.data.clone()
    }
}

impl Event<dyn Any> {
    /// Wrap any payload into an untyped event.
    pub fn from_payload<T: 'static>(payload: T) -> Self {
        Event::new(Rc::new(payload) as Rc<dyn Any>, true)
    }

    /// Try to view this event as an event carrying `T`.
    pub fn downcast<T: 'static>(&self) -> Option<Event<T>> {
        let data = self.data.clone().downcast::<T>().ok()?;
        Some(Event {
            data,
            propagates: self.propagates.clone(),
        })
    }
}

impl<T: ?Sized> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self {
            propagates: self.propagates.clone(),
            data: self.data.clone(),
        }
    }
}

impl<T: ?Sized> Deref for Event<T> {
    type Target = Rc<T>;
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T: std::fmt::Debug + ?Sized> std::fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("data", &self.data)
            .field("propagates", &self.propagates.get())
            .finish()
    }
}
