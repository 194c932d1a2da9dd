use generational_box::{AnyStorage, GenerationalBox, Owner, UnsyncStorage};

use crate::BindingError;

/// A two-way handle into state that is owned somewhere else.
///
/// Renderers read the current value when they build an element and write new values from inside event handlers. The
/// handle never manages the lifetime of the value it points to.
///
/// # Example
/// ```rust
/// # use lattice_core::{Binding, StateOwner};
/// let owner = StateOwner::new();
/// let text = owner.insert(String::from("hello"));
///
/// text.set("world".to_string());
/// assert_eq!(text.get(), "world");
/// ```
pub trait Binding<T> {
    /// Try to read the current value.
    fn try_get(&self) -> Result<T, BindingError>;

    /// Try to replace the current value.
    fn try_set(&self, value: T) -> Result<(), BindingError>;

    /// Read the current value. If the owner of the value has been dropped, this will panic.
    #[track_caller]
    fn get(&self) -> T {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Replace the current value. If the owner of the value has been dropped, this will panic.
    #[track_caller]
    fn set(&self, value: T) {
        if let Err(err) = self.try_set(value) {
            panic!("{err}");
        }
    }
}

impl<T, B: Binding<T> + ?Sized> Binding<T> for &B {
    fn try_get(&self) -> Result<T, BindingError> {
        (**self).try_get()
    }

    fn try_set(&self, value: T) -> Result<(), BindingError> {
        (**self).try_set(value)
    }
}

/// Owns every [`State`] created through it. Dropping the owner drops the values, and any handle that outlives it will
/// return [`BindingError::Dropped`].
#[derive(Clone)]
pub struct StateOwner {
    owner: Owner<UnsyncStorage>,
}

impl Default for StateOwner {
    fn default() -> Self {
        Self::new()
    }
}

impl StateOwner {
    pub fn new() -> Self {
        Self {
            owner: UnsyncStorage::owner(),
        }
    }

    /// Move a value into this owner and get a copyable handle to it.
    #[track_caller]
    pub fn insert<T: 'static>(&self, value: T) -> State<T> {
        State {
            inner: self.owner.insert(value),
        }
    }
}

impl std::fmt::Debug for StateOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateOwner").finish_non_exhaustive()
    }
}

/// A `Copy` handle to a value stored in a [`StateOwner`].
pub struct State<T: 'static> {
    inner: GenerationalBox<T, UnsyncStorage>,
}

impl<T: 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for State<T> {}

impl<T: 'static> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.ptr_eq(&other.inner)
    }
}

impl<T: 'static> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State").field("id", &self.inner.id()).finish()
    }
}

impl<T: 'static> State<T> {
    /// Run a closure with a reference to the value without cloning it.
    pub fn try_with<O>(&self, f: impl FnOnce(&T) -> O) -> Result<O, BindingError> {
        let value = self.inner.try_read()?;
        Ok(f(&*value))
    }

    /// Run a closure with a mutable reference to the value.
    pub fn try_with_mut<O>(&self, f: impl FnOnce(&mut T) -> O) -> Result<O, BindingError> {
        let mut value = self.inner.try_write()?;
        Ok(f(&mut *value))
    }
}

impl<T: Clone + 'static> Binding<T> for State<T> {
    fn try_get(&self) -> Result<T, BindingError> {
        self.try_with(T::clone)
    }

    fn try_set(&self, value: T) -> Result<(), BindingError> {
        self.try_with_mut(|slot| *slot = value)
    }
}
