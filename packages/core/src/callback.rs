use std::rc::Rc;

/// A cloneable action that takes no arguments, like the commit action of a text field.
#[derive(Clone)]
pub struct Callback {
    inner: Rc<dyn Fn()>,
}

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self { inner: Rc::new(f) }
    }

    /// A callback that does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn call(&self) {
        (self.inner)()
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::noop()
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
