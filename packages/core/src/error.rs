use generational_box::{BorrowError, BorrowMutError};

/// An error returned when a [`crate::Binding`] cannot be read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// The state container that owned the value has been dropped.
    #[error("the bound value was accessed after its owner was dropped")]
    Dropped,

    /// The value is currently borrowed and cannot be written.
    #[error("the bound value is already borrowed")]
    AlreadyBorrowed,

    /// The value is currently being written and cannot be borrowed again.
    #[error("the bound value is already borrowed mutably")]
    AlreadyBorrowedMut,
}

impl From<BorrowError> for BindingError {
    fn from(err: BorrowError) -> Self {
        match err {
            BorrowError::Dropped(_) => Self::Dropped,
            _ => Self::AlreadyBorrowedMut,
        }
    }
}

impl From<BorrowMutError> for BindingError {
    fn from(err: BorrowMutError) -> Self {
        match err {
            BorrowMutError::Dropped(_) => Self::Dropped,
            BorrowMutError::AlreadyBorrowed(_) => Self::AlreadyBorrowed,
            _ => Self::AlreadyBorrowedMut,
        }
    }
}

/// An error returned by a renderer that could not produce an element for a view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The renderer only supports this view with a plain text label.
    #[error("{view} can only be rendered with a plain text label")]
    UnsupportedLabel { view: &'static str },

    /// The binding the view reads from is no longer usable.
    #[error("failed to read the view's binding: {0}")]
    Binding(#[from] BindingError),
}
