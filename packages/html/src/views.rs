//! Declarative views that renderers know how to turn into elements.

use std::{any::Any, rc::Rc};

use lattice_core::{Binding, Callback, State};

/// A run of plain text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

/// The label of a control.
///
/// Renderers that can only show a label as an attribute (like a placeholder) check for [`Label::Text`] with
/// [`Label::as_text`] and refuse anything else.
#[derive(Clone)]
pub enum Label {
    /// A plain text label
    Text(Text),

    /// Any other view. Its contents are opaque to the renderers in this workspace.
    View(Rc<dyn Any>),
}

impl Label {
    /// The text content of this label, if it is plain text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Label::Text(text) => Some(text.content()),
            Label::View(_) => None,
        }
    }

    /// Wrap an arbitrary view as a label.
    pub fn view(view: impl Any) -> Self {
        Label::View(Rc::new(view))
    }
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Text(text) => f.debug_tuple("Text").field(&text.content()).finish(),
            Label::View(_) => f.debug_tuple("View").finish_non_exhaustive(),
        }
    }
}

impl From<Text> for Label {
    fn from(text: Text) -> Self {
        Label::Text(text)
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.into())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Text(text.into())
    }
}

/// A text field whose contents are obscured, bound two ways to a string.
///
/// # Example
/// ```rust
/// # use lattice_core::{Binding, StateOwner};
/// # use lattice_html::SecureField;
/// let owner = StateOwner::new();
/// let password = owner.insert(String::new());
///
/// let field = SecureField::new("Password", password).on_commit(|| println!("submitted"));
/// assert_eq!(field.label().as_text(), Some("Password"));
/// ```
#[derive(Clone, Debug)]
pub struct SecureField<B = State<String>> {
    label: Label,
    text: B,
    on_commit: Callback,
}

impl<B: Binding<String>> SecureField<B> {
    /// Create a field with the given label, bound to `text`. Committing does nothing until
    /// [`SecureField::on_commit`] is set.
    pub fn new(label: impl Into<Label>, text: B) -> Self {
        Self {
            label: label.into(),
            text,
            on_commit: Callback::noop(),
        }
    }

    /// Set the action that runs when the user commits the field, usually by pressing Enter.
    pub fn on_commit(mut self, on_commit: impl Into<Callback>) -> Self {
        self.on_commit = on_commit.into();
        self
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The binding the field reads from and writes to.
    pub fn text(&self) -> &B {
        &self.text
    }

    pub fn commit_action(&self) -> &Callback {
        &self.on_commit
    }
}
