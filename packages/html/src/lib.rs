//! # Lattice namespace for HTML
//!
//! Synthetic event payloads for the HTML events Lattice renderers understand, listener constructors for them, and the
//! declarative views that renderers turn into elements.

mod events;
pub use events::*;

mod views;
pub use views::*;

pub mod prelude {
    pub use crate::events::*;
    pub use crate::views::*;
}
