//! Lattice web renderer
//!
//! ## Overview
//! ------------
//! This crate turns Lattice views into element descriptors for the browser DOM. A descriptor names the element's tag,
//! its attributes and its listeners; the engine that mounts and diffs descriptors is not part of this crate.
//!
//! With the `web-sys` feature, [`dom::mount`] attaches a descriptor to a real document, translating native keyboard
//! and input events into the payloads from `lattice-html`.
//!
//! ```rust
//! # use lattice_core::{AttributeValue, StateOwner};
//! # use lattice_html::SecureField;
//! # use lattice_web::{AnyView, WebConfig, WebRenderer};
//! let owner = StateOwner::new();
//! let password = owner.insert(String::from("hello"));
//!
//! let renderer = WebRenderer::new(WebConfig::default());
//! let element = renderer
//!     .render(&AnyView::from(SecureField::new("Password", password)))
//!     .unwrap();
//!
//! assert_eq!(element.tag, "input");
//! assert_eq!(element.get_attribute("value"), Some(&AttributeValue::from("hello")));
//! ```

mod cfg;
mod secure_field;
mod view;

#[cfg(feature = "web-sys")]
pub mod dom;

pub use cfg::WebConfig;
pub use secure_field::render_secure_field;
pub use view::{AnyView, WebRenderer, WebView};
