//! Render element descriptors to HTML strings.
//!
//! Listeners can't be serialized, so they are dropped from the output. With [`Renderer::pre_render`] enabled, the
//! names of the events an element listens to are written into a `data-listeners` attribute so a client can attach
//! them again.

mod renderer;

use lattice_core::ElementDescriptor;

pub use crate::renderer::Renderer;

/// A convenience function to render a single element to a string
///
/// For more control over the output, create a new [`Renderer`].
pub fn render_element(element: &ElementDescriptor) -> String {
    Renderer::new().render_element(element)
}

/// A convenience function to pre-render an element, keeping the names of its listeners.
pub fn pre_render(element: &ElementDescriptor) -> String {
    let mut renderer = Renderer::new();
    renderer.pre_render = true;
    renderer.render_element(element)
}
