use lattice_core::{ElementDescriptor, RenderError};
use lattice_html::SecureField;

use crate::WebConfig;

/// A view the web renderer can turn into a single element.
pub trait WebView {
    /// The name used for the view in errors and logs.
    const NAME: &'static str;

    /// Render the view into an element descriptor.
    ///
    /// Views that only support some of their configurations (like a secure field with a non-text label) return an
    /// error for the others instead of falling back to a different element.
    fn render_web(&self, cfg: &WebConfig) -> Result<ElementDescriptor, RenderError>;
}

/// Every view the web renderer knows how to draw.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum AnyView {
    SecureField(SecureField),
}

impl From<SecureField> for AnyView {
    fn from(view: SecureField) -> Self {
        AnyView::SecureField(view)
    }
}

/// Picks the renderer for each view variant and renders it with a shared configuration.
#[derive(Clone, Debug, Default)]
pub struct WebRenderer {
    cfg: WebConfig,
}

impl WebRenderer {
    pub fn new(cfg: WebConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &WebConfig {
        &self.cfg
    }

    pub fn render(&self, view: &AnyView) -> Result<ElementDescriptor, RenderError> {
        let result = match view {
            AnyView::SecureField(field) => field.render_web(&self.cfg),
        };

        if let Err(err) = &result {
            tracing::debug!("failed to render view: {err}");
        }

        result
    }
}
