use lattice_core::{Binding, Callback, ElementDescriptor, RenderError};
use lattice_html::{oninput, onkeypress, SecureField};

use crate::{WebConfig, WebView};

/// Render a password input for a string binding.
///
/// The element reads the binding once, now. Its `keypress` listener runs `on_commit` when the configured commit key
/// (Enter by default) is pressed, and its `input` listener writes the target's value back into the binding. Input
/// events without a target value leave the binding untouched.
pub fn render_secure_field<B>(
    text: B,
    label: &str,
    on_commit: Callback,
    cfg: &WebConfig,
) -> Result<ElementDescriptor, RenderError>
where
    B: Binding<String> + 'static,
{
    let value = text.try_get()?;
    tracing::trace!(placeholder = label, "rendering secure field");

    let mut element = ElementDescriptor::new("input")
        .attribute("type", "password")
        .attribute("value", value)
        .attribute("placeholder", label);

    if let Some(hint) = &cfg.autocomplete {
        element = element.attribute("autocomplete", hint.as_str());
    }

    let commit_key = cfg.commit_key.clone();
    let element = element
        .listener(onkeypress(move |event| {
            if event.key() == commit_key {
                on_commit.call();
            }
        }))
        .listener(oninput(move |event| match event.value() {
            Some(new_value) => {
                if let Err(err) = text.try_set(new_value) {
                    tracing::warn!("secure field could not update its binding: {err}");
                }
            }
            None => tracing::trace!("input event target has no value, leaving the binding unchanged"),
        }));

    Ok(element)
}

impl<B> WebView for SecureField<B>
where
    B: Binding<String> + Clone + 'static,
{
    const NAME: &'static str = "SecureField";

    fn render_web(&self, cfg: &WebConfig) -> Result<ElementDescriptor, RenderError> {
        let Some(label) = self.label().as_text() else {
            return Err(RenderError::UnsupportedLabel { view: Self::NAME });
        };

        render_secure_field(self.text().clone(), label, self.commit_action().clone(), cfg)
    }
}
