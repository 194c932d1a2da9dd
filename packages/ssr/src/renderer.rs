use lattice_core::{Attribute, AttributeValue, ElementDescriptor};
use std::fmt::Write;

/// A renderer that writes element descriptors as HTML
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    /// Write the names of each element's listeners into a `data-listeners` attribute so the page can be hydrated
    /// later on
    pub pre_render: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_element(&self, element: &ElementDescriptor) -> String {
        let mut buf = String::new();
        self.render_to(&mut buf, element).unwrap();
        buf
    }

    pub fn render_to(&self, buf: &mut impl Write, element: &ElementDescriptor) -> std::fmt::Result {
        let tag = element.tag;
        write!(buf, "<{tag}")?;

        for attr in &element.attributes {
            if BOOL_ATTRS.contains(&attr.name) {
                if attr.value.is_truthy() {
                    write!(buf, " {}", attr.name)?;
                }
            } else {
                write_attribute(buf, attr)?;
            }
        }

        if self.pre_render && !element.listeners.is_empty() {
            let mut names: Vec<&str> = Vec::with_capacity(element.listeners.len());
            for listener in &element.listeners {
                if !names.contains(&listener.name) {
                    names.push(listener.name);
                }
            }
            write!(buf, " data-listeners=\"{}\"", names.join(" "))?;
        }

        if VOID_ELEMENTS.contains(&tag) {
            write!(buf, "/>")
        } else {
            write!(buf, "></{tag}>")
        }
    }
}

pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(crate) const BOOL_ATTRS: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
];

pub(crate) fn write_attribute(buf: &mut impl Write, attr: &Attribute) -> std::fmt::Result {
    let name = attr.name;
    match &attr.value {
        AttributeValue::Text(value) => write!(
            buf,
            " {name}=\"{}\"",
            askama_escape::escape(value, askama_escape::Html)
        ),
        AttributeValue::Bool(true) => write!(buf, " {name}"),
        AttributeValue::Int(value) => write!(buf, " {name}=\"{value}\""),
        AttributeValue::Float(value) => write!(buf, " {name}=\"{value}\""),
        AttributeValue::Bool(false) | AttributeValue::None => {
            tracing::trace!("skipping empty attribute {name}");
            Ok(())
        }
    }
}
