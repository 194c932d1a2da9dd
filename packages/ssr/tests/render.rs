use lattice_core::ElementDescriptor;
use lattice_html::{oninput, onkeypress};
use lattice_ssr::{pre_render, render_element, Renderer};

#[test]
fn void_elements_self_close() {
    let element = ElementDescriptor::new("input")
        .attribute("type", "password")
        .attribute("value", "hello")
        .attribute("placeholder", "Password");

    assert_eq!(
        render_element(&element),
        r#"<input type="password" value="hello" placeholder="Password"/>"#
    );
}

#[test]
fn other_elements_close() {
    let element = ElementDescriptor::new("div").attribute("id", "root");
    assert_eq!(render_element(&element), r#"<div id="root"></div>"#);
}

#[test]
fn escapes_attribute_values() {
    let element = ElementDescriptor::new("input").attribute("value", "\"><div>");
    let html = render_element(&element);

    assert!(html.starts_with("<input value=\""));
    assert!(html.ends_with("\"/>"));
    assert!(!html.contains("<div>"));
    assert_eq!(html.matches('"').count(), 2);
}

#[test]
fn boolean_attributes() {
    let element = ElementDescriptor::new("input")
        .attribute("disabled", true)
        .attribute("readonly", false)
        .attribute("required", "false")
        .attribute("autofocus", "true")
        .attribute("data-flag", true)
        .attribute("title", None::<String>)
        .attribute("maxlength", 8i64);

    assert_eq!(
        render_element(&element),
        r#"<input disabled autofocus data-flag maxlength="8"/>"#
    );
}

#[test]
fn numeric_boolean_attributes() {
    let element = ElementDescriptor::new("input")
        .attribute("disabled", 1i64)
        .attribute("checked", 0i64)
        .attribute("hidden", 0.5);

    assert!(element.get_attribute("disabled").unwrap().is_truthy());
    assert_eq!(render_element(&element), "<input disabled hidden/>");
}

#[test]
fn listeners_are_not_serialized() {
    let element = ElementDescriptor::new("input")
        .attribute("type", "password")
        .listener(onkeypress(|_| {}))
        .listener(oninput(|_| {}))
        .listener(oninput(|_| {}));

    assert_eq!(render_element(&element), r#"<input type="password"/>"#);
    assert_eq!(
        pre_render(&element),
        r#"<input type="password" data-listeners="keypress input"/>"#
    );
}

#[test]
fn render_to_buffer() {
    let renderer = Renderer::new();
    let mut buf = String::from("<form>");
    renderer
        .render_to(&mut buf, &ElementDescriptor::new("br"))
        .unwrap();
    buf.push_str("</form>");

    assert_eq!(buf, "<form><br/></form>");
}
