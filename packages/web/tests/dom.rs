#![cfg(all(target_arch = "wasm32", feature = "web-sys"))]

use lattice_core::{Binding, Callback, StateOwner};
use lattice_web::{dom, render_secure_field, WebConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mounts_password_input() {
    let owner = StateOwner::new();
    let value = owner.insert(String::from("hello"));

    let element =
        render_secure_field(value, "Password", Callback::noop(), &WebConfig::default()).unwrap();
    let document = dom::document().unwrap();
    let mounted = dom::mount(&element, &document).unwrap();

    assert_eq!(mounted.element().get_attribute("type").as_deref(), Some("password"));
    assert_eq!(
        mounted.element().get_attribute("placeholder").as_deref(),
        Some("Password")
    );

    let input = mounted
        .element()
        .dyn_ref::<web_sys::HtmlInputElement>()
        .unwrap();
    assert_eq!(input.value(), "hello");

    input.set_value("secret");
    let event = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();

    assert_eq!(value.get(), "secret");
}
