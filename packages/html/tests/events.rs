use std::{cell::RefCell, rc::Rc};

use lattice_core::ElementDescriptor;
use lattice_html::*;

#[test]
fn keyboard_listeners_use_event_names() {
    assert_eq!(onkeypress(|_| {}).name, "keypress");
    assert_eq!(onkeydown(|_| {}).name, "keydown");
    assert_eq!(onkeyup(|_| {}).name, "keyup");
    assert_eq!(oninput(|_| {}).name, "input");
    assert_eq!(onchange(|_| {}).name, "change");
}

#[test]
fn keypress_delivers_keyboard_data() {
    let keys = Rc::new(RefCell::new(Vec::new()));
    let element = ElementDescriptor::new("input").listener(onkeypress({
        let keys = keys.clone();
        move |event| keys.borrow_mut().push((event.key(), event.shift_key()))
    }));

    element.dispatch("keypress", KeyboardData::new(SerializedKeyboardData::new("a")));
    element.dispatch(
        "keypress",
        KeyboardData::new(SerializedKeyboardData::new("Enter").with_shift(true)),
    );

    assert_eq!(
        *keys.borrow(),
        [("a".to_string(), false), ("Enter".to_string(), true)]
    );
}

#[test]
fn input_delivers_optional_values() {
    let values = Rc::new(RefCell::new(Vec::new()));
    let element = ElementDescriptor::new("input").listener(oninput({
        let values = values.clone();
        move |event| values.borrow_mut().push(event.value())
    }));

    element.dispatch("input", FormData::new(SerializedFormData::new("abc")));
    element.dispatch("input", FormData::new(SerializedFormData::empty()));

    assert_eq!(*values.borrow(), [Some("abc".to_string()), None]);
}

#[test]
fn keyboard_listener_ignores_form_payloads() {
    let fired = Rc::new(RefCell::new(0));
    let element = ElementDescriptor::new("input").listener(onkeypress({
        let fired = fired.clone();
        move |_| *fired.borrow_mut() += 1
    }));

    element.dispatch("keypress", FormData::new(SerializedFormData::new("Enter")));
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn payloads_downcast_to_their_source() {
    let data = KeyboardData::new(SerializedKeyboardData::new("x").with_ctrl(true));
    assert_eq!(
        data.downcast::<SerializedKeyboardData>(),
        Some(&SerializedKeyboardData::new("x").with_ctrl(true))
    );
    assert!(data.downcast::<SerializedFormData>().is_none());
}

#[cfg(feature = "serialize")]
#[test]
fn payloads_roundtrip_through_json() {
    let data: KeyboardData = serde_json::from_str(r#"{"key":"Enter"}"#).unwrap();
    assert_eq!(data.key(), "Enter");
    assert!(!data.is_auto_repeating());

    let form: FormData = serde_json::from_str(r#"{"value":null}"#).unwrap();
    assert_eq!(form.value(), None);
    assert_eq!(
        serde_json::to_string(&FormData::new(SerializedFormData::new("pw"))).unwrap(),
        r#"{"value":"pw"}"#
    );
}
