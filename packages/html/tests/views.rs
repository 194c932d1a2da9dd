use lattice_core::{Binding, StateOwner};
use lattice_html::{Label, SecureField, Text};

#[test]
fn text_labels_expose_their_content() {
    assert_eq!(Label::from("Password").as_text(), Some("Password"));
    assert_eq!(Label::from(Text::new("PIN")).as_text(), Some("PIN"));
    assert_eq!(Label::view(42u8).as_text(), None);
}

#[test]
fn secure_field_keeps_its_parts() {
    let owner = StateOwner::new();
    let text = owner.insert(String::from("hunter2"));
    let field = SecureField::new("Password", text);

    assert_eq!(field.label().as_text(), Some("Password"));
    assert_eq!(field.text().get(), "hunter2");

    // the default commit action is a no-op
    field.commit_action().call();
}
