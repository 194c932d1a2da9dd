use lattice_core::{Binding, BindingError, State, StateOwner};

#[test]
fn reads_and_writes() {
    let owner = StateOwner::new();
    let text = owner.insert(String::from("hello"));

    assert_eq!(text.get(), "hello");
    text.set("world".to_string());
    assert_eq!(text.get(), "world");
}

#[test]
fn copies_share_the_value() {
    let owner = StateOwner::new();
    let first = owner.insert(1);
    let second = first;

    second.set(2);
    assert_eq!(first.get(), 2);
    assert_eq!(first, second);
}

#[test]
fn drops_with_owner() {
    let key: State<String>;
    {
        let owner = StateOwner::new();
        key = owner.insert("hello world".to_string());
        assert_eq!(key.try_get(), Ok("hello world".to_string()));
    }
    assert_eq!(key.try_get(), Err(BindingError::Dropped));
    assert_eq!(key.try_set("again".to_string()), Err(BindingError::Dropped));
}

#[test]
#[should_panic]
fn get_panics_after_drop() {
    let key = {
        let owner = StateOwner::new();
        owner.insert(0u32)
    };
    let _ = key.get();
}

#[test]
fn writing_while_reading_is_an_error() {
    let owner = StateOwner::new();
    let value = owner.insert(vec![1, 2, 3]);

    let result = value.try_with(|_| value.try_set(vec![4]));
    assert!(matches!(result, Ok(Err(err)) if err != BindingError::Dropped));
    assert_eq!(value.get(), vec![1, 2, 3]);
}

#[test]
fn bindings_can_be_borrowed() {
    fn write_through(binding: impl Binding<String>) {
        binding.set("through a reference".to_string());
    }

    let owner = StateOwner::new();
    let text = owner.insert(String::new());
    write_through(&text);
    assert_eq!(text.get(), "through a reference");
}
