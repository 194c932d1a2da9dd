macro_rules! impl_event {
    (
        $data:ty;
        $(
            $( #[$attr:meta] )*
            $name:ident
        )*
    ) => {
        $(
            $( #[$attr] )*
            pub fn $name(f: impl FnMut(::lattice_core::Event<$data>) + 'static) -> ::lattice_core::Listener {
                ::lattice_core::Listener::new(&stringify!($name)[2..], f)
            }
        )*
    };
}

mod form;
pub use form::*;

mod keyboard;
pub use keyboard::*;
