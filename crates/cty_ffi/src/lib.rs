//! FFI crate root; the generated bridge binds against [`api`].

pub mod api;
