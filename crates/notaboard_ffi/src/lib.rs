//! FFI bridge crate for the NotaBoard UI host.

pub mod api;
