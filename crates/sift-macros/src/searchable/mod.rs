//! Implementation of the `#[derive(Searchable)]` macro.
//!
//! Generates field accessors and field name constants from struct
//! annotations.

mod attrs;
mod derive;

pub use derive::searchable_derive_impl;
