//! Items used by code generated with `#[derive(Editable)]`.
//!
//! The caller may not have `alloc` in scope, so paths go through here.

pub use alloc::boxed::Box;
