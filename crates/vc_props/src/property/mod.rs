//! Editable properties of a type.
//!
//! A [`PropertyDescriptor`] pairs a field of a scanned type with its
//! [`Editable`](crate::info::Editable) marker and an optional setter method.
//! It reads and writes the field on live objects, from typed values or text.

mod descriptor;
mod editing;

pub use descriptor::PropertyDescriptor;
pub use editing::EditOutcome;
