//! Parse the derive input into the data needed for code generation.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod editable_derive;
mod editable_enum;
mod editable_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use editable_derive::EditableDerive;
pub(crate) use editable_enum::EditableEnum;
pub(crate) use editable_struct::{EditableStruct, FieldStorage, StructField};
