//! [`Reflect`](crate::Reflect) and [`Typed`](crate::info::Typed) for built-in types,
//! and the container used to store static type info.

mod cell;
mod scalar;

pub use cell::NonGenericTypeInfoCell;
