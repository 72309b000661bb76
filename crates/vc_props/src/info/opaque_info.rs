use core::any::Any;

use crate::info::{Type, impl_type_fn};

/// A container for compile-time info related to opaque types:
/// scalars, strings and anything else edited as a single value.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`] of `T`.
    #[inline]
    pub fn new<T: Any>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
