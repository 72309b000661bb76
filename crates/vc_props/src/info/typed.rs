use core::any::Any;

use crate::info::TypeInfo;

/// A static accessor to compile-time type information.
///
/// Usually implemented by `#[derive(Editable)]`. Manual implementations
/// keep the [`TypeInfo`] in a [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell):
///
/// ```
/// use vc_props::info::{OpaqueInfo, TypeInfo, Typed};
/// use vc_props::impls::NonGenericTypeInfoCell;
///
/// struct Celsius(f32);
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert_eq!(Celsius::type_info().type_name(), "Celsius");
/// ```
pub trait Typed: Any {
    /// Returns the compile-time info of this type.
    fn type_info() -> &'static TypeInfo;
}

/// Dynamic dispatch for [`Typed`].
///
/// Automatically implemented for every [`Typed`] type.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
