use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::info::DynamicTyped;

/// A value whose type is described by a [`TypeInfo`](crate::info::TypeInfo).
///
/// Every field and method argument handled by the property system is a `Reflect`.
/// Implemented for scalars and strings by this crate, and for user types by
/// `#[derive(Editable)]`.
///
/// ## Display
///
/// [`reflect_display`](Reflect::reflect_display) is the text shown to editors.
/// Scalars use their [`Display`](fmt::Display) output, enums their variant name,
/// other types default to [`Debug`](fmt::Debug).
pub trait Reflect: DynamicTyped + Any + Send + Sync {
    /// Clone the value into a new box.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Format the value for debugging.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Format the value as its editable text.
    fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Downcast to a reference of the concrete type.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcast to a mutable reference of the concrete type.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    #[inline]
    pub fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    pub fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl fmt::Display for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_display(f)
    }
}
