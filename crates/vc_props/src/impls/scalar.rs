use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, Typed};

macro_rules! impl_reflect_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<$ty>()))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(<$ty as Clone>::clone(self))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }

            #[inline]
            fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    )*};
}

impl_reflect_scalar!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String,
);

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn scalars_are_opaque() {
        assert_eq!(i32::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(String::type_info().type_name(), "String");
        assert!(f64::type_info().type_is::<f64>());
    }

    #[test]
    fn display_text() {
        let text: &dyn Reflect = &String::from("Ada");
        assert_eq!(format!("{text}"), "Ada");
        assert_eq!(format!("{text:?}"), "\"Ada\"");

        let flag: &dyn Reflect = &true;
        assert_eq!(format!("{flag}"), "true");

        let cloned = (&2.5_f64 as &dyn Reflect).reflect_clone();
        assert_eq!(cloned.downcast_ref::<f64>(), Some(&2.5));
    }
}
