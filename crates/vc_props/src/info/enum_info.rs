use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt;

use crate::Reflect;
use crate::error::ParseFailure;
use crate::info::{Type, impl_type_fn};

/// A container for compile-time info of enums made of unit variants.
///
/// Each variant keeps its constant value, so a value can be rebuilt from its
/// variant name.
///
/// # Examples
///
/// ```
/// use vc_props::info::EnumInfo;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Side {
///     Left,
///     Right,
/// }
/// # impl vc_props::info::Typed for Side {
/// #     fn type_info() -> &'static vc_props::info::TypeInfo {
/// #         static CELL: vc_props::impls::NonGenericTypeInfoCell =
/// #             vc_props::impls::NonGenericTypeInfoCell::new();
/// #         CELL.get_or_init(|| vc_props::info::TypeInfo::Enum(
/// #             EnumInfo::new::<Self>([("Left", Self::Left), ("Right", Self::Right)]),
/// #         ))
/// #     }
/// # }
/// # impl vc_props::Reflect for Side {
/// #     fn reflect_clone(&self) -> Box<dyn vc_props::Reflect> { Box::new(*self) }
/// #     fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         core::fmt::Debug::fmt(self, f)
/// #     }
/// # }
///
/// let info = EnumInfo::new::<Side>([("Left", Side::Left), ("Right", Side::Right)]);
///
/// assert_eq!(info.variant_names(), &["Left", "Right"]);
/// let right = info.variant_from_name("Right").unwrap();
/// assert_eq!(right.downcast_ref::<Side>(), Some(&Side::Right));
/// assert!(info.variant_from_name("right").is_err());
/// ```
pub struct EnumInfo {
    ty: Type,
    variant_names: Box<[&'static str]>,
    variants: Box<[Box<dyn Reflect>]>,
}

impl EnumInfo {
    impl_type_fn!(ty);

    /// Creates the info of `E` from `(name, value)` pairs in declaration order.
    pub fn new<E: Reflect>(variants: impl IntoIterator<Item = (&'static str, E)>) -> Self {
        let (variant_names, variants): (alloc::vec::Vec<_>, alloc::vec::Vec<_>) = variants
            .into_iter()
            .map(|(name, value)| (name, Box::new(value) as Box<dyn Reflect>))
            .unzip();

        Self {
            ty: Type::of::<E>(),
            variant_names: variant_names.into_boxed_slice(),
            variants: variants.into_boxed_slice(),
        }
    }

    /// Returns the variant names in declaration order.
    #[inline]
    pub fn variant_names(&self) -> &[&'static str] {
        &self.variant_names
    }

    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variant_names.len()
    }

    /// Returns the declaration index of a variant name. Case sensitive.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variant_names.iter().position(|variant| *variant == name)
    }

    #[inline]
    pub fn contains_variant(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the constant whose name is exactly `name`.
    pub fn variant_from_name(&self, name: &str) -> Result<Box<dyn Reflect>, ParseFailure> {
        match self.index_of(name) {
            Some(index) => Ok(self.variants[index].reflect_clone()),
            None => Err(ParseFailure::UnknownVariant {
                type_path: self.ty.path(),
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Debug for EnumInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInfo")
            .field("ty", &self.ty)
            .field("variant_names", &self.variant_names)
            .finish()
    }
}
