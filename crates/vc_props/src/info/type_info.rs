use core::any::TypeId;
use core::fmt;

use thiserror::Error;

use crate::info::{EnumInfo, OpaqueInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The kind of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    Enum,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReflectKind::Struct => "struct",
            ReflectKind::Enum => "enum",
            ReflectKind::Opaque => "opaque",
        })
    }
}

/// Returned by [`TypeInfo::as_struct`] and [`TypeInfo::as_enum`] on a kind mismatch.
#[derive(Debug, Error)]
#[error("kind mismatch: expected {expected:?}, received {received:?}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time info of a type known to the property system.
#[derive(Debug)]
pub enum TypeInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
    Opaque(OpaqueInfo),
}

impl TypeInfo {
    /// Returns the [`Type`] of the described type.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    #[inline]
    pub fn type_is<T: ?Sized + 'static>(&self) -> bool {
        self.ty().is::<T>()
    }

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns `true` for enumeration types.
    #[inline]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub const fn as_struct(&self) -> Result<&StructInfo, ReflectKindError> {
        match self {
            Self::Struct(info) => Ok(info),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: self.kind(),
            }),
        }
    }

    pub const fn as_enum(&self) -> Result<&EnumInfo, ReflectKindError> {
        match self {
            Self::Enum(info) => Ok(info),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Enum,
                received: self.kind(),
            }),
        }
    }

    /// Returns the info of the direct ancestor, if any.
    pub fn parent(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::Struct(info) => info.parent().map(|parent| parent.type_info()),
            _ => None,
        }
    }

    /// Iterate from this type through every ancestor, nearest first.
    ///
    /// The first item is always `self`.
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Returns `true` if a value of `other` can stand in for this type,
    /// that is, `other` is this type or one of its descendants.
    pub fn is_assignable_from(&self, other: &TypeInfo) -> bool {
        other.ancestors().any(|ancestor| ancestor.ty() == self.ty())
    }
}

/// Iterator returned by [`TypeInfo::ancestors`].
#[derive(Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a TypeInfo>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TypeInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

impl core::iter::FusedIterator for Ancestors<'_> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::ReflectKind;
    use crate::fixtures::{Entity, Mode, Player};
    use crate::info::Typed;

    #[test]
    fn ancestors_end_at_root() {
        let mut chain = Player::type_info().ancestors();
        assert!(chain.next().unwrap().type_is::<Player>());
        assert!(chain.next().unwrap().type_is::<Entity>());
        assert!(chain.next().is_none());
        assert!(chain.next().is_none());

        let leaf: Vec<_> = Mode::type_info().ancestors().map(|info| info.kind()).collect();
        assert_eq!(leaf, [ReflectKind::Enum]);
    }

    #[test]
    fn assignability_follows_parents() {
        let entity = Entity::type_info();
        assert!(entity.is_assignable_from(entity));
        assert!(entity.is_assignable_from(Player::type_info()));
        assert!(!Player::type_info().is_assignable_from(entity));
        assert!(!entity.is_assignable_from(Mode::type_info()));
        assert!(Player::type_info().parent().unwrap().type_is::<Entity>());
    }
}
