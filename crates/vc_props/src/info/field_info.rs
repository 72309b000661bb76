use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use crate::Reflect;
use crate::error::AccessError;
use crate::info::{Editable, Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Visibility

/// Whether a field or method can be used without relaxing access first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

// -----------------------------------------------------------------------------
// Accessor

enum Denied {
    Target,
    ReadOnly,
    Value,
}

trait FieldAccessor: Send + Sync {
    fn get<'a>(&self, target: &'a dyn Any) -> Result<Option<&'a dyn Reflect>, Denied>;
    fn get_mut<'a>(&self, target: &'a mut dyn Any) -> Result<Option<&'a mut dyn Reflect>, Denied>;
    fn set(&self, target: &mut dyn Any, value: &dyn Reflect) -> Result<(), Denied>;
    fn is_writable(&self) -> bool;
}

/// Projections from the owner `T` to the slot of a field of type `F`.
///
/// `Optional` slots hold `Option<F>`, where `None` reads as unset.
enum Storage<T, F> {
    Value {
        get: fn(&T) -> &F,
        get_mut: Option<fn(&mut T) -> &mut F>,
    },
    Optional {
        get: fn(&T) -> &Option<F>,
        get_mut: Option<fn(&mut T) -> &mut Option<F>>,
    },
}

impl<T: Any, F: Reflect + Clone> FieldAccessor for Storage<T, F> {
    fn get<'a>(&self, target: &'a dyn Any) -> Result<Option<&'a dyn Reflect>, Denied> {
        let target = target.downcast_ref::<T>().ok_or(Denied::Target)?;
        Ok(match self {
            Self::Value { get, .. } => Some(get(target) as &dyn Reflect),
            Self::Optional { get, .. } => get(target).as_ref().map(|v| v as &dyn Reflect),
        })
    }

    fn get_mut<'a>(&self, target: &'a mut dyn Any) -> Result<Option<&'a mut dyn Reflect>, Denied> {
        let target = target.downcast_mut::<T>().ok_or(Denied::Target)?;
        match self {
            Self::Value {
                get_mut: Some(get_mut),
                ..
            } => Ok(Some(get_mut(target) as &mut dyn Reflect)),
            Self::Optional {
                get_mut: Some(get_mut),
                ..
            } => Ok(get_mut(target).as_mut().map(|v| v as &mut dyn Reflect)),
            _ => Err(Denied::ReadOnly),
        }
    }

    fn set(&self, target: &mut dyn Any, value: &dyn Reflect) -> Result<(), Denied> {
        // Both checks happen before anything is written.
        let target = target.downcast_mut::<T>().ok_or(Denied::Target)?;
        let value = value.downcast_ref::<F>().ok_or(Denied::Value)?;
        match self {
            Self::Value {
                get_mut: Some(get_mut),
                ..
            } => *get_mut(target) = value.clone(),
            Self::Optional {
                get_mut: Some(get_mut),
                ..
            } => *get_mut(target) = Some(value.clone()),
            _ => return Err(Denied::ReadOnly),
        }
        Ok(())
    }

    fn is_writable(&self) -> bool {
        match self {
            Self::Value { get_mut, .. } => get_mut.is_some(),
            Self::Optional { get_mut, .. } => get_mut.is_some(),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Compile-time info of a single declared field.
///
/// Holds the field name, the declaring type, the declared field type,
/// its [`Visibility`], an optional [`Editable`] marker and the projections
/// used to read and assign the field on an instance of the declaring type.
///
/// The declared type is stored as a function pointer and resolved lazily,
/// so a type can describe fields whose info is built later.
///
/// # Examples
///
/// ```
/// use vc_props::info::{Editable, FieldInfo, Visibility};
///
/// struct Label {
///     text: String,
/// }
///
/// let field = FieldInfo::new::<Label, String>("text", |l| &l.text, |l| &mut l.text)
///     .with_visibility(Visibility::Private)
///     .with_editable(Editable::new().with_category("Content"));
///
/// let mut label = Label { text: "hi".into() };
/// field.set(&mut label, &String::from("bye")).unwrap();
///
/// assert_eq!(label.text, "bye");
/// assert_eq!(field.type_info().type_name(), "String");
/// assert_eq!(field.editable().unwrap().category(), "Content");
/// ```
#[derive(Clone)]
pub struct FieldInfo {
    name: &'static str,
    owner: Type,
    field_type: fn() -> &'static TypeInfo,
    visibility: Visibility,
    optional: bool,
    editable: Option<Editable>,
    accessor: Arc<dyn FieldAccessor>,
}

impl FieldInfo {
    fn with_storage<T: Any, F: Typed + Reflect + Clone>(
        name: &'static str,
        storage: Storage<T, F>,
    ) -> Self {
        Self {
            name,
            owner: Type::of::<T>(),
            field_type: F::type_info,
            visibility: Visibility::Public,
            optional: matches!(storage, Storage::Optional { .. }),
            editable: None,
            accessor: Arc::new(storage),
        }
    }

    /// A readable and assignable field of type `F` declared on `T`.
    pub fn new<T: Any, F: Typed + Reflect + Clone>(
        name: &'static str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self {
        Self::with_storage(
            name,
            Storage::Value {
                get,
                get_mut: Some(get_mut),
            },
        )
    }

    /// A field that can be read but never assigned.
    pub fn read_only<T: Any, F: Typed + Reflect + Clone>(
        name: &'static str,
        get: fn(&T) -> &F,
    ) -> Self {
        Self::with_storage(name, Storage::Value { get, get_mut: None })
    }

    /// A field stored as `Option<F>` whose declared type is `F`.
    ///
    /// `None` reads as an unset value; assignment always stores `Some`.
    pub fn optional<T: Any, F: Typed + Reflect + Clone>(
        name: &'static str,
        get: fn(&T) -> &Option<F>,
        get_mut: fn(&mut T) -> &mut Option<F>,
    ) -> Self {
        Self::with_storage(
            name,
            Storage::Optional {
                get,
                get_mut: Some(get_mut),
            },
        )
    }

    /// An [`optional`](Self::optional) field that can not be assigned.
    pub fn optional_read_only<T: Any, F: Typed + Reflect + Clone>(
        name: &'static str,
        get: fn(&T) -> &Option<F>,
    ) -> Self {
        Self::with_storage(name, Storage::Optional { get, get_mut: None })
    }

    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[inline]
    pub fn with_editable(mut self, editable: Editable) -> Self {
        self.editable = Some(editable);
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`Type`] that declares this field.
    #[inline]
    pub const fn owner(&self) -> &Type {
        &self.owner
    }

    /// Returns the [`TypeInfo`] of the declared field type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.field_type)()
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    /// Returns `true` if the field may hold no value.
    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns `false` for read-only fields.
    #[inline]
    pub fn is_writable(&self) -> bool {
        self.accessor.is_writable()
    }

    #[inline]
    pub const fn editable(&self) -> Option<&Editable> {
        self.editable.as_ref()
    }

    #[inline]
    pub const fn is_editable(&self) -> bool {
        self.editable.is_some()
    }

    /// Read the field from an instance of the declaring type.
    ///
    /// Returns `Ok(None)` if an optional field is unset.
    /// Visibility is not checked here, see [`FieldRef`](crate::introspect::FieldRef).
    pub fn get<'a>(&self, target: &'a dyn Any) -> Result<Option<&'a dyn Reflect>, AccessError> {
        self.accessor.get(target).map_err(|denied| self.denied(denied, None))
    }

    /// Mutable version of [`FieldInfo::get`].
    pub fn get_mut<'a>(
        &self,
        target: &'a mut dyn Any,
    ) -> Result<Option<&'a mut dyn Reflect>, AccessError> {
        self.accessor
            .get_mut(target)
            .map_err(|denied| self.denied(denied, None))
    }

    /// Assign a clone of `value` to the field.
    ///
    /// Nothing is written unless both the target and the value have the expected types.
    pub fn set(&self, target: &mut dyn Any, value: &dyn Reflect) -> Result<(), AccessError> {
        self.accessor
            .set(target, value)
            .map_err(|denied| self.denied(denied, Some(value)))
    }

    fn denied(&self, denied: Denied, value: Option<&dyn Reflect>) -> AccessError {
        match denied {
            Denied::Target => AccessError::TargetMismatch {
                field: self.name,
                expected: self.owner.path(),
            },
            Denied::ReadOnly => AccessError::ReadOnly {
                owner: self.owner.path(),
                field: self.name,
            },
            Denied::Value => AccessError::ValueMismatch {
                field: self.name,
                expected: self.type_info().type_path(),
                found: value.map_or("<none>", |v| v.reflect_type_info().type_path()),
            },
        }
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("visibility", &self.visibility)
            .field("optional", &self.optional)
            .field("editable", &self.editable)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::FieldInfo;
    use crate::error::AccessError;

    #[derive(Default)]
    struct Sample {
        count: u32,
        note: Option<String>,
        id: u64,
    }

    #[test]
    fn plain_field() {
        let field = FieldInfo::new::<Sample, u32>("count", |s| &s.count, |s| &mut s.count);
        let mut sample = Sample::default();

        field.set(&mut sample, &7_u32).unwrap();
        let value = field.get(&sample).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<u32>(), Some(&7));
        assert!(field.is_writable());
        assert!(!field.is_optional());
    }

    #[test]
    fn optional_field() {
        let field = FieldInfo::optional::<Sample, String>("note", |s| &s.note, |s| &mut s.note);
        let mut sample = Sample::default();

        assert!(field.get(&sample).unwrap().is_none());
        field.set(&mut sample, &String::from("hi")).unwrap();
        assert_eq!(sample.note.as_deref(), Some("hi"));
        assert!(field.type_info().type_is::<String>());
    }

    #[test]
    fn rejected_writes_leave_target_untouched() {
        let field = FieldInfo::new::<Sample, u32>("count", |s| &s.count, |s| &mut s.count);
        let mut sample = Sample { count: 3, ..Default::default() };

        let err = field.set(&mut sample, &String::from("x")).unwrap_err();
        assert!(matches!(err, AccessError::ValueMismatch { field: "count", .. }));
        assert_eq!(sample.count, 3);

        let mut other = 0_u8;
        let err = field.set(&mut other, &1_u32).unwrap_err();
        assert!(matches!(err, AccessError::TargetMismatch { .. }));
    }

    #[test]
    fn read_only_field() {
        let field = FieldInfo::read_only::<Sample, u64>("id", |s| &s.id);
        let mut sample = Sample { id: 9, ..Default::default() };

        assert!(!field.is_writable());
        assert!(matches!(
            field.set(&mut sample, &1_u64),
            Err(AccessError::ReadOnly { field: "id", .. })
        ));
        assert!(matches!(field.get_mut(&mut sample), Err(AccessError::ReadOnly { .. })));
        assert_eq!(sample.id, 9);
    }
}
