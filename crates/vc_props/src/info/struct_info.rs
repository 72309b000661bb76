use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use crate::Reflect;
use crate::info::{FieldInfo, MethodInfo, Type, TypeInfo, Typed, impl_type_fn};

// -----------------------------------------------------------------------------
// ParentInfo

trait Upcast: Send + Sync {
    fn upcast<'a>(&self, target: &'a dyn Any) -> Option<&'a dyn Any>;
    fn upcast_mut<'a>(&self, target: &'a mut dyn Any) -> Option<&'a mut dyn Any>;
    fn upcast_reflect<'a>(&self, target: &'a dyn Reflect) -> Option<&'a dyn Reflect>;
}

struct Embedded<T, P> {
    get: fn(&T) -> &P,
    get_mut: fn(&mut T) -> &mut P,
}

impl<T: Any, P: Reflect> Upcast for Embedded<T, P> {
    fn upcast<'a>(&self, target: &'a dyn Any) -> Option<&'a dyn Any> {
        let target = target.downcast_ref::<T>()?;
        Some((self.get)(target))
    }

    fn upcast_mut<'a>(&self, target: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
        let target = target.downcast_mut::<T>()?;
        Some((self.get_mut)(target))
    }

    fn upcast_reflect<'a>(&self, target: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        let target = target.downcast_ref::<T>()?;
        Some((self.get)(target))
    }
}

/// The link from a type to the ancestor it embeds.
///
/// An ancestor is stored inside its descendant, the link knows how
/// to project a descendant instance to the embedded ancestor instance.
#[derive(Clone)]
pub struct ParentInfo {
    type_info: fn() -> &'static TypeInfo,
    upcast: Arc<dyn Upcast>,
}

impl ParentInfo {
    /// Returns the [`TypeInfo`] of the ancestor.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Project an instance of the descendant to its ancestor.
    ///
    /// Returns `None` if `target` is not the descendant type.
    #[inline]
    pub fn project<'a>(&self, target: &'a dyn Any) -> Option<&'a dyn Any> {
        self.upcast.upcast(target)
    }

    /// Mutable version of [`ParentInfo::project`].
    #[inline]
    pub fn project_mut<'a>(&self, target: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
        self.upcast.upcast_mut(target)
    }

    /// Like [`ParentInfo::project`], keeping the value reflectable.
    #[inline]
    pub fn project_reflect<'a>(&self, target: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        self.upcast.upcast_reflect(target)
    }
}

impl fmt::Debug for ParentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParentInfo")
            .field(&self.type_info().type_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// StructInfo

/// A container for compile-time struct info.
///
/// Fields and methods are kept in declaration order. Inherited members are
/// not copied here, they are reached through [`StructInfo::parent`].
///
/// # Examples
///
/// ```
/// use vc_props::Reflect;
/// use vc_props::info::{FieldInfo, StructInfo, TypeInfo, Typed};
/// use vc_props::impls::NonGenericTypeInfoCell;
///
/// #[derive(Clone, Debug)]
/// struct Base {
///     id: u32,
/// }
///
/// struct Derived {
///     base: Base,
///     name: String,
/// }
///
/// impl Typed for Base {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(
///                 StructInfo::builder::<Self>()
///                     .field(FieldInfo::new::<Self, u32>("id", |b| &b.id, |b| &mut b.id))
///                     .build(),
///             )
///         })
///     }
/// }
///
/// impl Reflect for Base {
///     fn reflect_clone(&self) -> Box<dyn Reflect> {
///         Box::new(self.clone())
///     }
///
///     fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         core::fmt::Debug::fmt(self, f)
///     }
/// }
///
/// let info = StructInfo::builder::<Derived>()
///     .parent::<Base>(|d| &d.base, |d| &mut d.base)
///     .field(FieldInfo::new::<Derived, String>("name", |d| &d.name, |d| &mut d.name))
///     .build();
///
/// assert_eq!(info.field_names(), &["name"]);
/// assert!(info.parent().unwrap().type_info().type_is::<Base>());
/// ```
pub struct StructInfo {
    ty: Type,
    parent: Option<ParentInfo>,
    fields: Box<[FieldInfo]>,
    field_names: Box<[&'static str]>,
    methods: Box<[MethodInfo]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Start building the info of `T`.
    #[inline]
    pub fn builder<T: Any>() -> StructInfoBuilder<T> {
        StructInfoBuilder {
            ty: Type::of::<T>(),
            parent: None,
            fields: Vec::new(),
            methods: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the direct ancestor, if any.
    #[inline]
    pub const fn parent(&self) -> Option<&ParentInfo> {
        self.parent.as_ref()
    }

    /// Returns the fields declared by this type, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Returns the declared field names, in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the field with the given name declared by this type.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the methods declared by this type.
    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// Returns the method declared by this type with exactly this signature.
    pub fn method(&self, name: &str, params: &[&TypeInfo]) -> Option<&MethodInfo> {
        self.methods
            .iter()
            .find(|method| method.name() == name && method.has_signature(params))
    }
}

impl fmt::Debug for StructInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructInfo")
            .field("ty", &self.ty)
            .field("parent", &self.parent)
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// StructInfoBuilder

/// Builder of [`StructInfo`], see [`StructInfo::builder`].
pub struct StructInfoBuilder<T> {
    ty: Type,
    parent: Option<ParentInfo>,
    fields: Vec<FieldInfo>,
    methods: Vec<MethodInfo>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any> StructInfoBuilder<T> {
    /// Declare the embedded ancestor `P` and how to reach it.
    pub fn parent<P: Typed + Reflect>(
        mut self,
        get: fn(&T) -> &P,
        get_mut: fn(&mut T) -> &mut P,
    ) -> Self {
        self.parent = Some(ParentInfo {
            type_info: P::type_info,
            upcast: Arc::new(Embedded { get, get_mut }),
        });
        self
    }

    /// Append a field declared by `T`.
    pub fn field(mut self, field: FieldInfo) -> Self {
        debug_assert!(
            *field.owner() == self.ty,
            "field `{}` belongs to `{}`, not `{}`",
            field.name(),
            field.owner(),
            self.ty,
        );
        self.fields.push(field);
        self
    }

    /// Append a method declared by `T`.
    pub fn method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    /// Append several methods declared by `T`.
    pub fn methods(mut self, methods: impl IntoIterator<Item = MethodInfo>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn build(self) -> StructInfo {
        let field_names = self.fields.iter().map(FieldInfo::name).collect();
        StructInfo {
            ty: self.ty,
            parent: self.parent,
            fields: self.fields.into_boxed_slice(),
            field_names,
            methods: self.methods.into_boxed_slice(),
        }
    }
}
