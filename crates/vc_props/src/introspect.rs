//! Hierarchy walks over declared fields and methods.
//!
//! A type sees its own members plus the members of every ancestor it embeds.
//! Inherited members are addressed through the chain of [`ParentInfo`] links
//! from the scanned type, so they can be used directly on an instance of it.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Reflect;
use crate::error::{AccessError, InvokeError};
use crate::info::{Ancestors, FieldInfo, MethodInfo, ParentInfo, StructInfo, Type, TypeInfo};

// -----------------------------------------------------------------------------
// Projection

fn project<'a>(path: &[&'static ParentInfo], target: &'a dyn Any) -> Option<&'a dyn Any> {
    path.iter().try_fold(target, |target, link| link.project(target))
}

fn project_mut<'a>(
    path: &[&'static ParentInfo],
    target: &'a mut dyn Any,
) -> Option<&'a mut dyn Any> {
    path.iter()
        .try_fold(target, |target, link| link.project_mut(target))
}

/// Visit `info` and its ancestors with the path reaching each, until `visit` returns `false`.
fn walk(
    info: &'static TypeInfo,
    mut visit: impl FnMut(&'static StructInfo, &[&'static ParentInfo]) -> bool,
) {
    let mut path: Vec<&'static ParentInfo> = Vec::new();
    let mut current = info.as_struct().ok();

    while let Some(struct_info) = current {
        if !visit(struct_info, &path) {
            return;
        }
        current = struct_info.parent().and_then(|parent| {
            debug_assert!(
                !path.iter().any(|link| core::ptr::eq(*link, parent)),
                "parent chain of `{}` loops back to `{}`",
                info.type_path(),
                parent.type_info().type_path(),
            );
            path.push(parent);
            parent.type_info().as_struct().ok()
        });
    }
}

// -----------------------------------------------------------------------------
// FieldRef

/// A field as seen from a scanned type, possibly declared by an ancestor.
///
/// Private fields are inaccessible until [`relax_access`](FieldRef::relax_access)
/// is called on this handle.
#[derive(Clone)]
pub struct FieldRef {
    field: &'static FieldInfo,
    root: Type,
    path: Box<[&'static ParentInfo]>,
    accessible: bool,
}

impl FieldRef {
    fn new(root: Type, field: &'static FieldInfo, path: &[&'static ParentInfo]) -> Self {
        Self {
            field,
            root,
            path: path.into(),
            accessible: field.is_public(),
        }
    }

    /// Returns the declared field.
    #[inline]
    pub const fn info(&self) -> &'static FieldInfo {
        self.field
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.field.name()
    }

    /// Returns the scanned type this handle works on.
    #[inline]
    pub const fn root(&self) -> &Type {
        &self.root
    }

    /// Returns how many ancestors up the field is declared, `0` for own fields.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub const fn is_accessible(&self) -> bool {
        self.accessible
    }

    /// Allow access to a private field through this handle.
    #[inline]
    pub fn relax_access(&mut self) {
        self.accessible = true;
    }

    fn check_access(&self) -> Result<(), AccessError> {
        if self.accessible {
            Ok(())
        } else {
            Err(AccessError::Inaccessible {
                owner: self.field.owner().path(),
                field: self.field.name(),
            })
        }
    }

    fn target_mismatch(&self) -> AccessError {
        AccessError::TargetMismatch {
            field: self.field.name(),
            expected: self.root.path(),
        }
    }

    /// Read the field on an instance of the scanned type.
    pub fn get<'a>(&self, target: &'a dyn Any) -> Result<Option<&'a dyn Reflect>, AccessError> {
        self.check_access()?;
        let owner = project(&self.path, target).ok_or_else(|| self.target_mismatch())?;
        self.field.get(owner)
    }

    /// Mutable version of [`FieldRef::get`].
    pub fn get_mut<'a>(
        &self,
        target: &'a mut dyn Any,
    ) -> Result<Option<&'a mut dyn Reflect>, AccessError> {
        self.check_access()?;
        let owner = project_mut(&self.path, target).ok_or_else(|| self.target_mismatch())?;
        self.field.get_mut(owner)
    }

    /// Assign the field on an instance of the scanned type.
    pub fn set(&self, target: &mut dyn Any, value: &dyn Reflect) -> Result<(), AccessError> {
        self.check_access()?;
        let owner = project_mut(&self.path, target).ok_or_else(|| self.target_mismatch())?;
        self.field.set(owner, value)
    }
}

impl PartialEq for FieldRef {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.field, other.field) && self.root == other.root
    }
}

impl Eq for FieldRef {}

impl Hash for FieldRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.field, state);
        self.root.hash(state);
    }
}

impl fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("name", &self.field.name())
            .field("owner", self.field.owner())
            .field("root", &self.root)
            .field("accessible", &self.accessible)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// MethodRef

/// A method as seen from a scanned type, possibly declared by an ancestor.
#[derive(Clone)]
pub struct MethodRef {
    method: &'static MethodInfo,
    root: Type,
    path: Box<[&'static ParentInfo]>,
    accessible: bool,
}

impl MethodRef {
    fn new(root: Type, method: &'static MethodInfo, path: &[&'static ParentInfo]) -> Self {
        Self {
            method,
            root,
            path: path.into(),
            accessible: method.is_public(),
        }
    }

    #[inline]
    pub const fn info(&self) -> &'static MethodInfo {
        self.method
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.method.name()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub const fn is_accessible(&self) -> bool {
        self.accessible
    }

    /// Allow calling a private method through this handle.
    #[inline]
    pub fn relax_access(&mut self) {
        self.accessible = true;
    }

    /// Invoke the method on an instance of the scanned type.
    pub fn invoke(&self, target: &mut dyn Any, args: &[&dyn Reflect]) -> Result<(), InvokeError> {
        if !self.accessible {
            return Err(InvokeError::Inaccessible {
                method: self.method.name(),
            });
        }
        let receiver = project_mut(&self.path, target).ok_or(InvokeError::TargetMismatch {
            method: self.method.name(),
            expected: self.root.path(),
        })?;
        self.method.invoke(receiver, args)
    }
}

impl fmt::Debug for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodRef")
            .field("name", &self.method.name())
            .field("owner", self.method.owner())
            .field("root", &self.root)
            .field("accessible", &self.accessible)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Queries

/// Iterate over `info` and its ancestors, nearest first.
#[inline]
pub fn ancestors(info: &'static TypeInfo) -> Ancestors<'static> {
    info.ancestors()
}

/// Collect the fields of `info` and of all its ancestors.
///
/// Own fields come first in declaration order, then the parent's, and so on.
/// Non-struct types have no fields.
pub fn collect_all_fields(info: &'static TypeInfo) -> Vec<FieldRef> {
    let root = *info.ty();
    let mut fields = Vec::new();
    walk(info, |struct_info, path| {
        fields.extend(
            struct_info
                .fields()
                .iter()
                .map(|field| FieldRef::new(root, field, path)),
        );
        true
    });
    fields
}

/// Find a method by name and exact parameter types, searching `info` first and
/// then each ancestor. Any visibility matches.
pub fn find_method_in_hierarchy(
    info: &'static TypeInfo,
    name: &str,
    params: &[&TypeInfo],
) -> Option<MethodRef> {
    let root = *info.ty();
    let mut found = None;
    walk(info, |struct_info, path| {
        found = struct_info
            .method(name, params)
            .map(|method| MethodRef::new(root, method, path));
        found.is_none()
    });
    found
}

/// Like [`find_method_in_hierarchy`], but only public methods match.
///
/// A private method does not hide a public one further up.
pub fn find_public_method(
    info: &'static TypeInfo,
    name: &str,
    params: &[&TypeInfo],
) -> Option<MethodRef> {
    let root = *info.ty();
    let mut found = None;
    walk(info, |struct_info, path| {
        found = struct_info
            .methods()
            .iter()
            .find(|method| {
                method.is_public() && method.name() == name && method.has_signature(params)
            })
            .map(|method| MethodRef::new(root, method, path));
        found.is_none()
    });
    found
}

/// View `value` as its ancestor `target` by following the embedded parents.
///
/// Returns `value` itself if it already is a `target`, and `None` if `target`
/// is not among its ancestors.
pub fn upcast<'a>(value: &'a dyn Reflect, target: &TypeInfo) -> Option<&'a dyn Reflect> {
    let mut current = value;
    loop {
        let info = current.reflect_type_info();
        if info.ty() == target.ty() {
            return Some(current);
        }
        let parent = info.as_struct().ok()?.parent()?;
        current = parent.project_reflect(current)?;
    }
}
