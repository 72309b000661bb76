use syn::ext::IdentExt;
use syn::{FieldsNamed, GenericArgument, Ident, PathArguments, Type, TypePath, Visibility};

use super::{FieldAttributes, TypeAttributes};

/// How a field stores its value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldStorage {
    /// `T`, always set.
    Value,
    /// `Option<T>`, `None` is unset.
    Optional,
}

/// A registered field of the derived struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub name: String,
    /// The declared type, without `Option` for optional storage.
    pub ty: &'a Type,
    pub storage: FieldStorage,
    pub public: bool,
    pub attrs: FieldAttributes,
}

/// The embedded ancestor of the derived struct.
pub(crate) struct ParentField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
}

pub(crate) struct EditableStruct<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    pub parent: Option<ParentField<'a>>,
    pub fields: Vec<StructField<'a>>,
}

/// Returns `T` for a type written as `Option<T>`.
///
/// This is syntactic, an alias of `Option` is not detected.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let last = path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match (args.args.len(), args.args.first()?) {
        (1, GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}

impl<'a> EditableStruct<'a> {
    pub fn from_fields(
        ident: &'a Ident,
        attrs: TypeAttributes,
        named: &'a FieldsNamed,
    ) -> syn::Result<Self> {
        let mut parent = None;
        let mut fields = Vec::with_capacity(named.named.len());

        for field in &named.named {
            let Some(field_ident) = field.ident.as_ref() else {
                continue;
            };
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;

            if field_attrs.skip {
                continue;
            }

            if field_attrs.parent {
                if parent.is_some() {
                    return Err(syn::Error::new_spanned(
                        field,
                        "only one field can be the `parent`",
                    ));
                }
                parent = Some(ParentField {
                    ident: field_ident,
                    ty: &field.ty,
                });
                continue;
            }

            let (ty, storage) = match option_inner(&field.ty) {
                Some(inner) => (inner, FieldStorage::Optional),
                None => (&field.ty, FieldStorage::Value),
            };

            fields.push(StructField {
                ident: field_ident,
                name: field_ident.unraw().to_string(),
                ty,
                storage,
                public: matches!(field.vis, Visibility::Public(_)),
                attrs: field_attrs,
            });
        }

        Ok(Self {
            ident,
            attrs,
            parent,
            fields,
        })
    }
}
