use syn::{Data, DeriveInput, Fields};

use super::{EditableEnum, EditableStruct, TypeAttributes};

/// The parsed derive input.
pub(crate) enum EditableDerive<'a> {
    Struct(EditableStruct<'a>),
    Enum(EditableEnum<'a>),
}

impl<'a> EditableDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "`#[derive(Editable)]` does not support generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => Ok(Self::Struct(EditableStruct::from_fields(
                    &input.ident,
                    attrs,
                    named,
                )?)),
                _ => Err(syn::Error::new_spanned(
                    &input.ident,
                    "`#[derive(Editable)]` only supports structs with named fields",
                )),
            },
            Data::Enum(data) => {
                if let Some(methods) = attrs.methods {
                    return Err(syn::Error::new_spanned(
                        methods,
                        "`methods` is only supported on structs",
                    ));
                }
                Ok(Self::Enum(EditableEnum::from_variants(
                    &input.ident,
                    &data.variants,
                )?))
            }
            Data::Union(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "`#[derive(Editable)]` does not support unions",
            )),
        }
    }
}
