use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{Fields, Ident, Token, Variant};

pub(crate) struct EnumVariant<'a> {
    pub ident: &'a Ident,
    pub name: String,
}

pub(crate) struct EditableEnum<'a> {
    pub ident: &'a Ident,
    pub variants: Vec<EnumVariant<'a>>,
}

impl<'a> EditableEnum<'a> {
    pub fn from_variants(
        ident: &'a Ident,
        variants: &'a Punctuated<Variant, Token![,]>,
    ) -> syn::Result<Self> {
        if variants.is_empty() {
            return Err(syn::Error::new_spanned(
                ident,
                "`#[derive(Editable)]` needs at least one variant",
            ));
        }

        let variants = variants
            .iter()
            .map(|variant| match variant.fields {
                Fields::Unit => Ok(EnumVariant {
                    ident: &variant.ident,
                    name: variant.ident.unraw().to_string(),
                }),
                _ => Err(syn::Error::new_spanned(
                    variant,
                    "`#[derive(Editable)]` only supports unit variants",
                )),
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { ident, variants })
    }
}
