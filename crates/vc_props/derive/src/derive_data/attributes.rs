use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Meta, Path};

use crate::EDITABLE_ATTRIBUTE_NAME;

fn editable_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(EDITABLE_ATTRIBUTE_NAME))
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the type itself, `#[editable(methods = path)]`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub methods: Option<Path>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in editable_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("methods") {
                    if out.methods.is_some() {
                        return Err(meta.error("duplicate `methods`"));
                    }
                    out.methods = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown type attribute, expected `methods = path`"))
                }
            })?;
        }

        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// The editable marker of a field.
#[derive(Default)]
pub(crate) struct Marker {
    pub category: Option<LitStr>,
    pub setter: Option<LitStr>,
}

/// Attributes on a struct field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub marker: Option<Marker>,
    pub read_only: bool,
    pub parent: bool,
    pub skip: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in editable_attrs(attrs) {
            match &attr.meta {
                Meta::Path(_) => {
                    out.marker.get_or_insert_with(Marker::default);
                }
                Meta::List(_) => {
                    let mut marker = Marker::default();
                    let mut structural = false;
                    attr.parse_nested_meta(|meta| {
                        structural |= out.parse_nested(&meta, &mut marker)?;
                        Ok(())
                    })?;
                    if !structural || marker.category.is_some() || marker.setter.is_some() {
                        out.merge_marker(attr, marker)?;
                    }
                }
                Meta::NameValue(_) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected `#[editable]` or `#[editable(...)]`",
                    ));
                }
            }

            if (out.parent || out.skip) && (out.marker.is_some() || out.read_only) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`parent` and `skip` can not be combined with other editable attributes",
                ));
            }
            if out.parent && out.skip {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`parent` and `skip` are exclusive",
                ));
            }
        }

        Ok(out)
    }

    /// Returns `true` for `parent` and `skip`, which do not make the field editable.
    fn parse_nested(&mut self, meta: &ParseNestedMeta, marker: &mut Marker) -> syn::Result<bool> {
        if meta.path.is_ident("category") {
            marker.category = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("setter") {
            marker.setter = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("read_only") {
            self.read_only = true;
        } else if meta.path.is_ident("parent") {
            self.parent = true;
            return Ok(true);
        } else if meta.path.is_ident("skip") {
            self.skip = true;
            return Ok(true);
        } else {
            return Err(meta.error(
                "unknown field attribute, expected one of `category`, `setter`, `read_only`, `parent`, `skip`",
            ));
        }
        Ok(false)
    }

    fn merge_marker(&mut self, attr: &Attribute, marker: Marker) -> syn::Result<()> {
        let current = self.marker.get_or_insert_with(Marker::default);
        if marker.category.is_some() {
            if current.category.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate `category`"));
            }
            current.category = marker.category;
        }
        if marker.setter.is_some() {
            if current.setter.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate `setter`"));
            }
            current.setter = marker.setter;
        }
        Ok(())
    }
}
