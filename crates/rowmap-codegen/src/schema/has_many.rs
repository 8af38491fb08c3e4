use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct HasMany {
    /// Target type
    pub(crate) ty: syn::Type,

    /// Foreign key override on the target
    pub(crate) foreign_key: Option<syn::LitStr>,

    /// Evicts this association's cache
    pub(crate) reload_ident: syn::Ident,
}

impl HasMany {
    pub(super) fn from_ast(
        attr: &syn::Attribute,
        name: &syn::Ident,
        ty: &syn::Type,
    ) -> syn::Result<Self> {
        let mut foreign_key = None;

        if let syn::Meta::List(_) = &attr.meta {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("foreign_key") {
                    foreign_key = Some(meta.value()?.parse()?);
                } else {
                    return Err(syn::Error::new_spanned(
                        &meta.path,
                        "expected `foreign_key` attribute",
                    ));
                }

                Ok(())
            })?;
        }

        Ok(Self {
            ty: target_ty(ty)?,
            foreign_key,
            reload_ident: syn::Ident::new(&format!("reload_{}", name.unraw()), name.span()),
        })
    }
}

/// Extracts `T` from a `HasMany<T>` field type.
fn target_ty(ty: &syn::Type) -> syn::Result<syn::Type> {
    let err = || syn::Error::new_spanned(ty, "`#[has_many]` fields must have type `HasMany<T>`");

    let syn::Type::Path(path) = ty else {
        return Err(err());
    };

    let Some(segment) = path.path.segments.last() else {
        return Err(err());
    };

    if segment.ident != "HasMany" {
        return Err(err());
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return Err(err());
    };

    match args.args.first() {
        Some(syn::GenericArgument::Type(ty)) if args.args.len() == 1 => Ok(ty.clone()),
        _ => Err(err()),
    }
}
