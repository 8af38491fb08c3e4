/// Options from the struct-level `#[model(...)]` attribute.
#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Registered model name; defaults to the struct name
    pub(crate) name: Option<syn::LitStr>,

    /// Primary key attribute; defaults to the `Db` configuration
    pub(crate) primary_key: Option<syn::LitStr>,

    /// `true` for `lenient`, `false` for `strict`
    pub(crate) lenient: Option<bool>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                self.name = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("primary_key") {
                let lit: syn::LitStr = meta.value()?.parse()?;

                if syn::parse_str::<syn::Ident>(&lit.value()).is_err() {
                    return Err(syn::Error::new_spanned(
                        &lit,
                        "primary key must be a valid identifier",
                    ));
                }

                self.primary_key = Some(lit);
            } else if meta.path.is_ident("lenient") {
                self.lenient = Some(true);
            } else if meta.path.is_ident("strict") {
                self.lenient = Some(false);
            } else {
                return Err(syn::Error::new_spanned(
                    &meta.path,
                    "expected one of `name`, `primary_key`, `lenient`, `strict`",
                ));
            }

            Ok(())
        })
    }
}
