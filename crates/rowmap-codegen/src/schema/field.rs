use super::{ErrorSet, HasMany};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    pub(crate) ty: FieldTy,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// The `Record` holding the attribute store
    Record,

    HasMany(HasMany),

    /// Any other field; initialized with `Default::default()`
    Other,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut ty = None;

        for attr in &field.attrs {
            let parsed = if attr.path().is_ident("record") {
                Ok(FieldTy::Record)
            } else if attr.path().is_ident("has_many") {
                HasMany::from_ast(attr, ident, &field.ty).map(FieldTy::HasMany)
            } else {
                continue;
            };

            match parsed {
                Ok(parsed) if ty.is_none() => ty = Some(parsed),
                Ok(_) => errs.push(syn::Error::new_spanned(
                    attr,
                    "field has more than one of `#[record]` and `#[has_many]`",
                )),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            ty: ty.unwrap_or(FieldTy::Other),
        })
    }
}
