use proc_macro2::Span;
use syn::ext::IdentExt;

/// A declared attribute and the accessor identifiers generated for it.
#[derive(Debug)]
pub(crate) struct Attribute {
    /// Attribute name in the schema
    pub(crate) name: String,

    /// Getter identifier; raw when the name is a Rust keyword
    pub(crate) getter: syn::Ident,

    /// Setter identifier, `set_<name>`
    pub(crate) setter: syn::Ident,
}

impl Attribute {
    pub(crate) fn from_ident(ident: &syn::Ident) -> Self {
        Self::from_name(&ident.unraw().to_string(), ident.span())
    }

    pub(crate) fn from_name(name: &str, span: Span) -> Self {
        let getter = match syn::parse_str::<syn::Ident>(name) {
            Ok(_) => syn::Ident::new(name, span),
            Err(_) => syn::Ident::new_raw(name, span),
        };

        Self {
            name: name.to_string(),
            getter,
            setter: syn::Ident::new(&format!("set_{name}"), span),
        }
    }

    /// Parses the names listed in one `#[schema(...)]` attribute.
    pub(crate) fn list_from_ast(attr: &syn::Attribute) -> syn::Result<Vec<Self>> {
        let idents = attr.parse_args_with(|input: syn::parse::ParseStream| {
            syn::punctuated::Punctuated::<syn::Ident, syn::Token![,]>::parse_terminated_with(
                input,
                syn::Ident::parse_any,
            )
        })?;

        if idents.is_empty() {
            return Err(syn::Error::new_spanned(
                attr,
                "`#[schema]` requires at least one attribute name",
            ));
        }

        let mut attributes: Vec<Self> = vec![];

        for ident in &idents {
            if matches!(&ident.unraw().to_string()[..], "self" | "Self" | "super" | "crate") {
                return Err(syn::Error::new_spanned(
                    ident,
                    "path keywords cannot be attribute names",
                ));
            }

            let attribute = Self::from_ident(ident);

            if attributes.iter().any(|other| other.name == attribute.name) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("`{}` is listed more than once", attribute.name),
                ));
            }

            attributes.push(attribute);
        }

        Ok(attributes)
    }
}
