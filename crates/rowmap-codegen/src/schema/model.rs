use super::{Attribute, ErrorSet, Field, FieldTy, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Struct visibility
    pub(crate) vis: syn::Visibility,

    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Struct-level options
    pub(crate) attr: ModelAttr,

    /// One entry per `#[schema(...)]` attribute, in source order
    pub(crate) schema: Vec<Vec<Attribute>>,

    /// Every struct field
    pub(crate) fields: Vec<Field>,

    /// Index of the `#[record]` field
    pub(crate) record: usize,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model types cannot be generic",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut attr = ModelAttr::default();
        let mut schema = vec![];

        for a in &ast.attrs {
            let res = if a.path().is_ident("model") {
                attr.populate_from_ast(a)
            } else if a.path().is_ident("schema") {
                Attribute::list_from_ast(a).map(|attributes| schema.push(attributes))
            } else {
                continue;
            };

            if let Err(err) = res {
                errs.push(err);
            }
        }

        if schema.is_empty() {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "model requires at least one `#[schema(...)]` attribute",
            ));
        }

        let mut fields = vec![];
        let mut record = None;

        for (index, node) in node.named.iter().enumerate() {
            let field = match Field::from_ast(node) {
                Ok(field) => field,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            if let FieldTy::Record = field.ty {
                if record.replace(index).is_some() {
                    errs.push(syn::Error::new_spanned(
                        node,
                        "only one field may be marked `#[record]`",
                    ));
                }
            }

            if let FieldTy::HasMany(_) = field.ty {
                let name = Attribute::from_ident(&field.ident).name;

                if schema.iter().flatten().any(|a: &Attribute| a.name == name) {
                    errs.push(syn::Error::new_spanned(
                        node,
                        format!("association `{name}` has the same name as an attribute"),
                    ));
                }
            }

            fields.push(field);
        }

        if record.is_none() {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "model requires a field marked `#[record]`",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            attr,
            schema,
            fields,
            record: record.unwrap_or_default(),
        })
    }

    pub(crate) fn record_field(&self) -> &syn::Ident {
        &self.fields[self.record].ident
    }

    /// Name the model registers under
    pub(crate) fn name(&self) -> String {
        match &self.attr.name {
            Some(name) => name.value(),
            None => self.ident.to_string(),
        }
    }

    /// Every declared attribute once, in first-declared order, followed by
    /// the primary key when it is set explicitly and not listed.
    pub(crate) fn accessors(&self) -> Vec<&Attribute> {
        let mut accessors: Vec<&Attribute> = vec![];

        for attribute in self.schema.iter().flatten() {
            if !accessors.iter().any(|a| a.name == attribute.name) {
                accessors.push(attribute);
            }
        }

        accessors
    }

    pub(crate) fn has_many(&self) -> impl Iterator<Item = (&syn::Ident, &super::HasMany)> {
        self.fields.iter().filter_map(|field| match &field.ty {
            FieldTy::HasMany(has_many) => Some((&field.ident, has_many)),
            _ => None,
        })
    }
}
