use super::Expand;
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;
        let record_field = self.model.record_field();
        let name = self.model.name();
        let declare = self.expand_declare_body();
        let load_fields = self.expand_load_fields();
        let declared = self.expand_declared_names();

        quote! {
            impl #rowmap::Model for #model_ident {
                const NAME: &'static str = #name;

                fn declare(model: &mut #rowmap::ModelBuilder) {
                    #declare
                }

                fn load(record: #rowmap::Record) -> #rowmap::Result<Self> {
                    record.ensure_model(<Self as #rowmap::Model>::NAME)?;
                    record.ensure_declared(&[#( #declared ),*])?;

                    Ok(Self {
                        #load_fields
                    })
                }

                fn record(&self) -> &#rowmap::Record {
                    &self.#record_field
                }

                fn record_mut(&mut self) -> &mut #rowmap::Record {
                    &mut self.#record_field
                }

                fn into_record(self) -> #rowmap::Record {
                    self.#record_field
                }
            }
        }
    }

    fn expand_declare_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        let define_schema = self.model.schema.iter().map(|attributes| {
            let names = attributes.iter().map(|attribute| &attribute.name);
            quote!(model.define_schema([#( #names ),*]);)
        });

        let primary_key = self
            .model
            .attr
            .primary_key
            .as_ref()
            .map(|name| quote!(model.primary_key(#name);));

        let strictness = self.model.attr.lenient.map(|lenient| {
            if lenient {
                quote!(model.strictness(#rowmap::Strictness::Lenient);)
            } else {
                quote!(model.strictness(#rowmap::Strictness::Strict);)
            }
        });

        let has_many = self.model.has_many().map(|(ident, has_many)| {
            let name = crate::schema::Attribute::from_ident(ident).name;
            let ty = &has_many.ty;
            let foreign_key = has_many
                .foreign_key
                .as_ref()
                .map(|foreign_key| quote!(.foreign_key(#foreign_key)));

            quote! {
                model
                    .has_many(#name)
                    .target(<#ty as #rowmap::Model>::NAME)
                    #foreign_key;
            }
        });

        quote! {
            #( #define_schema )*
            #primary_key
            #strictness
            #( #has_many )*
        }
    }

    /// Names the generated getters and setters address without checking.
    fn expand_declared_names(&self) -> Vec<String> {
        self.model
            .accessors()
            .into_iter()
            .chain(self.explicit_primary_key().as_ref())
            .map(|attribute| attribute.name.clone())
            .collect()
    }

    fn expand_load_fields(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;

                match &field.ty {
                    FieldTy::Record => quote!(#ident: record,),
                    FieldTy::HasMany(_) => quote!(#ident: #rowmap::HasMany::default(),),
                    FieldTy::Other => quote!(#ident: #rowmap::Default::default(),),
                }
            })
            .collect()
    }
}
