use super::Expand;
use crate::schema::Attribute;

use proc_macro2::{Span, TokenStream};
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_accessors(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let attribute_accessors = self.expand_attribute_accessors();
        let primary_key_accessors = self.expand_primary_key_accessors();
        let relation_methods = self.expand_relation_methods();

        quote! {
            impl #model_ident {
                /// Create an empty record of this model.
                #vis fn new(db: &#rowmap::Db) -> #rowmap::Result<Self> {
                    <Self as #rowmap::Model>::load(db.new_record(<Self as #rowmap::Model>::NAME)?)
                }

                #primary_key_accessors
                #attribute_accessors
                #relation_methods
            }
        }
    }

    fn expand_attribute_accessors(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let vis = &self.model.vis;
        let record_field = self.model.record_field();

        self.model
            .accessors()
            .into_iter()
            .chain(self.explicit_primary_key().as_ref())
            .map(|attribute| {
                let Attribute {
                    name,
                    getter,
                    setter,
                } = attribute;

                quote! {
                    #vis fn #getter(&self) -> #rowmap::Option<&#rowmap::Value> {
                        self.#record_field.get_declared(#name)
                    }

                    #vis fn #setter(&mut self, value: impl #rowmap::Into<#rowmap::Value>) {
                        self.#record_field.set_declared(#name, value.into());
                    }
                }
            })
            .collect()
    }

    /// `id` accessors for models that leave the primary key to the `Db`
    /// configuration. They address whichever attribute ends up as the key.
    fn expand_primary_key_accessors(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let vis = &self.model.vis;
        let record_field = self.model.record_field();

        if self.model.attr.primary_key.is_some() || self.is_listed("id") {
            return quote!();
        }

        quote! {
            #vis fn id(&self) -> #rowmap::Option<&#rowmap::Value> {
                self.#record_field.get_primary_key()
            }

            #vis fn set_id(&mut self, value: impl #rowmap::Into<#rowmap::Value>) {
                self.#record_field.set_primary_key(value.into());
            }
        }
    }

    /// An explicitly named primary key that no `#[schema]` lists.
    pub(super) fn explicit_primary_key(&self) -> Option<Attribute> {
        let lit = self.model.attr.primary_key.as_ref()?;
        let name = lit.value();

        if self.is_listed(&name) {
            return None;
        }

        Some(Attribute::from_name(&name, Span::call_site()))
    }

    fn is_listed(&self, name: &str) -> bool {
        self.model
            .schema
            .iter()
            .flatten()
            .any(|attribute| attribute.name == name)
    }
}
