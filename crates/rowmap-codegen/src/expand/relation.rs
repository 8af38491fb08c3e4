use super::Expand;
use crate::schema::Attribute;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_relation_methods(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let vis = &self.model.vis;
        let record_field = self.model.record_field();

        let methods = self.model.has_many().map(|(ident, has_many)| {
            let name = Attribute::from_ident(ident).name;
            let ty = &has_many.ty;
            let reload_ident = &has_many.reload_ident;

            quote! {
                #vis async fn #ident(&mut self, db: &#rowmap::Db) -> #rowmap::Result<&[#ty]> {
                    self.#ident.get_or_load(db, &self.#record_field, #name).await
                }

                #vis fn #reload_ident(&mut self) {
                    self.#ident.reload();
                }
            }
        });

        let reload_all = self
            .model
            .has_many()
            .map(|(ident, _)| quote!(self.#ident.reload();));

        quote! {
            #( #methods )*

            /// Evict every cached association.
            #vis fn reload_all(&mut self) {
                self.#record_field.reload_all();
                #( #reload_all )*
            }
        }
    }
}
