mod accessors;
mod model;
mod relation;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impl = self.expand_model_impl();
        let accessors = self.expand_accessors();

        wrap_in_const(quote! {
            #model_impl
            #accessors
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
