//! Identifier inflection helpers shared by the schema builder and codegen.

use heck::{ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

/// Singularize the last word of a snake_case identifier.
///
/// `invoice_items` becomes `invoice_item`.
pub fn singularize(src: &str) -> String {
    match src.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 1, false)),
        None => pluralizer::pluralize(src, 1, false),
    }
}

/// Returns true if `src` is usable as an attribute or association name: an
/// ASCII letter or underscore followed by ASCII alphanumerics or underscores.
pub fn is_ident(src: &str) -> bool {
    let mut chars = src.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
