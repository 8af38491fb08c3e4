mod attribute;
pub(crate) use attribute::Attribute;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldTy};

mod has_many;
pub(crate) use has_many::HasMany;

mod model;
pub(crate) use model::Model;

mod model_attr;
pub(crate) use model_attr::ModelAttr;
