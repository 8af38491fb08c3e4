use super::{Model, ModelId, Name, Schema};

/// A resolved one-to-many association.
#[derive(Debug, Clone)]
pub struct HasMany {
    /// Association name; also the name of the generated accessor
    pub name: String,

    /// Associated model
    pub target: ModelId,

    /// Attribute on the target model holding the owner's primary key
    pub foreign_key: String,

    /// Singular item name
    pub singular: Name,
}

impl HasMany {
    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }
}
