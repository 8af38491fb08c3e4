use super::{Attribute, AttributeId, HasMany, Name, Strictness};

use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Declared attributes, in declaration order. Always contains the primary
    /// key.
    pub attributes: Vec<Attribute>,

    /// The attribute holding the record's identifier
    pub primary_key: AttributeId,

    /// One-to-many associations owned by this model
    pub associations: Vec<HasMany>,

    pub strictness: Strictness,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl Model {
    #[track_caller]
    pub fn attribute_by_id(&self, id: impl Into<AttributeId>) -> &Attribute {
        let id = id.into();
        assert_eq!(self.id, id.model);
        &self.attributes[id.index]
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn attribute_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.attributes.iter().map(|attribute| &attribute.name[..])
    }

    pub fn primary_key(&self) -> &Attribute {
        self.attribute_by_id(self.primary_key)
    }

    pub fn has_many(&self, name: &str) -> Option<&HasMany> {
        self.associations
            .iter()
            .find(|association| association.name == name)
    }
}

impl ModelId {
    /// Create an `AttributeId` representing the current model's attribute at
    /// index `index`.
    pub const fn attribute(self, index: usize) -> AttributeId {
        AttributeId { model: self, index }
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl From<&ModelId> for ModelId {
    fn from(src: &ModelId) -> ModelId {
        *src
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
