use super::ModelId;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Attribute {
    /// Uniquely identifies the attribute within the schema
    pub id: AttributeId,

    /// The attribute name, as declared
    pub name: String,

    /// True if this attribute holds the model's identifier
    pub primary_key: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct AttributeId {
    pub model: ModelId,
    pub index: usize,
}

impl fmt::Debug for AttributeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "AttributeId({}/{})", self.model.0, self.index)
    }
}
