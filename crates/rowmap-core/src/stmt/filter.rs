use super::{Row, Value};

/// Equality filter on a single attribute: the only predicate a row store has
/// to support.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Attribute compared against `value`
    pub attribute: String,

    pub value: Value,
}

impl Filter {
    pub fn eq(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Returns true if the row holds `value` under `attribute`. A row missing
    /// the attribute never matches, and neither does a null.
    pub fn matches(&self, row: &Row) -> bool {
        match row.get(&self.attribute) {
            Some(Value::Null) | None => false,
            Some(value) => *value == self.value,
        }
    }
}
