use serde::{Deserialize, Serialize};

/// How a model treats attribute names it did not declare.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Undeclared names fail with an unknown attribute error.
    #[default]
    Strict,

    /// Undeclared names assigned with `set` (or present in a materialized
    /// row) are kept in a per-record side store outside the schema. Reading
    /// an undeclared name that was never assigned still fails.
    Lenient,
}

impl Strictness {
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }

    pub fn is_lenient(self) -> bool {
        matches!(self, Self::Lenient)
    }
}
