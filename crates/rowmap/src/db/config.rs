use rowmap_core::schema::Strictness;

use serde::{Deserialize, Serialize};

/// Defaults applied to every model that does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How undeclared attribute names are treated
    pub strictness: Strictness,

    /// Attribute holding each record's identifier
    pub primary_key: String,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key = name.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strictness: Strictness::Strict,
            primary_key: "id".to_string(),
        }
    }
}
