mod attribute;
pub use attribute::{Attribute, AttributeId};

mod builder;
pub use builder::{Builder, HasManyBuilder, ModelBuilder};

mod has_many;
pub use has_many::HasMany;

mod model;
pub use model::{Model, ModelId};

mod name;
pub use name::Name;

mod strictness;
pub use strictness::Strictness;

mod verify;

use indexmap::IndexMap;

/// The set of record types known to a `Db`, built once and read-only
/// afterwards.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn get_model(&self, id: impl Into<ModelId>) -> Option<&Model> {
        self.models.get(&id.into())
    }

    /// Find a model by name. `OrderItem` and `order_item` name the same
    /// model.
    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        let name = Name::new(name);
        self.models().find(|model| model.name == name)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }
}
