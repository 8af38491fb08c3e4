use super::{Config, Db};
use crate::{Model, Result, RowStore};

use rowmap_core::{
    schema::{self, ModelBuilder, Strictness},
    Schema,
};

/// Registers models and builds a [`Db`].
///
/// Every model must be registered here before any of its records exist:
/// records are only created through the resulting `Db`, and the schema it
/// holds is never modified after `build`.
#[derive(Debug, Default)]
pub struct Builder {
    core: schema::Builder,
}

impl Builder {
    /// Register a model type, running its generated declarations.
    pub fn register<T: Model>(&mut self) -> &mut Self {
        T::declare(self.core.model(T::NAME));
        self
    }

    /// Declare a model by hand. Returns the same builder for repeated calls
    /// with the same name, so declarations accumulate.
    pub fn model(&mut self, name: &str) -> &mut ModelBuilder {
        self.core.model(name)
    }

    /// Default strictness for models that do not choose one.
    pub fn strictness(&mut self, strictness: Strictness) -> &mut Self {
        self.core.strictness(strictness);
        self
    }

    pub fn config(&mut self, config: &Config) -> &mut Self {
        self.core
            .strictness(config.strictness)
            .primary_key(&config.primary_key);
        self
    }

    pub fn build_schema(&self) -> Result<Schema> {
        self.core.build()
    }

    pub fn build(&self, store: impl RowStore) -> Result<Db> {
        let schema = self.build_schema()?;

        tracing::debug!(models = schema.models.len(), "schema built");

        Ok(Db::new(schema, Box::new(store)))
    }
}
