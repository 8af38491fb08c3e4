mod builder;
pub use builder::Builder;

mod config;
pub use config::Config;

use crate::{Error, Model, Record, Result, RowStore};

use rowmap_core::{
    stmt::{Filter, Row},
    Schema,
};

use std::sync::Arc;

/// Shared state between all `Db` clones.
struct Shared {
    schema: Arc<Schema>,
    store: Box<dyn RowStore>,
}

/// A built schema paired with the row store that serves it. Cloning is
/// cheap; clones share both.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(schema: Schema, store: Box<dyn RowStore>) -> Db {
        Db {
            shared: Arc::new(Shared {
                schema: Arc::new(schema),
                store,
            }),
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.shared.schema
    }

    pub fn store(&self) -> &dyn RowStore {
        &*self.shared.store
    }

    /// Create an empty record of the model named `model`.
    pub fn new_record(&self, model: &str) -> Result<Record> {
        let schema = self.schema();
        let Some(model) = schema.model_by_name(model) else {
            return Err(Error::unknown_model(model));
        };

        Ok(Record::new(schema.clone(), model.id))
    }

    /// Turn a raw row into a record of the model named `model`.
    pub fn materialize(&self, model: &str, row: Row) -> Result<Record> {
        let schema = self.schema();
        let Some(model) = schema.model_by_name(model) else {
            return Err(Error::unknown_model(model));
        };

        self.store().materialize(schema, model, row)
    }

    /// Fetch every record of `model` matching `filter`, in store order.
    pub async fn filter_records(&self, model: &str, filter: &Filter) -> Result<Vec<Record>> {
        let schema = self.schema();
        let Some(model) = schema.model_by_name(model) else {
            return Err(Error::unknown_model(model));
        };

        tracing::debug!(model = %model.name, filter = ?filter, "fetching records");

        self.store()
            .fetch(model, filter)
            .await?
            .into_iter()
            .map(|row| self.store().materialize(schema, model, row))
            .collect()
    }

    /// Typed variant of [`filter_records`](Self::filter_records).
    pub async fn filter<M: Model>(&self, filter: &Filter) -> Result<Vec<M>> {
        self.filter_records(M::NAME, filter)
            .await?
            .into_iter()
            .map(M::load)
            .collect()
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("schema", &self.shared.schema)
            .field("store", &self.shared.store)
            .finish()
    }
}
