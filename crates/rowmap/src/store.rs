mod memory;
pub use memory::MemoryStore;

use crate::{Record, Result};

use async_trait::async_trait;
use rowmap_core::{
    schema::Model,
    stmt::{Filter, Row},
    Schema,
};

use std::{fmt::Debug, sync::Arc};

/// The persistence collaborator that supplies raw rows.
///
/// Stores report their own failures with [`Error::store_failure`]; callers
/// receive them unchanged.
///
/// [`Error::store_failure`]: crate::Error::store_failure
#[async_trait]
pub trait RowStore: Debug + Send + Sync + 'static {
    /// Fetch every row of `model` whose `filter.attribute` equals
    /// `filter.value`. Order is up to the store.
    async fn fetch(&self, model: &Model, filter: &Filter) -> Result<Vec<Row>>;

    /// Turn a fetched row into a record of `model`.
    fn materialize(&self, schema: &Arc<Schema>, model: &Model, row: Row) -> Result<Record> {
        Record::from_row(schema.clone(), model.id, row)
    }
}

#[async_trait]
impl<S: RowStore + ?Sized> RowStore for Arc<S> {
    async fn fetch(&self, model: &Model, filter: &Filter) -> Result<Vec<Row>> {
        (**self).fetch(model, filter).await
    }

    fn materialize(&self, schema: &Arc<Schema>, model: &Model, row: Row) -> Result<Record> {
        (**self).materialize(schema, model, row)
    }
}
