use crate::{RowStore, Result};

use async_trait::async_trait;
use indexmap::IndexMap;
use rowmap_core::{
    schema::{Model, Name},
    stmt::{Filter, Row},
};

use std::sync::{PoisonError, RwLock};

/// A [`RowStore`] keeping rows in memory, per model, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<IndexMap<Name, Vec<Row>>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn insert(&self, model: &str, row: Row) {
        self.extend(model, [row]);
    }

    pub fn extend(&self, model: &str, rows: impl IntoIterator<Item = Row>) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.entry(Name::new(model)).or_default().extend(rows);
    }

    /// Remove every row of `model` matching `filter`, returning how many were
    /// removed.
    pub fn delete(&self, model: &str, filter: &Filter) -> usize {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let Some(rows) = tables.get_mut(&Name::new(model)) else {
            return 0;
        };

        let before = rows.len();
        rows.retain(|row| !filter.matches(row));
        before - rows.len()
    }

    pub fn len(&self, model: &str) -> usize {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.get(&Name::new(model)).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, model: &str) -> bool {
        self.len(model) == 0
    }
}

#[async_trait]
impl RowStore for MemoryStore {
    async fn fetch(&self, model: &Model, filter: &Filter) -> Result<Vec<Row>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);

        Ok(tables
            .get(&model.name)
            .map(|rows| {
                rows.iter()
                    .filter(|row| filter.matches(row))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
