use rowmap::{stmt::Filter, Error, MemoryStore, Result, Row, RowStore};
use rowmap_core::schema::Model;

use async_trait::async_trait;
use std::{
    io,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

/// A store wrapper that logs every fetch and can be told to fail.
#[derive(Debug)]
pub struct LoggingStore {
    /// The store that actually holds rows
    inner: Arc<MemoryStore>,

    /// Log of every fetch issued through this store
    ops_log: Arc<Mutex<Vec<StoreOp>>>,

    /// Number of upcoming fetches that fail before reaching `inner`
    failures: Arc<AtomicUsize>,
}

#[derive(Debug, Clone)]
pub struct StoreOp {
    /// Model the rows were requested for
    pub model: String,

    pub filter: Filter,

    /// Rows returned, or `None` if the fetch failed
    pub rows: Option<usize>,
}

impl LoggingStore {
    pub fn new(inner: Arc<MemoryStore>) -> Self {
        Self {
            inner,
            ops_log: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<StoreOp>>> {
        self.ops_log.clone()
    }

    /// Get a handle for injecting failures
    pub fn failures_handle(&self) -> Arc<AtomicUsize> {
        self.failures.clone()
    }

    fn take_failure(&self) -> bool {
        self.failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl RowStore for LoggingStore {
    async fn fetch(&self, model: &Model, filter: &Filter) -> Result<Vec<Row>> {
        let res = if self.take_failure() {
            Err(Error::store_failure(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )))
        } else {
            self.inner.fetch(model, filter).await
        };

        self.ops_log.lock().unwrap().push(StoreOp {
            model: model.name.to_string(),
            filter: filter.clone(),
            rows: res.as_ref().ok().map(Vec::len),
        });

        res
    }
}
