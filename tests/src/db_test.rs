use crate::{ExecLog, LoggingStore};

use rowmap::{db, Db, MemoryStore};

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// A `Db` backed by an in-memory store, with every fetch logged.
pub struct DbTest {
    pub db: Db,

    /// Rows served to `db`; writes here are invisible to loaded caches
    pub rows: Arc<MemoryStore>,

    log: ExecLog,

    failures: Arc<AtomicUsize>,
}

impl DbTest {
    #[track_caller]
    pub fn setup(builder: &db::Builder) -> DbTest {
        let rows = Arc::new(MemoryStore::new());
        let store = LoggingStore::new(rows.clone());
        let log = ExecLog::new(store.ops_log_handle());
        let failures = store.failures_handle();

        let db = match builder.build(store) {
            Ok(db) => db,
            Err(err) => panic!("failed to build test db: {err}"),
        };

        DbTest {
            db,
            rows,
            log,
            failures,
        }
    }

    pub fn log(&self) -> &ExecLog {
        &self.log
    }

    /// Make the next `n` fetches fail with a store failure.
    pub fn fail_next_fetches(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }
}
