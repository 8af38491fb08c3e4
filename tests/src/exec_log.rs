use crate::StoreOp;

use std::sync::{Arc, Mutex};

/// A wrapper around the fetch log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<StoreOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<StoreOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged fetches
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count fetches issued for `model`
    pub fn fetches_of(&self, model: &str) -> usize {
        self.count(|op| op.model == model)
    }

    /// Count fetches matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&StoreOp) -> bool,
    {
        self.ops.lock().unwrap().iter().filter(|op| predicate(op)).count()
    }

    /// The most recent fetch
    #[track_caller]
    pub fn last(&self) -> StoreOp {
        self.ops
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no fetch has been logged")
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
