//! Owned, lock-guarded holder of the current dataset.
//!
//! Replaces ambient shared state with an explicit store: all reads and
//! writes serialize on a single writer lock, so a second ingestion racing
//! an in-flight edit cannot interleave mid-pipeline.

use parking_lot::RwLock;

use crate::core::dataset::Dataset;
use crate::core::errors::{Error, Result};

#[derive(Debug, Default)]
pub struct SessionStore {
    dataset: RwLock<Option<Dataset>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly ingested dataset, replacing any prior one.
    pub fn replace(&self, dataset: Dataset) {
        *self.dataset.write() = Some(dataset);
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.read().is_some()
    }

    /// Read the current dataset; `Error::NoDataset` when nothing has been
    /// ingested yet.
    pub fn with_dataset<T>(&self, f: impl FnOnce(&Dataset) -> T) -> Result<T> {
        match self.dataset.read().as_ref() {
            Some(dataset) => Ok(f(dataset)),
            None => Err(Error::NoDataset),
        }
    }

    /// Mutate the current dataset under the writer lock.
    pub fn update<T>(&self, f: impl FnOnce(&mut Dataset) -> T) -> Result<T> {
        match self.dataset.write().as_mut() {
            Some(dataset) => Ok(f(dataset)),
            None => Err(Error::NoDataset),
        }
    }

    /// Clone the current dataset out of the store.
    pub fn snapshot(&self) -> Result<Dataset> {
        self.with_dataset(Dataset::clone)
    }
}
