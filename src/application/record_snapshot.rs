use crate::component_resolution::domain::ComponentRecord;
use crate::ports::outbound::RecordStore;
use crate::shared::Result;
use std::sync::{Arc, RwLock};

/// RecordSnapshot - the record set requests are resolved against
///
/// Records are loaded once at startup and shared read-only between
/// requests. A reload builds a complete new set and swaps it in, so a
/// request always sees either the old or the new set in full. A failed
/// reload leaves the current set in place.
///
/// With `reload_per_request` set, every request reads the store afresh
/// instead, without touching the shared set.
pub struct RecordSnapshot<S> {
    store: S,
    records: RwLock<Arc<Vec<ComponentRecord>>>,
    reload_per_request: bool,
}

impl<S: RecordStore> RecordSnapshot<S> {
    /// Loads the initial record set from `store`.
    pub async fn load(store: S, reload_per_request: bool) -> Result<Self> {
        let records = store.load_records().await?;
        tracing::info!(
            store = %store.describe(),
            records = records.len(),
            reload_per_request,
            "Loaded record store"
        );

        Ok(Self {
            store,
            records: RwLock::new(Arc::new(records)),
            reload_per_request,
        })
    }

    pub fn current(&self) -> Arc<Vec<ComponentRecord>> {
        match self.records.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Re-reads the store and swaps the new set in, returning its size.
    ///
    /// # Errors
    /// Returns the store error; the current set is kept.
    pub async fn reload(&self) -> Result<usize> {
        let records = self.store.load_records().await?;
        let count = records.len();
        let fresh = Arc::new(records);

        match self.records.write() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }

        tracing::info!(store = %self.store.describe(), records = count, "Reloaded record store");
        Ok(count)
    }

    /// Returns the record set a request should be resolved against.
    pub async fn for_request(&self) -> Result<Arc<Vec<ComponentRecord>>> {
        if self.reload_per_request {
            let records = self.store.load_records().await?;
            return Ok(Arc::new(records));
        }
        Ok(self.current())
    }
}
