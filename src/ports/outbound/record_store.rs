use crate::component_resolution::domain::ComponentRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// RecordStore port for loading component records
///
/// This port abstracts the storage holding license and vulnerability
/// records (e.g., a JSON file on disk).
///
/// Implementations must be `Send + Sync` so a store can be shared by
/// concurrent requests.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Loads the full set of records
    ///
    /// # Returns
    /// Every record in the store, in storage order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The store does not exist or cannot be read
    /// - The stored data cannot be decoded
    async fn load_records(&self) -> Result<Vec<ComponentRecord>>;

    /// Human readable location of the store, used in logs
    fn describe(&self) -> String;
}
