/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach external systems such as the record store.
pub mod record_store;

pub use record_store::RecordStore;
