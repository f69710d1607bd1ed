/// Filesystem adapters for reading the record store
mod json_record_store;

pub use json_record_store::JsonFileRecordStore;
