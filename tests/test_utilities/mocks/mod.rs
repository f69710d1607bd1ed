/// Mock implementations for testing
mod mock_record_store;

pub use mock_record_store::{sample_records, MockRecordStore};
