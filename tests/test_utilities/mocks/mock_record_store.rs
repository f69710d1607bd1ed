use async_trait::async_trait;
use component_info::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock RecordStore for testing
///
/// Clones share state, so a test can keep a handle after moving the
/// store into a snapshot and change what later loads return.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    state: Arc<MockState>,
}

#[derive(Default)]
struct MockState {
    records: Mutex<Vec<ComponentRecord>>,
    should_fail: AtomicBool,
    load_count: AtomicUsize,
}

impl MockRecordStore {
    pub fn new(records: Vec<ComponentRecord>) -> Self {
        let store = Self::default();
        store.set_records(records);
        store
    }

    pub fn with_failure() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_records(&self, records: Vec<ComponentRecord>) {
        *self.state.records.lock().unwrap() = records;
    }

    pub fn set_failing(&self, should_fail: bool) {
        self.state.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn load_count(&self) -> usize {
        self.state.load_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn load_records(&self) -> Result<Vec<ComponentRecord>> {
        self.state.load_count.fetch_add(1, Ordering::SeqCst);
        if self.state.should_fail.load(Ordering::SeqCst) {
            anyhow::bail!("Mock record store failure");
        }
        Ok(self.state.records.lock().unwrap().clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// Records shared by the integration tests
pub fn sample_records() -> Vec<ComponentRecord> {
    vec![
        ComponentRecord::new("pypi://requests")
            .with_license(LicenseEntry::new(">=2.0.0", vec!["Apache-2.0".to_string()]))
            .with_vulnerability(
                VulnerabilityEntry::new("CVE-2023-32681", "<2.23.0")
                    .with_summary("Proxy-Authorization header leak"),
            ),
        ComponentRecord::new("healthy://component")
            .with_license(LicenseEntry::new(">=2.0.0", vec!["MIT".to_string()]))
            .with_vulnerability(VulnerabilityEntry::new("CVE-2020-0001", "<0.5.0")),
    ]
}
