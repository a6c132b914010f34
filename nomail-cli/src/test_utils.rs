//! Test helpers.
//!
//! In-memory mock implementations behind the provider and confirmation
//! seams, plus small factory helpers.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use nomail_provider::{
    DnsProvider, DnsRecord, DnsRecordType, ProviderError, RecordSpec, Result, Zone,
};
use tokio::sync::RwLock;

use crate::audit::AuditLog;
use crate::confirm::Confirm;

// ===== MockDnsProvider =====

/// In-memory provider: a fixed zone set and a per-zone record store, with a
/// mutation counter so tests can assert "no mutating call was issued".
pub struct MockDnsProvider {
    zones: Vec<Zone>,
    records: RwLock<HashMap<String, Vec<DnsRecord>>>,
    next_id: AtomicUsize,
    mutations: AtomicUsize,
    record_calls: AtomicUsize,
    fail_mx_listing: bool,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            records: RwLock::new(HashMap::new()),
            next_id: AtomicUsize::new(1),
            mutations: AtomicUsize::new(0),
            record_calls: AtomicUsize::new(0),
            fail_mx_listing: false,
        }
    }

    /// Register a zone for `domain` (id `zone-<domain>`).
    #[must_use]
    pub fn with_zone(mut self, domain: &str) -> Self {
        self.zones.push(Zone {
            id: format!("zone-{domain}"),
            name: domain.to_string(),
        });
        self
    }

    /// Make MX record listing fail with an API error.
    #[must_use]
    pub fn with_failing_mx_listing(mut self) -> Self {
        self.fail_mx_listing = true;
        self
    }

    fn zone_id(&self, domain: &str) -> String {
        format!("zone-{domain}")
    }

    /// Seed a pre-existing record, bypassing the mutation counter.
    pub async fn seed_record(
        &self,
        domain: &str,
        record_type: DnsRecordType,
        name: &str,
        content: &str,
        priority: Option<u16>,
    ) {
        let id = format!("rec-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = DnsRecord {
            id,
            record_type,
            name: name.to_string(),
            content: content.to_string(),
            priority,
            ttl: 3600,
        };
        self.records
            .write()
            .await
            .entry(self.zone_id(domain))
            .or_default()
            .push(record);
    }

    /// All records currently stored for `domain`.
    pub async fn records(&self, domain: &str) -> Vec<DnsRecord> {
        self.records
            .read()
            .await
            .get(&self.zone_id(domain))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of mutating calls (create/update/delete) issued so far.
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    /// Number of record-level calls (list/get/create/update/delete) issued.
    pub fn record_call_count(&self) -> usize {
        self.record_calls.load(Ordering::SeqCst)
    }

    fn not_found(&self, record_id: &str) -> ProviderError {
        ProviderError::RecordNotFound {
            provider: "mock".to_string(),
            record_id: record_id.to_string(),
            raw_message: None,
        }
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn find_zone(&self, domain: &str) -> Result<Option<Zone>> {
        Ok(self.zones.iter().find(|z| z.name == domain).cloned())
    }

    async fn list_records(
        &self,
        zone: &Zone,
        record_type: DnsRecordType,
        name: &str,
    ) -> Result<Vec<DnsRecord>> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mx_listing && record_type == DnsRecordType::Mx {
            return Err(ProviderError::Unknown {
                provider: "mock".to_string(),
                raw_code: Some("500".to_string()),
                raw_message: "injected failure".to_string(),
            });
        }

        Ok(self
            .records
            .read()
            .await
            .get(&zone.id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.record_type == record_type && r.name == name)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get_record(&self, zone: &Zone, record_id: &str) -> Result<DnsRecord> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .read()
            .await
            .get(&zone.id)
            .and_then(|records| records.iter().find(|r| r.id == record_id).cloned())
            .ok_or_else(|| self.not_found(record_id))
    }

    async fn create_record(&self, zone: &Zone, spec: &RecordSpec) -> Result<DnsRecord> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        self.mutations.fetch_add(1, Ordering::SeqCst);

        let id = format!("rec-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = DnsRecord {
            id,
            record_type: spec.data.record_type(),
            name: spec.name.clone(),
            content: spec.data.content().to_string(),
            priority: spec.data.priority(),
            ttl: spec.ttl,
        };
        self.records
            .write()
            .await
            .entry(zone.id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn update_record(
        &self,
        zone: &Zone,
        record_id: &str,
        spec: &RecordSpec,
    ) -> Result<DnsRecord> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        self.mutations.fetch_add(1, Ordering::SeqCst);

        let mut store = self.records.write().await;
        let records = store.get_mut(&zone.id).ok_or_else(|| self.not_found(record_id))?;
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| self.not_found(record_id))?;

        record.record_type = spec.data.record_type();
        record.name = spec.name.clone();
        record.content = spec.data.content().to_string();
        record.priority = spec.data.priority();
        record.ttl = spec.ttl;
        Ok(record.clone())
    }

    async fn delete_record(&self, zone: &Zone, record_id: &str) -> Result<()> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        self.mutations.fetch_add(1, Ordering::SeqCst);

        let mut store = self.records.write().await;
        let records = store.get_mut(&zone.id).ok_or_else(|| self.not_found(record_id))?;
        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Err(self.not_found(record_id));
        }
        Ok(())
    }
}

// ===== ScriptedConfirm =====

/// Confirmation stub: pops scripted answers in order, falling back to a
/// default. Prompts are recorded for assertion.
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    default: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn new(answers: &[bool], default: bool) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            default,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Accept every prompt.
    pub fn yes() -> Self {
        Self::new(&[], true)
    }

    /// Decline every prompt.
    pub fn no() -> Self {
        Self::new(&[], false)
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut a| a.pop_front())
            .unwrap_or(self.default)
    }
}

// ===== Audit helpers =====

/// Audit log backed by a temp directory; keep the directory alive for the
/// duration of the test.
pub fn temp_audit() -> (AuditLog, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let audit = AuditLog::create(&dir.path().join("audit.log")).expect("audit log");
    (audit, dir)
}
