use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{DnsRecord, DnsRecordType, RecordSpec, Zone};

/// Raw API error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code (provider-specific format).
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra context attached when mapping raw API errors (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record ID (for `RecordNotFound` and similar).
    pub record_id: Option<String>,
    /// Zone name (for `ZoneNotFound` and similar).
    pub zone: Option<String>,
}

/// Maps raw provider API errors to the unified error type (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: parse error.
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: network error.
    fn network_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::NetworkError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS provider seam.
///
/// The reconciler only depends on this trait, so it can be exercised against
/// an in-memory implementation in tests. Record names are relative to the
/// zone apex (`@` or a subdomain label); implementations expand them to
/// fully-qualified names for the wire and convert responses back.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Look up a zone by exact apex name. Returns `Ok(None)` when the
    /// account holds no zone of that name; the first match wins if the API
    /// returns several.
    async fn find_zone(&self, domain: &str) -> Result<Option<Zone>>;

    /// List records filtered by type and relative name.
    async fn list_records(
        &self,
        zone: &Zone,
        record_type: DnsRecordType,
        name: &str,
    ) -> Result<Vec<DnsRecord>>;

    /// Fetch a single record's full content.
    async fn get_record(&self, zone: &Zone, record_id: &str) -> Result<DnsRecord>;

    /// Create a record.
    async fn create_record(&self, zone: &Zone, spec: &RecordSpec) -> Result<DnsRecord>;

    /// Replace an existing record in place.
    async fn update_record(
        &self,
        zone: &Zone,
        record_id: &str,
        spec: &RecordSpec,
    ) -> Result<DnsRecord>;

    /// Delete a record.
    async fn delete_record(&self, zone: &Zone, record_id: &str) -> Result<()>;
}
