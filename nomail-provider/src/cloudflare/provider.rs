//! Cloudflare `DnsProvider` trait implementation.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::name::{full_name_to_relative, relative_to_full_name};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{DnsRecord, DnsRecordType, RecordSpec, Zone};

use super::{CloudflareDnsRecord, CloudflareProvider, CloudflareZone};

/// Create/update request body shared by POST and PUT.
#[derive(Serialize)]
struct RecordBody {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: String,
    content: String,
    ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u16>,
}

impl CloudflareProvider {
    /// Convert a Cloudflare record to a [`DnsRecord`], relativizing the name.
    fn cf_record_to_dns_record(
        &self,
        cf_record: CloudflareDnsRecord,
        zone_name: &str,
    ) -> Result<DnsRecord> {
        let record_type = DnsRecordType::parse(&cf_record.record_type).ok_or_else(|| {
            self.parse_error(format!(
                "unexpected record type in response: {}",
                cf_record.record_type
            ))
        })?;

        Ok(DnsRecord {
            id: cf_record.id,
            record_type,
            name: full_name_to_relative(&cf_record.name, zone_name),
            content: cf_record.content,
            priority: cf_record.priority,
            ttl: cf_record.ttl,
        })
    }

    fn record_body(&self, zone: &Zone, spec: &RecordSpec) -> RecordBody {
        RecordBody {
            record_type: spec.data.record_type().as_str(),
            name: relative_to_full_name(&spec.name, &zone.name),
            content: spec.data.content().to_string(),
            ttl: spec.ttl,
            priority: spec.data.priority(),
        }
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn find_zone(&self, domain: &str) -> Result<Option<Zone>> {
        let path = format!("/zones?name={}", urlencoding::encode(domain));
        let context = ErrorContext {
            zone: Some(domain.to_string()),
            ..ErrorContext::default()
        };
        let zones: Vec<CloudflareZone> = self.get(&path, context).await?;

        // First match wins; the name filter is exact so duplicates would be
        // an account anomaly.
        Ok(zones.into_iter().next().map(|z| Zone {
            id: z.id,
            name: z.name,
        }))
    }

    async fn list_records(
        &self,
        zone: &Zone,
        record_type: DnsRecordType,
        name: &str,
    ) -> Result<Vec<DnsRecord>> {
        let full_name = relative_to_full_name(name, &zone.name);
        let path = format!(
            "/zones/{}/dns_records?type={}&name={}",
            zone.id,
            record_type.as_str(),
            urlencoding::encode(&full_name)
        );
        let context = ErrorContext {
            zone: Some(zone.name.clone()),
            ..ErrorContext::default()
        };

        let cf_records: Vec<CloudflareDnsRecord> = self.get(&path, context).await?;
        cf_records
            .into_iter()
            .map(|r| self.cf_record_to_dns_record(r, &zone.name))
            .collect()
    }

    async fn get_record(&self, zone: &Zone, record_id: &str) -> Result<DnsRecord> {
        let path = format!("/zones/{}/dns_records/{}", zone.id, record_id);
        let context = ErrorContext {
            record_id: Some(record_id.to_string()),
            zone: Some(zone.name.clone()),
        };

        let cf_record: CloudflareDnsRecord = self.get(&path, context).await?;
        self.cf_record_to_dns_record(cf_record, &zone.name)
    }

    async fn create_record(&self, zone: &Zone, spec: &RecordSpec) -> Result<DnsRecord> {
        let path = format!("/zones/{}/dns_records", zone.id);
        let body = self.record_body(zone, spec);
        let context = ErrorContext {
            zone: Some(zone.name.clone()),
            ..ErrorContext::default()
        };

        let cf_record: CloudflareDnsRecord = self.post(&path, &body, context).await?;
        self.cf_record_to_dns_record(cf_record, &zone.name)
    }

    async fn update_record(
        &self,
        zone: &Zone,
        record_id: &str,
        spec: &RecordSpec,
    ) -> Result<DnsRecord> {
        let path = format!("/zones/{}/dns_records/{}", zone.id, record_id);
        let body = self.record_body(zone, spec);
        let context = ErrorContext {
            record_id: Some(record_id.to_string()),
            zone: Some(zone.name.clone()),
        };

        let cf_record: CloudflareDnsRecord = self.put(&path, &body, context).await?;
        self.cf_record_to_dns_record(cf_record, &zone.name)
    }

    async fn delete_record(&self, zone: &Zone, record_id: &str) -> Result<()> {
        let path = format!("/zones/{}/dns_records/{}", zone.id, record_id);
        let context = ErrorContext {
            record_id: Some(record_id.to_string()),
            zone: Some(zone.name.clone()),
        };
        self.delete(&path, context).await
    }
}
