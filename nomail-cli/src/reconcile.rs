//! Per-domain record reconciliation.
//!
//! Each record kind follows the same shape: read current state, compare to
//! the desired policy, then act or prompt. Anything that would overwrite or
//! delete existing data asks first; creating into empty space does not.

use nomail_provider::{DnsProvider, DnsRecordType, ProviderError, Zone};

use crate::audit::{AuditAction, AuditLog};
use crate::confirm::Confirm;
use crate::policy::{
    DMARC_CONTENT, RecordKind, SPF_CONTENT, dmarc_spec, is_null_mx, is_spf_record, null_mx_spec,
    spf_spec, txt_content_matches,
};

/// Result of one record-kind reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A record was created or updated (or conflicting records deleted).
    Applied,
    /// The desired state was already in place; no mutation issued.
    AlreadyCorrect,
    /// The user declined the overwrite prompt; nothing was changed.
    Skipped,
}

pub struct Reconciler<'a> {
    provider: &'a dyn DnsProvider,
    confirm: &'a dyn Confirm,
}

impl<'a> Reconciler<'a> {
    pub fn new(provider: &'a dyn DnsProvider, confirm: &'a dyn Confirm) -> Self {
        Self { provider, confirm }
    }

    /// Reconcile one record kind.
    pub async fn reconcile(
        &self,
        kind: RecordKind,
        zone: &Zone,
        audit: &mut AuditLog,
    ) -> Result<RecordOutcome, ProviderError> {
        match kind {
            RecordKind::Spf => self.reconcile_spf(zone, audit).await,
            RecordKind::NullMx => self.reconcile_null_mx(zone, audit).await,
            RecordKind::Dmarc => self.reconcile_dmarc(zone, audit).await,
        }
    }

    /// SPF: a single `v=spf1 -all` TXT at the apex.
    async fn reconcile_spf(
        &self,
        zone: &Zone,
        audit: &mut AuditLog,
    ) -> Result<RecordOutcome, ProviderError> {
        let tag = RecordKind::Spf.tag();
        let records = self
            .provider
            .list_records(zone, DnsRecordType::Txt, "@")
            .await?;

        if let Some(existing) = records
            .iter()
            .find(|r| txt_content_matches(&r.content, SPF_CONTENT))
        {
            audit.record(
                &zone.name,
                tag,
                AuditAction::AlreadyCorrect,
                Some(&existing.content),
            );
            return Ok(RecordOutcome::AlreadyCorrect);
        }

        // Prefer overwriting an existing SPF policy over an unrelated TXT
        // record sharing the apex name.
        let target = records
            .iter()
            .find(|r| is_spf_record(&r.content))
            .or_else(|| records.first());

        let Some(target) = target else {
            self.provider.create_record(zone, &spf_spec()).await?;
            audit.record(&zone.name, tag, AuditAction::Created, Some(SPF_CONTENT));
            return Ok(RecordOutcome::Applied);
        };

        let prompt = format!(
            "{}: apex TXT record is '{}'; overwrite with '{}'?",
            zone.name, target.content, SPF_CONTENT
        );
        if !self.confirm.confirm(&prompt) {
            audit.record(&zone.name, tag, AuditAction::Skipped, Some(&target.content));
            return Ok(RecordOutcome::Skipped);
        }

        self.provider
            .update_record(zone, &target.id, &spf_spec())
            .await?;
        let detail = format!("'{}' -> '{SPF_CONTENT}'", target.content);
        audit.record(&zone.name, tag, AuditAction::Updated, Some(&detail));
        Ok(RecordOutcome::Applied)
    }

    /// Null MX: exactly the `(".", 0)` record at the apex, nothing else.
    /// Any other MX record would still allow mail delivery, so conflicting
    /// records are deleted (after one prompt) before the null MX is ensured.
    async fn reconcile_null_mx(
        &self,
        zone: &Zone,
        audit: &mut AuditLog,
    ) -> Result<RecordOutcome, ProviderError> {
        let tag = RecordKind::NullMx.tag();
        let records = self
            .provider
            .list_records(zone, DnsRecordType::Mx, "@")
            .await?;

        if records.is_empty() {
            self.provider.create_record(zone, &null_mx_spec()).await?;
            audit.record(&zone.name, tag, AuditAction::Created, Some(". 0"));
            return Ok(RecordOutcome::Applied);
        }

        let (null_records, conflicting): (Vec<_>, Vec<_>) =
            records.iter().partition(|r| is_null_mx(r));

        if conflicting.is_empty() {
            audit.record(&zone.name, tag, AuditAction::AlreadyCorrect, None);
            return Ok(RecordOutcome::AlreadyCorrect);
        }

        let exchanges: Vec<&str> = conflicting.iter().map(|r| r.content.as_str()).collect();
        let prompt = format!(
            "{}: {} conflicting MX record(s) ({}); delete them and enforce the null MX?",
            zone.name,
            conflicting.len(),
            exchanges.join(", ")
        );
        if !self.confirm.confirm(&prompt) {
            audit.record(
                &zone.name,
                tag,
                AuditAction::Skipped,
                Some(&exchanges.join(", ")),
            );
            return Ok(RecordOutcome::Skipped);
        }

        for record in &conflicting {
            self.provider.delete_record(zone, &record.id).await?;
            let detail = format!(
                "deleted MX {} {}",
                record.priority.unwrap_or_default(),
                record.content
            );
            audit.record(&zone.name, tag, AuditAction::Updated, Some(&detail));
        }

        if null_records.is_empty() {
            self.provider.create_record(zone, &null_mx_spec()).await?;
            audit.record(&zone.name, tag, AuditAction::Created, Some(". 0"));
        }

        Ok(RecordOutcome::Applied)
    }

    /// DMARC: the strict reject policy TXT at `_dmarc`.
    async fn reconcile_dmarc(
        &self,
        zone: &Zone,
        audit: &mut AuditLog,
    ) -> Result<RecordOutcome, ProviderError> {
        let tag = RecordKind::Dmarc.tag();
        let records = self
            .provider
            .list_records(zone, DnsRecordType::Txt, RecordKind::Dmarc.record_name())
            .await?;

        if let Some(existing) = records
            .iter()
            .find(|r| txt_content_matches(&r.content, DMARC_CONTENT))
        {
            audit.record(
                &zone.name,
                tag,
                AuditAction::AlreadyCorrect,
                Some(&existing.content),
            );
            return Ok(RecordOutcome::AlreadyCorrect);
        }

        let Some(target) = records.first() else {
            self.provider.create_record(zone, &dmarc_spec()).await?;
            audit.record(&zone.name, tag, AuditAction::Created, Some(DMARC_CONTENT));
            return Ok(RecordOutcome::Applied);
        };

        let prompt = format!(
            "{}: _dmarc TXT record is '{}'; overwrite with '{}'?",
            zone.name, target.content, DMARC_CONTENT
        );
        if !self.confirm.confirm(&prompt) {
            audit.record(&zone.name, tag, AuditAction::Skipped, Some(&target.content));
            return Ok(RecordOutcome::Skipped);
        }

        self.provider
            .update_record(zone, &target.id, &dmarc_spec())
            .await?;
        let detail = format!("'{}' -> '{DMARC_CONTENT}'", target.content);
        audit.record(&zone.name, tag, AuditAction::Updated, Some(&detail));
        Ok(RecordOutcome::Applied)
    }
}
