//! Desired-record policy.
//!
//! The three record kinds a hardened no-mail domain carries: an SPF
//! hard-fail TXT at the apex, a null MX at the apex, and a strict DMARC
//! reject policy at `_dmarc`.

use nomail_provider::{DnsRecord, RecordData, RecordSpec};

/// SPF policy authorizing no senders.
pub const SPF_CONTENT: &str = "v=spf1 -all";
/// Null MX exchange (RFC 7505).
pub const NULL_MX_EXCHANGE: &str = ".";
/// Null MX preference.
pub const NULL_MX_PRIORITY: u16 = 0;
/// Strict DMARC reject policy.
pub const DMARC_CONTENT: &str = "v=DMARC1; p=reject; sp=reject; adkim=s; aspf=s;";
/// DMARC record label under the apex.
pub const DMARC_LABEL: &str = "_dmarc";
/// TTL applied to created and updated records.
pub const RECORD_TTL: u32 = 3600;

/// The three managed record kinds, in reconciliation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Spf,
    NullMx,
    Dmarc,
}

impl RecordKind {
    /// Tag used in audit log lines and console output.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Spf => "SPF",
            Self::NullMx => "MX",
            Self::Dmarc => "DMARC",
        }
    }

    /// Relative record name the kind lives at.
    #[must_use]
    pub fn record_name(self) -> &'static str {
        match self {
            Self::Spf | Self::NullMx => "@",
            Self::Dmarc => DMARC_LABEL,
        }
    }
}

/// Desired apex SPF record.
#[must_use]
pub fn spf_spec() -> RecordSpec {
    RecordSpec {
        name: "@".to_string(),
        ttl: RECORD_TTL,
        data: RecordData::Txt {
            text: SPF_CONTENT.to_string(),
        },
    }
}

/// Desired apex null MX record.
#[must_use]
pub fn null_mx_spec() -> RecordSpec {
    RecordSpec {
        name: "@".to_string(),
        ttl: RECORD_TTL,
        data: RecordData::Mx {
            priority: NULL_MX_PRIORITY,
            exchange: NULL_MX_EXCHANGE.to_string(),
        },
    }
}

/// Desired `_dmarc` policy record.
#[must_use]
pub fn dmarc_spec() -> RecordSpec {
    RecordSpec {
        name: DMARC_LABEL.to_string(),
        ttl: RECORD_TTL,
        data: RecordData::Txt {
            text: DMARC_CONTENT.to_string(),
        },
    }
}

/// Quote-insensitive TXT content comparison. Providers may return TXT
/// content wrapped in double quotes.
#[must_use]
pub fn txt_content_matches(actual: &str, desired: &str) -> bool {
    unquote(actual) == desired
}

/// Whether a TXT record carries an SPF policy (of any content).
#[must_use]
pub fn is_spf_record(content: &str) -> bool {
    unquote(content).starts_with("v=spf1")
}

/// Whether a record is the null MX: exchange `.`, preference `0`.
#[must_use]
pub fn is_null_mx(record: &DnsRecord) -> bool {
    record.content == NULL_MX_EXCHANGE && record.priority == Some(NULL_MX_PRIORITY)
}

fn unquote(content: &str) -> &str {
    content.trim().trim_matches('"').trim()
}
