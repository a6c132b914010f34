use serde::{Deserialize, Serialize};

// ============ Zones ============

/// A DNS zone as resolved from the provider account.
///
/// Obtained once per domain via [`DnsProvider::find_zone`]; all record
/// operations take the resolved zone so implementations can expand relative
/// record names against the zone apex.
///
/// [`DnsProvider::find_zone`]: crate::traits::DnsProvider::find_zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Opaque provider-side zone identifier.
    pub id: String,
    /// Zone apex name, e.g. `example.com`.
    pub name: String,
}

// ============ Records ============

/// DNS record types the tool manages. Everything else is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    Txt,
    Mx,
}

impl DnsRecordType {
    /// Uppercase wire representation used in provider APIs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "TXT",
            Self::Mx => "MX",
        }
    }

    /// Parse the uppercase wire representation. Returns `None` for types
    /// the tool does not manage.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TXT" => Some(Self::Txt),
            "MX" => Some(Self::Mx),
            _ => None,
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as returned by the provider.
///
/// `name` is relative to the zone apex: `@` for the apex itself, or a
/// subdomain label such as `_dmarc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Opaque provider-side record identifier.
    pub id: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Relative record name (`@` or a subdomain label).
    pub name: String,
    /// Record content (TXT text or MX exchange host).
    pub content: String,
    /// MX preference; `None` for TXT records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// Time-to-live in seconds.
    pub ttl: u32,
}

/// Typed record payload for create/update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum RecordData {
    /// TXT record payload.
    Txt {
        /// Text content, without surrounding quotes.
        text: String,
    },
    /// MX record payload.
    Mx {
        /// MX preference value.
        priority: u16,
        /// Exchange host (`.` for a null MX).
        exchange: String,
    },
}

impl RecordData {
    /// Record type implied by the payload.
    #[must_use]
    pub fn record_type(&self) -> DnsRecordType {
        match self {
            Self::Txt { .. } => DnsRecordType::Txt,
            Self::Mx { .. } => DnsRecordType::Mx,
        }
    }

    /// Wire content field (TXT text or MX exchange).
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Txt { text } => text,
            Self::Mx { exchange, .. } => exchange,
        }
    }

    /// Wire priority field; `None` for TXT records.
    #[must_use]
    pub fn priority(&self) -> Option<u16> {
        match self {
            Self::Txt { .. } => None,
            Self::Mx { priority, .. } => Some(*priority),
        }
    }
}

/// Request body for record creation and full-record updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSpec {
    /// Relative record name (`@` or a subdomain label).
    pub name: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
    /// Typed record payload.
    pub data: RecordData,
}
