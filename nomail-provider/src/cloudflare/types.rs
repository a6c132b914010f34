//! Cloudflare API wire types.

use serde::Deserialize;

/// Cloudflare API response envelope.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    pub errors: Option<Vec<CloudflareError>>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i32,
    pub message: String,
}

/// Cloudflare zone resource.
#[derive(Debug, Deserialize)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
}

/// Cloudflare DNS record resource (response shape).
#[derive(Debug, Deserialize)]
pub struct CloudflareDnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub priority: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_list_envelope() {
        let json = r#"{
            "success": true,
            "errors": [],
            "result": [
                {
                    "id": "rec-1",
                    "type": "MX",
                    "name": "example.com",
                    "content": "mail.example.com",
                    "ttl": 3600,
                    "priority": 10,
                    "proxied": false
                }
            ]
        }"#;
        let resp: CloudflareResponse<Vec<CloudflareDnsRecord>> =
            serde_json::from_str(json).unwrap();
        assert!(resp.success);
        let records = resp.result.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_type, "MX");
        assert_eq!(records[0].priority, Some(10));
    }

    #[test]
    fn parses_error_envelope() {
        let json = r#"{
            "success": false,
            "errors": [{"code": 10000, "message": "Authentication error"}],
            "result": null
        }"#;
        let resp: CloudflareResponse<Vec<CloudflareZone>> = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        let errors = resp.errors.unwrap();
        assert_eq!(errors[0].code, 10000);
        assert_eq!(errors[0].message, "Authentication error");
    }

    #[test]
    fn txt_record_has_no_priority() {
        let json = r#"{
            "id": "rec-2",
            "type": "TXT",
            "name": "_dmarc.example.com",
            "content": "\"v=DMARC1; p=reject;\"",
            "ttl": 300
        }"#;
        let record: CloudflareDnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.priority, None);
    }
}
