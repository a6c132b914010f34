//! Record name handling.
//!
//! The tool represents record names relative to the zone apex: `@` for the
//! apex itself, otherwise a subdomain label. Provider APIs want
//! fully-qualified names; these helpers convert in both directions.

/// Strip a trailing dot from a domain name.
#[must_use]
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Convert a fully-qualified name to a relative one.
/// E.g. `"_dmarc.example.com"` + `"example.com"` -> `"_dmarc"`,
/// `"example.com"` + `"example.com"` -> `"@"`.
#[must_use]
pub fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = normalize_domain_name(full_name);
    let zone = normalize_domain_name(zone_name);

    if full == zone {
        "@".to_string()
    } else if let Some(subdomain) = full.strip_suffix(&format!(".{zone}")) {
        subdomain.to_string()
    } else {
        full
    }
}

/// Convert a relative name to a fully-qualified one.
/// E.g. `"_dmarc"` + `"example.com"` -> `"_dmarc.example.com"`,
/// `"@"` + `"example.com"` -> `"example.com"`.
#[must_use]
pub fn relative_to_full_name(relative_name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);

    if relative_name == "@" || relative_name.is_empty() {
        zone
    } else {
        format!("{relative_name}.{zone}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_dot() {
        assert_eq!(normalize_domain_name("example.com."), "example.com");
        assert_eq!(normalize_domain_name("example.com"), "example.com");
    }

    #[test]
    fn apex_becomes_at() {
        assert_eq!(full_name_to_relative("example.com", "example.com"), "@");
        assert_eq!(full_name_to_relative("example.com.", "example.com"), "@");
    }

    #[test]
    fn subdomain_becomes_label() {
        assert_eq!(
            full_name_to_relative("_dmarc.example.com", "example.com"),
            "_dmarc"
        );
    }

    #[test]
    fn unrelated_name_passes_through() {
        assert_eq!(
            full_name_to_relative("other.org", "example.com"),
            "other.org"
        );
    }

    #[test]
    fn at_expands_to_apex() {
        assert_eq!(relative_to_full_name("@", "example.com"), "example.com");
        assert_eq!(relative_to_full_name("", "example.com"), "example.com");
    }

    #[test]
    fn label_expands_to_fqdn() {
        assert_eq!(
            relative_to_full_name("_dmarc", "example.com"),
            "_dmarc.example.com"
        );
    }
}
