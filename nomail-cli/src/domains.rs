//! Domain list loader.
//!
//! One domain per line; `#` starts a comment, blank lines are skipped, and
//! lines without a `.` are treated as stray text and dropped. Order and
//! duplicates are preserved.

use std::fs;
use std::path::Path;

use crate::config::ConfigError;

/// Load the domain list from `path`.
pub fn load_domains(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::DomainsFileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| ConfigError::DomainsFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text.lines().filter_map(parse_line).collect())
}

/// Extract a domain from one input line, or `None` if the line carries none.
fn parse_line(line: &str) -> Option<String> {
    let candidate = line.split('#').next().unwrap_or("").trim();
    if candidate.is_empty() || !candidate.contains('.') {
        return None;
    }
    Some(candidate.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn blank_and_whitespace_lines_yield_nothing() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("\t"), None);
    }

    #[test]
    fn comment_lines_yield_nothing() {
        assert_eq!(parse_line("# parked domains"), None);
        assert_eq!(parse_line("   # indented comment"), None);
    }

    #[test]
    fn inline_comments_are_stripped() {
        assert_eq!(
            parse_line("example.com  # legacy brand"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn dotless_lines_yield_nothing() {
        assert_eq!(parse_line("localhost"), None);
        assert_eq!(parse_line("not a domain"), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            parse_line("  example.org\t"),
            Some("example.org".to_string())
        );
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("domains.txt");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "b.org").unwrap();
        writeln!(f, "a.com").unwrap();
        writeln!(f, "# comment").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "a.com").unwrap();

        let domains = load_domains(&path).unwrap();
        assert_eq!(domains, vec!["b.org", "a.com", "a.com"]);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_domains(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::DomainsFileNotFound(_)));
    }
}
