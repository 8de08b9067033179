//! Network domain pattern matching.
//!
//! Patterns are either exact hostnames (`api.example.com`) or subdomain
//! wildcards (`*.example.com`, which also matches the apex domain). Before
//! comparison the pattern has trailing `:` characters and trailing ASCII
//! digits stripped, a best-effort removal of a port accidentally written into
//! the pattern. The strip is blind: a hostname that legitimately ends in
//! digits (`host9`) is truncated too.

/// Check whether `domain` matches `pattern`.
///
/// `domain` must be the host portion only; the caller strips any `:port`
/// suffix before matching.
pub fn matches(domain: &str, pattern: &str) -> bool {
    let base_pattern = pattern
        .trim_end_matches(':')
        .trim_end_matches(|c: char| c.is_ascii_digit());

    if pattern.starts_with("*.") {
        let base = base_pattern.strip_prefix("*.").unwrap_or(base_pattern);
        return domain == base || domain.ends_with(&format!(".{base}"));
    }

    domain == base_pattern || domain.starts_with(&format!("{base_pattern}:"))
}
