//! File path pattern matching.
//!
//! Three pattern shapes, checked in order:
//! 1. `**` anywhere: the text before the first `**` is a literal prefix; the
//!    path matches if it starts with that prefix, or as a fallback if the full
//!    pattern glob-matches it (covers patterns where `**` follows other
//!    wildcards).
//! 2. `*` without `**`: trailing `*` and `/` are stripped and the remainder is
//!    a literal prefix check. The prefix spans path separators, and a `*` that
//!    is not trailing stays in the prefix as a literal character.
//! 3. No wildcard: classic glob match, which is plain string equality when the
//!    pattern has no `?`.

/// Check whether `path` matches `pattern`.
///
/// Total over any two strings; a malformed pattern simply fails to match.
pub fn matches(path: &str, pattern: &str) -> bool {
    if let Some((prefix, _)) = pattern.split_once("**") {
        return path.starts_with(prefix) || glob_match(path, pattern);
    }
    if pattern.contains('*') {
        let prefix = pattern.trim_end_matches('*').trim_end_matches('/');
        return path.starts_with(prefix);
    }
    glob_match(path, pattern)
}

/// Classic glob match: `*` matches any run of characters (including `/`),
/// `?` matches exactly one, everything else is literal.
fn glob_match(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let mut ti = 0;
    let mut pi = 0;
    // Position of the last `*` seen and the text position it was tried at,
    // for backtracking when a literal run after the star fails to match.
    let mut star: Option<(usize, usize)> = None;

    while ti < text.len() {
        if pi < pattern.len() && (pattern[pi] == '?' || pattern[pi] == text[ti]) {
            ti += 1;
            pi += 1;
        } else if pi < pattern.len() && pattern[pi] == '*' {
            star = Some((pi, ti));
            pi += 1;
        } else if let Some((star_pi, star_ti)) = star {
            pi = star_pi + 1;
            ti = star_ti + 1;
            star = Some((star_pi, star_ti + 1));
        } else {
            return false;
        }
    }

    while pi < pattern.len() && pattern[pi] == '*' {
        pi += 1;
    }
    pi == pattern.len()
}
