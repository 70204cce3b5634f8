//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview for logs and progress output: newlines collapsed,
/// truncated with an ellipsis.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_bytes {
        flat
    } else {
        format!("{}…", truncate_str(&flat, max_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_multibyte_boundary() {
        // 'é' is 2 bytes
        assert_eq!(truncate_str("café au lait", 4), "caf");
        assert_eq!(truncate_str("café", 5), "café");
    }

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(preview("a\n  b\tc", 20), "a b c");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        assert_eq!(preview("hello world", 5), "hello…");
    }
}
