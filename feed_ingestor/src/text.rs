/// Shortens `s` to at most `max` characters, marking the cut with an ellipsis.
///
/// Cuts on a char boundary so multi-byte payloads never panic.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &s[..cut]),
        None => s.to_string(),
    }
}
