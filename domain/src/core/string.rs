//! String utilities for the domain layer.

/// Single-line preview of a possibly long, multi-line answer (UTF-8 safe)
///
/// Line breaks are collapsed to spaces, then the result is cut at a char
/// boundary so that it fits `max_len` bytes including the trailing `...`.
pub fn preview(s: &str, max_len: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_len {
        return flat;
    }
    let mut end = max_len.saturating_sub(3);
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}
