// src/utils/format.rs
//! Formatting helpers for console summaries

/// Formats a count with thousands separators: 1234567 -> "1,234,567"
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a duration given in seconds
pub fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        return format!("{:.1}s", secs);
    }

    let total = secs as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;

    if h > 0 {
        format!("{}h{}m{}s", h, m, s)
    } else {
        format!("{}m{}s", m, s)
    }
}
