use core::fmt::Write as _;

/// Escape a string scalar's content. Control bytes below 0x20, the quote
/// and the backslash get two-character escapes or `\u00XX`; the forward
/// slash only when `escape_slashes` is set. The output is not quoted.
pub(crate) fn escape_into(out: &mut String, s: &str, escape_slashes: bool) {
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '/' if escape_slashes => out.push_str("\\/"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
}
