//! utils.rs
//! Small formatting helpers for messages and previews.

use std::fmt::Write;

/// Space-separated uppercase hex, e.g. `22 4A 00 EF`.
pub fn fmt_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02X}", b);
    }
    out
}

/// Hex + ASCII dump of `bytes[start..stop]`, `columns` bytes per row.
///
/// Rows look like `22 4A 00 EF | "J..`, short rows padded so the `|` lines up.
/// The range is clamped to the buffer; bytes outside `0x20..=0x7E` render as
/// `.` in the ASCII column.
pub fn preview(bytes: &[u8], start: usize, stop: usize, columns: usize) -> String {
    let stop = stop.min(bytes.len());
    let start = start.min(stop);
    let columns = columns.max(1);

    let mut out = String::new();
    for chunk in bytes[start..stop].chunks(columns) {
        for i in 0..columns {
            match chunk.get(i) {
                Some(b) => { let _ = write!(out, "{:02X} ", b); }
                None => out.push_str("   "),
            }
        }
        out.push_str("| ");
        out.extend(chunk.iter().map(|&b| printable(b)));
        out.push('\n');
    }
    out
}

#[inline]
fn printable(b: u8) -> char {
    if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_bytes_spacing() {
        assert_eq!(fmt_bytes(&[0x22, 0x4A, 0x00, 0xEF]), "22 4A 00 EF");
        assert_eq!(fmt_bytes(&[]), "");
    }

    #[test]
    fn preview_pads_short_rows() {
        let s = preview(b"AB\x00", 0, 128, 4);
        assert_eq!(s, "41 42 00    | AB.\n");
    }

    #[test]
    fn preview_clamps_range() {
        let data: Vec<u8> = (0u8..40).collect();
        let s = preview(&data, 0, 128, 16);
        assert_eq!(s.lines().count(), 3);
        assert!(s.lines().nth(2).unwrap().starts_with("20 21 22 23 24 25 26 27    "));
        assert_eq!(preview(&data, 50, 60, 16), "");
    }
}
