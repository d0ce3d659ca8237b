//! Header scanning shared by the server and client decoders

use crate::span::CookieSpan;

/// Whitespace allowed around cookie pairs
#[inline(always)]
pub(crate) fn is_ows(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0b | 0x0c | b'\r' | b' ')
}

/// Scan one `name[=value]` pair starting at `begin`
///
/// The value runs up to the next `;` (or end of header). Returns the span and
/// the offset scanning stopped at, which is a `;` or the header length.
pub(crate) fn scan_pair(header: &str, begin: usize) -> (CookieSpan, usize) {
    let bytes = header.as_bytes();
    let len = bytes.len();

    let mut i = begin;
    while i < len {
        match bytes[i] {
            b';' => return (CookieSpan::without_value(begin..i), i),
            b'=' => {
                let value_begin = i + 1;
                let value_end = bytes[value_begin..]
                    .iter()
                    .position(|&b| b == b';')
                    .map_or(len, |p| value_begin + p);
                return (CookieSpan::new(begin..i, value_begin..value_end), value_end);
            }
            _ => i += 1,
        }
    }

    (CookieSpan::without_value(begin..len), len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_pair() {
        let header = "a=1; b=2";
        assert_eq!(scan_pair(header, 0), (CookieSpan::new(0..1, 2..3), 3));
        assert_eq!(scan_pair(header, 5), (CookieSpan::new(5..6, 7..8), 8));
    }

    #[test]
    fn test_scan_pair_without_value() {
        assert_eq!(scan_pair("flag; a=1", 0), (CookieSpan::without_value(0..4), 4));
        assert_eq!(scan_pair("flag", 0), (CookieSpan::without_value(0..4), 4));
    }

    #[test]
    fn test_scan_pair_value_keeps_equals() {
        assert_eq!(scan_pair("a=b=c", 0), (CookieSpan::new(0..1, 2..5), 5));
        assert_eq!(scan_pair("a=", 0), (CookieSpan::new(0..1, 2..2), 2));
    }

    #[test]
    fn test_ows() {
        assert!(is_ows(b' '));
        assert!(is_ows(0x0b));
        assert!(!is_ows(b';'));
    }
}
