//! Cookie octet classification and quote unwrapping
//!
//! ```text
//! cookie-name   = printable US-ASCII except  " , ; \ =
//! cookie-octet  = %x21 / %x23-2B / %x2D-3A / %x3C-5B / %x5D-7E
//! cookie-value  = *cookie-octet / ( DQUOTE *cookie-octet DQUOTE )
//! ```

/// Printable US-ASCII (0x21..=0x7E) minus `excluded`
const fn octet_table(excluded: &[u8]) -> [bool; 128] {
    let mut table = [false; 128];
    let mut i = 0x21;
    while i < 0x7f {
        table[i] = true;
        i += 1;
    }
    let mut j = 0;
    while j < excluded.len() {
        table[excluded[j] as usize] = false;
        j += 1;
    }
    table
}

static NAME_OCTETS: [bool; 128] = octet_table(b"\",;\\=");
static VALUE_OCTETS: [bool; 128] = octet_table(b"\",;\\");

/// Check if a character may appear in a cookie name
#[inline(always)]
pub fn is_name_octet(c: char) -> bool {
    (c as u32) < 128 && NAME_OCTETS[c as usize]
}

/// Check if a character may appear in an unquoted cookie value
#[inline(always)]
pub fn is_value_octet(c: char) -> bool {
    (c as u32) < 128 && VALUE_OCTETS[c as usize]
}

/// First character of `name` outside the cookie-name grammar, with its byte offset
pub fn first_invalid_name_char(name: &str) -> Option<(usize, char)> {
    name.char_indices().find(|&(_, c)| !is_name_octet(c))
}

/// First character of `value` outside the cookie-octet grammar, with its byte offset
pub fn first_invalid_value_char(value: &str) -> Option<(usize, char)> {
    value.char_indices().find(|&(_, c)| !is_value_octet(c))
}

/// Strip one layer of surrounding double quotes
///
/// Returns `None` when the quoting is unbalanced: a leading quote without a
/// trailing one, the reverse, or a lone `"`.
pub fn unwrap_value(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(b'"'), Some(b'"')) if bytes.len() >= 2 => Some(&raw[1..raw.len() - 1]),
        (Some(b'"'), _) | (_, Some(b'"')) => None,
        _ => Some(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_octets() {
        assert!(is_name_octet('a'));
        assert!(is_name_octet('!'));
        assert!(is_name_octet('~'));
        assert!(is_name_octet('$'));
        for c in ['"', ',', ';', '\\', '=', ' ', '\t', '\x7f', '\0', 'é'] {
            assert!(!is_name_octet(c), "{:?} should be rejected", c);
        }
    }

    #[test]
    fn test_value_octets() {
        assert!(is_value_octet('='));
        assert!(is_value_octet('/'));
        for c in ['"', ',', ';', '\\', ' ', '\r', '\x7f', 'ü'] {
            assert!(!is_value_octet(c), "{:?} should be rejected", c);
        }
    }

    #[test]
    fn test_first_invalid_char() {
        assert_eq!(first_invalid_name_char("session"), None);
        assert_eq!(first_invalid_name_char("a;b;c"), Some((1, ';')));
        assert_eq!(first_invalid_name_char("ab="), Some((2, '=')));
        assert_eq!(first_invalid_value_char("a=b"), None);
        assert_eq!(first_invalid_value_char("ab\"c d"), Some((2, '"')));
        assert_eq!(first_invalid_value_char("caf\u{e9}"), Some((3, '\u{e9}')));
    }

    #[test]
    fn test_unwrap_value() {
        assert_eq!(unwrap_value("\"abc\""), Some("abc"));
        assert_eq!(unwrap_value("\"\""), Some(""));
        assert_eq!(unwrap_value("abc"), Some("abc"));
        assert_eq!(unwrap_value(""), Some(""));
        assert_eq!(unwrap_value("\"abc"), None);
        assert_eq!(unwrap_value("abc\""), None);
        assert_eq!(unwrap_value("\""), None);
    }

    #[test]
    fn test_unwrap_single_layer() {
        assert_eq!(unwrap_value("\"\"a\"\""), Some("\"a\""));
        assert_eq!(unwrap_value("a\"b"), Some("a\"b"));
    }
}
