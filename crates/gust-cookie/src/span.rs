//! Candidate name/value offsets into a raw header

use std::ops::Range;

/// Offsets of one cookie candidate inside a `Cookie`/`Set-Cookie` header
///
/// `None` begin offsets mark an absent name or value. A name whose begin and
/// end coincide counts as absent too, while a zero-length value is a present,
/// empty value.
///
/// Offsets are byte offsets and must fall on character boundaries of the
/// header they were produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CookieSpan {
    pub name_begin: Option<usize>,
    pub name_end: usize,
    pub value_begin: Option<usize>,
    pub value_end: usize,
}

impl CookieSpan {
    /// Candidate with both a name and a value
    pub fn new(name: Range<usize>, value: Range<usize>) -> Self {
        Self {
            name_begin: Some(name.start),
            name_end: name.end,
            value_begin: Some(value.start),
            value_end: value.end,
        }
    }

    /// Candidate with a name but no `=value` part
    pub fn without_value(name: Range<usize>) -> Self {
        Self {
            name_begin: Some(name.start),
            name_end: name.end,
            value_begin: None,
            value_end: 0,
        }
    }

    /// Build from the four raw offsets
    pub fn from_offsets(
        name_begin: Option<usize>,
        name_end: usize,
        value_begin: Option<usize>,
        value_end: usize,
    ) -> Self {
        Self {
            name_begin,
            name_end,
            value_begin,
            value_end,
        }
    }

    /// Name range, `None` when the name is absent or empty
    #[inline]
    pub fn name_range(&self) -> Option<Range<usize>> {
        match self.name_begin {
            Some(begin) if begin != self.name_end => Some(begin..self.name_end),
            _ => None,
        }
    }

    /// Value range, `None` only when the value is absent
    #[inline]
    pub fn value_range(&self) -> Option<Range<usize>> {
        self.value_begin.map(|begin| begin..self.value_end)
    }

    /// Shift `value_end` left past any trailing bytes matching `pred`
    pub(crate) fn trim_value_end(mut self, header: &str, pred: impl Fn(u8) -> bool) -> Self {
        if let Some(begin) = self.value_begin {
            let bytes = header.as_bytes();
            while self.value_end > begin && pred(bytes[self.value_end - 1]) {
                self.value_end -= 1;
            }
        }
        self
    }
}
