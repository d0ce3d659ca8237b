//! Rejection reasons and the sink they are reported to
//!
//! Every rejected candidate produces a [`SkipReason`]. Before the decoder
//! returns it, the reason is handed to the decoder's [`SkipSink`] wrapped in a
//! [`SkipEvent`] that also carries the header and span it came from.

use crate::span::CookieSpan;
use thiserror::Error;

/// Why a cookie candidate was rejected
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum SkipReason {
    /// Name span absent or zero-length
    #[error("Skipping cookie with empty name")]
    MissingName,

    /// Value span absent (an empty value is fine)
    #[error("Skipping cookie without a value")]
    MissingValue,

    /// Only one side of the value is quoted
    #[error("Skipping cookie because quotes are not properly balanced in '{value}'")]
    UnbalancedQuotes { value: String },

    /// Name holds a character outside the cookie-name grammar
    #[error("Skipping cookie because name '{name}' contains invalid char '{ch}'")]
    InvalidNameChar { name: String, ch: char, pos: usize },

    /// Unwrapped value holds a character outside the cookie-octet grammar
    #[error("Skipping cookie because value '{value}' contains invalid char '{ch}'")]
    InvalidValueChar { value: String, ch: char, pos: usize },
}

impl SkipReason {
    /// Stable identifier for structured diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::MissingName => "missing_name",
            SkipReason::MissingValue => "missing_value",
            SkipReason::UnbalancedQuotes { .. } => "unbalanced_quotes",
            SkipReason::InvalidNameChar { .. } => "invalid_name_char",
            SkipReason::InvalidValueChar { .. } => "invalid_value_char",
        }
    }

    /// Offending character and its byte offset, for grammar violations
    pub fn invalid_char(&self) -> Option<(char, usize)> {
        match self {
            SkipReason::InvalidNameChar { ch, pos, .. }
            | SkipReason::InvalidValueChar { ch, pos, .. } => Some((*ch, *pos)),
            _ => None,
        }
    }
}

/// A rejection together with the input that caused it
#[derive(Debug, Clone, Copy)]
pub struct SkipEvent<'a> {
    pub reason: &'a SkipReason,
    pub header: &'a str,
    pub span: CookieSpan,
}

impl<'a> SkipEvent<'a> {
    /// Raw name text, if the span has one
    pub fn name(&self) -> Option<&'a str> {
        self.span.name_range().and_then(|range| self.header.get(range))
    }

    /// Raw value text as it appeared in the header, quotes included
    pub fn raw_value(&self) -> Option<&'a str> {
        self.span.value_range().and_then(|range| self.header.get(range))
    }
}

/// Receives skip events from a decoder
///
/// Sinks are advisory: whatever they do, the decoder's result is unchanged.
pub trait SkipSink: Send + Sync {
    fn skipped(&self, event: &SkipEvent<'_>);
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl SkipSink for NoopSink {
    #[inline]
    fn skipped(&self, _event: &SkipEvent<'_>) {}
}

impl<F> SkipSink for F
where
    F: Fn(&SkipEvent<'_>) + Send + Sync,
{
    fn skipped(&self, event: &SkipEvent<'_>) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_messages() {
        assert_eq!(
            SkipReason::MissingName.to_string(),
            "Skipping cookie with empty name"
        );
        assert_eq!(
            SkipReason::UnbalancedQuotes { value: "\"abc".into() }.to_string(),
            "Skipping cookie because quotes are not properly balanced in '\"abc'"
        );
        assert_eq!(
            SkipReason::InvalidNameChar { name: "a;b".into(), ch: ';', pos: 1 }.to_string(),
            "Skipping cookie because name 'a;b' contains invalid char ';'"
        );
        assert_eq!(
            SkipReason::InvalidValueChar { value: "x y".into(), ch: ' ', pos: 1 }.to_string(),
            "Skipping cookie because value 'x y' contains invalid char ' '"
        );
    }

    #[test]
    fn test_reason_kind_and_char() {
        assert_eq!(SkipReason::MissingValue.kind(), "missing_value");
        assert_eq!(SkipReason::MissingValue.invalid_char(), None);

        let reason = SkipReason::InvalidValueChar { value: "a\"b".into(), ch: '"', pos: 1 };
        assert_eq!(reason.kind(), "invalid_value_char");
        assert_eq!(reason.invalid_char(), Some(('"', 1)));
    }

    #[test]
    fn test_event_slices() {
        let header = "foo=\"bar\"";
        let reason = SkipReason::MissingName;
        let event = SkipEvent {
            reason: &reason,
            header,
            span: CookieSpan::new(0..3, 4..9),
        };
        assert_eq!(event.name(), Some("foo"));
        assert_eq!(event.raw_value(), Some("\"bar\""));

        let event = SkipEvent {
            reason: &reason,
            header,
            span: CookieSpan::default(),
        };
        assert_eq!(event.name(), None);
        assert_eq!(event.raw_value(), None);
    }

    #[test]
    fn test_closure_sink() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let hits = AtomicUsize::new(0);
        let sink = |_: &SkipEvent<'_>| {
            hits.fetch_add(1, Ordering::Relaxed);
        };
        let reason = SkipReason::MissingValue;
        let event = SkipEvent {
            reason: &reason,
            header: "a",
            span: CookieSpan::without_value(0..1),
        };
        sink.skipped(&event);
        sink.skipped(&event);
        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }
}
