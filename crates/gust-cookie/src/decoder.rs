//! Single-candidate cookie decoder
//!
//! Turns one located name/value span into a [`DecodedCookie`] or a
//! [`SkipReason`]. Stages run in a fixed order and the first failing stage
//! wins:
//!
//! 1. span check (`MissingName`, `MissingValue`)
//! 2. quote unwrapping (`UnbalancedQuotes`)
//! 3. grammar check, strict mode only (`InvalidNameChar`, `InvalidValueChar`)

use crate::config::DecoderConfig;
use crate::octet;
use crate::skip::{NoopSink, SkipEvent, SkipReason, SkipSink};
use crate::span::CookieSpan;
use crate::{Error, Result};
use std::ops::Range;

#[cfg(feature = "tracing")]
use crate::diagnostics::TracingSink;

/// Sink used when none is supplied
#[cfg(feature = "tracing")]
pub type DefaultSink = TracingSink;

/// Sink used when none is supplied
#[cfg(not(feature = "tracing"))]
pub type DefaultSink = NoopSink;

/// A validated cookie name/value pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedCookie {
    /// Never empty
    pub name: String,
    /// Value with surrounding quotes removed
    pub value: String,
    /// Whether the value was quoted in the header
    pub wrapped: bool,
}

impl DecodedCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            wrapped: false,
        }
    }

    pub fn wrapped(mut self, wrapped: bool) -> Self {
        self.wrapped = wrapped;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }
}

/// Cookie decoder
///
/// Holds an immutable [`DecoderConfig`] and a [`SkipSink`]. Decoding is a pure
/// function of the header and span, so one decoder can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct CookieDecoder<S = DefaultSink> {
    config: DecoderConfig,
    sink: S,
}

impl CookieDecoder {
    /// Decoder with `report_failures` off
    pub fn new(strict: bool) -> Self {
        Self::with_config(DecoderConfig::new().strict_mode(strict))
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            config,
            sink: DefaultSink::default(),
        }
    }
}

impl Default for CookieDecoder {
    fn default() -> Self {
        Self::with_config(DecoderConfig::default())
    }
}

impl CookieDecoder<NoopSink> {
    /// Decoder that reports skips nowhere
    pub fn silent(config: DecoderConfig) -> Self {
        Self {
            config,
            sink: NoopSink,
        }
    }
}

impl<S: SkipSink> CookieDecoder<S> {
    /// Replace the skip sink
    pub fn with_sink<T: SkipSink>(self, sink: T) -> CookieDecoder<T> {
        CookieDecoder {
            config: self.config,
            sink,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    pub fn reports_failures(&self) -> bool {
        self.config.report_failures
    }

    /// Decode one candidate
    ///
    /// Rejections are passed to the sink before being returned.
    ///
    /// # Panics
    ///
    /// Panics if the span's offsets are out of bounds for `header` or do not
    /// fall on character boundaries.
    pub fn decode(
        &self,
        header: &str,
        span: CookieSpan,
    ) -> std::result::Result<DecodedCookie, SkipReason> {
        let result = decode_span(header, span, self.config.strict);
        if let Err(reason) = &result {
            self.sink.skipped(&SkipEvent {
                reason,
                header,
                span,
            });
        }
        result
    }

    /// Decode one candidate given as raw offsets, `None` marking an absent part
    pub fn decode_offsets(
        &self,
        header: &str,
        name_begin: Option<usize>,
        name_end: usize,
        value_begin: Option<usize>,
        value_end: usize,
    ) -> std::result::Result<DecodedCookie, SkipReason> {
        self.decode(
            header,
            CookieSpan::from_offsets(name_begin, name_end, value_begin, value_end),
        )
    }

    /// Apply the failure policy to a decode result
    ///
    /// Skip mode turns a rejection into `Ok(None)`; report mode turns it into
    /// [`Error::Rejected`] so the caller can abandon the header with `?`.
    pub fn settle(
        &self,
        result: std::result::Result<DecodedCookie, SkipReason>,
    ) -> Result<Option<DecodedCookie>> {
        match result {
            Ok(cookie) => Ok(Some(cookie)),
            Err(reason) if self.config.report_failures => Err(Error::Rejected(reason)),
            Err(_) => Ok(None),
        }
    }
}

fn decode_span(
    header: &str,
    span: CookieSpan,
    strict: bool,
) -> std::result::Result<DecodedCookie, SkipReason> {
    let (name_range, value_range) = check_span(span)?;

    let raw_value = &header[value_range];
    let value = octet::unwrap_value(raw_value).ok_or_else(|| SkipReason::UnbalancedQuotes {
        value: raw_value.to_string(),
    })?;

    let name = &header[name_range];
    if strict {
        check_grammar(name, value)?;
    }

    Ok(DecodedCookie {
        name: name.to_string(),
        value: value.to_string(),
        wrapped: value.len() != raw_value.len(),
    })
}

fn check_span(
    span: CookieSpan,
) -> std::result::Result<(Range<usize>, Range<usize>), SkipReason> {
    let name = span.name_range().ok_or(SkipReason::MissingName)?;
    let value = span.value_range().ok_or(SkipReason::MissingValue)?;
    Ok((name, value))
}

fn check_grammar(name: &str, value: &str) -> std::result::Result<(), SkipReason> {
    if let Some((pos, ch)) = octet::first_invalid_name_char(name) {
        return Err(SkipReason::InvalidNameChar {
            name: name.to_string(),
            ch,
            pos,
        });
    }
    if let Some((pos, ch)) = octet::first_invalid_value_char(value) {
        return Err(SkipReason::InvalidValueChar {
            value: value.to_string(),
            ch,
            pos,
        });
    }
    Ok(())
}
