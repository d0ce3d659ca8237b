//! Client side: decode the name/value of a `Set-Cookie` response header
//!
//! Only the leading `name=value` pair is decoded. Attributes after the first
//! `;` (`Path`, `Domain`, `Max-Age`, ...) are left alone.

use crate::config::DecoderConfig;
use crate::decoder::{CookieDecoder, DecodedCookie, DefaultSink};
use crate::skip::SkipSink;
use crate::tokenize::{is_ows, scan_pair};
use crate::Result;

/// Decoder for `Set-Cookie` response headers
#[derive(Debug, Clone)]
pub struct ClientCookieDecoder<S = DefaultSink> {
    decoder: CookieDecoder<S>,
}

impl ClientCookieDecoder {
    pub fn strict() -> Self {
        Self::with_config(DecoderConfig::strict())
    }

    pub fn lax() -> Self {
        Self::with_config(DecoderConfig::lax())
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self::new(CookieDecoder::with_config(config))
    }
}

impl Default for ClientCookieDecoder {
    fn default() -> Self {
        Self::strict()
    }
}

impl<S: SkipSink> ClientCookieDecoder<S> {
    pub fn new(decoder: CookieDecoder<S>) -> Self {
        Self { decoder }
    }

    pub fn decoder(&self) -> &CookieDecoder<S> {
        &self.decoder
    }

    /// Decode the cookie carried by one `Set-Cookie` header
    ///
    /// `Ok(None)` when the header holds no candidate or, in skip mode, when
    /// the candidate was rejected.
    pub fn decode(&self, header: &str) -> Result<Option<DecodedCookie>> {
        let bytes = header.as_bytes();
        let len = bytes.len();

        let mut i = 0;
        while i < len {
            match bytes[i] {
                // legacy multi-cookie separator before any pair
                b',' => return Ok(None),
                b';' => i += 1,
                b if is_ows(b) => i += 1,
                _ => break,
            }
        }
        if i == len {
            return Ok(None);
        }

        let (span, _) = scan_pair(header, i);
        let span = span
            .trim_value_end(header, is_ows)
            .trim_value_end(header, |b| b == b',')
            .trim_value_end(header, is_ows);

        let result = self.decoder.decode(header, span);
        self.decoder.settle(result)
    }

    /// Decode every `Set-Cookie` header in the map
    #[cfg(feature = "http")]
    pub fn decode_headers(&self, headers: &http::HeaderMap) -> Result<Vec<DecodedCookie>> {
        let mut cookies = Vec::new();
        for value in headers.get_all(http::header::SET_COOKIE) {
            let header = value
                .to_str()
                .map_err(|_| crate::Error::InvalidHeader(http::header::SET_COOKIE.to_string()))?;
            if let Some(cookie) = self.decode(header)? {
                cookies.push(cookie);
            }
        }
        Ok(cookies)
    }
}
