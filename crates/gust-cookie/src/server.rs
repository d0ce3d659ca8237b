//! Server side: decode the `Cookie` request header
//!
//! ```text
//! Cookie: session=abc123; theme="dark"; lang=en
//! ```
//!
//! Pairs are split on `;` (and `,` for older clients) and every pair goes
//! through [`CookieDecoder`]. Headers in RFC 2965 form (`$Version=1; ...`) are
//! accepted and their `$Path`, `$Domain` and `$Port` attributes dropped.

use crate::config::DecoderConfig;
use crate::decoder::{CookieDecoder, DecodedCookie, DefaultSink};
use crate::skip::SkipSink;
use crate::tokenize::{is_ows, scan_pair};
use crate::Result;
use smallvec::SmallVec;

/// Cookies decoded from request headers, in header order
pub type CookieList = SmallVec<[DecodedCookie; 8]>;

const RFC2965_VERSION: &str = "$Version";
const RFC2965_ATTRIBUTES: [&str; 3] = ["$Path", "$Domain", "$Port"];

/// Decoder for `Cookie` request headers
#[derive(Debug, Clone)]
pub struct ServerCookieDecoder<S = DefaultSink> {
    decoder: CookieDecoder<S>,
}

impl ServerCookieDecoder {
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

impl Default for ServerCookieDecoder {
    fn default() -> Self {
        Self::strict()
    }
}

impl<S: SkipSink> ServerCookieDecoder<S> {
    pub fn new(decoder: CookieDecoder<S>) -> Self {
        Self { decoder }
    }

    pub fn decoder(&self) -> &CookieDecoder<S> {
        &self.decoder
    }

    /// Decode a header keeping only the first cookie of each name
    pub fn decode(&self, header: &str) -> Result<CookieList> {
        let mut cookies = CookieList::new();
        self.decode_into(header, true, &mut cookies)?;
        Ok(cookies)
    }

    /// Decode a header keeping every cookie, duplicates included
    pub fn decode_all(&self, header: &str) -> Result<CookieList> {
        let mut cookies = CookieList::new();
        self.decode_into(header, false, &mut cookies)?;
        Ok(cookies)
    }

    /// Decode every `Cookie` header in the map, first cookie of each name wins
    #[cfg(feature = "http")]
    pub fn decode_headers(&self, headers: &http::HeaderMap) -> Result<CookieList> {
        let mut cookies = CookieList::new();
        for value in headers.get_all(http::header::COOKIE) {
            let header = value
                .to_str()
                .map_err(|_| crate::Error::InvalidHeader(http::header::COOKIE.to_string()))?;
            self.decode_into(header, true, &mut cookies)?;
        }
        Ok(cookies)
    }

    fn decode_into(&self, header: &str, unique: bool, cookies: &mut CookieList) -> Result<()> {
        let bytes = header.as_bytes();
        let len = bytes.len();

        let rfc2965 = starts_with_ignore_case(header, RFC2965_VERSION);
        let mut i = if rfc2965 {
            header.find(';').map_or(len, |p| p + 1)
        } else {
            0
        };

        loop {
            while i < len && (is_ows(bytes[i]) || bytes[i] == b';' || bytes[i] == b',') {
                i += 1;
            }
            if i == len {
                break;
            }

            let (span, next) = scan_pair(header, i);
            i = next;
            let span = span.trim_value_end(header, is_ows);

            if rfc2965 {
                if let Some(range) = span.name_range() {
                    let name = &header[range];
                    if RFC2965_ATTRIBUTES.iter().any(|a| a.eq_ignore_ascii_case(name)) {
                        continue;
                    }
                }
            }

            let result = self.decoder.decode(header, span);
            if let Some(cookie) = self.decoder.settle(result)? {
                if !unique || !cookies.iter().any(|c| c.name == cookie.name) {
                    cookies.push(cookie);
                }
            }
        }

        Ok(())
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}
