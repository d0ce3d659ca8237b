//! gust-cookie: Cookie name/value decoding
//!
//! The core is [`CookieDecoder`], which validates one already-located
//! name/value candidate ([`CookieSpan`]) inside a raw `Cookie` or
//! `Set-Cookie` header. [`ServerCookieDecoder`] and [`ClientCookieDecoder`]
//! split whole headers into candidates and feed them to it.
//!
//! ```
//! use gust_cookie::{CookieDecoder, CookieSpan, DecodedCookie};
//!
//! let header = "foo=\"bar\"; baz=qux";
//! let decoder = CookieDecoder::new(true);
//!
//! let cookie = decoder.decode(header, CookieSpan::new(0..3, 4..9)).unwrap();
//! assert_eq!(cookie, DecodedCookie::new("foo", "bar").wrapped(true));
//! ```
//!
//! ## Features
//! - `tracing` - report skipped cookies as `tracing` debug events (default)
//! - `http` - decode straight from `http::HeaderMap` (default)

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod decoder;
pub mod error;
pub mod octet;
pub mod server;
pub mod skip;
pub mod span;

#[cfg(feature = "tracing")]
pub mod diagnostics;

mod tokenize;

// Re-exports
pub use client::ClientCookieDecoder;
pub use config::DecoderConfig;
pub use decoder::{CookieDecoder, DecodedCookie, DefaultSink};
pub use error::{Error, Result};
pub use server::{CookieList, ServerCookieDecoder};
pub use skip::{NoopSink, SkipEvent, SkipReason, SkipSink};
pub use span::CookieSpan;

#[cfg(feature = "tracing")]
pub use diagnostics::TracingSink;
