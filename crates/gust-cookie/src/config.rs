//! Decoder configuration

/// Decoding policy, fixed when a decoder is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Enforce the RFC 6265 cookie grammar on names and values
    pub strict: bool,
    /// Fail the whole header on the first rejected cookie instead of skipping it
    pub report_failures: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            strict: true,
            report_failures: false,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// RFC 6265 grammar enforced
    pub fn strict() -> Self {
        Self::default()
    }

    /// Grammar checks off; span presence and quote balance still apply
    pub fn lax() -> Self {
        Self::default().strict_mode(false)
    }

    pub fn strict_mode(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn report_failures(mut self, report: bool) -> Self {
        self.report_failures = report;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert!(config.strict);
        assert!(!config.report_failures);
        assert_eq!(DecoderConfig::new(), DecoderConfig::strict());
    }

    #[test]
    fn test_builder() {
        let config = DecoderConfig::lax().report_failures(true);
        assert!(!config.strict);
        assert!(config.report_failures);
    }
}
