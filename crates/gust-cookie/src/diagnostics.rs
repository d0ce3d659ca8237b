//! Skip diagnostics via `tracing`

use crate::skip::{SkipEvent, SkipSink};

/// Emits every skipped cookie as a `debug` event
///
/// Fields: `reason` (see [`SkipReason::kind`](crate::SkipReason::kind)),
/// `name` and `value` as they appeared in the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SkipSink for TracingSink {
    fn skipped(&self, event: &SkipEvent<'_>) {
        tracing::debug!(
            reason = event.reason.kind(),
            name = event.name(),
            value = event.raw_value(),
            "{}",
            event.reason
        );
    }
}
