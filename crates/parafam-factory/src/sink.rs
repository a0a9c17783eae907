//! Default diagnostic sink backed by `tracing`.

use parafam_core::DiagnosticSink;

/// Sink that forwards classification diagnostics to `tracing::info!`.
///
/// The library never installs a subscriber; binaries decide where the
/// events go.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
