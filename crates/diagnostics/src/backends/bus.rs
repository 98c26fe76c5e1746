//! Monitoring bus error channel

use tracing::error;

/// Error channel of the cluster monitoring bus
///
/// Receives message bodies without the program prefix.
pub trait BusChannel: Send + Sync {
    fn emit(&self, body: &str);
}

/// Bus channel that forwards into the `cerebro` tracing target
///
/// Used when no bus client has been attached to the sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBusChannel;

impl BusChannel for TracingBusChannel {
    fn emit(&self, body: &str) {
        error!(target: "cerebro", "{body}");
    }
}
