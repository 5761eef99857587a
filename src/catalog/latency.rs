use crate::catalog::operation::CatalogOperation;
use std::time::Duration;
use tokio::time::sleep;

/// How long each catalog call pauses before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatencyPolicy {
    /// Per-operation delays from [`CatalogOperation::simulated_delay`].
    #[default]
    Simulated,
    /// The same delay for every operation.
    Fixed(Duration),
    /// Answer immediately.
    Disabled,
}

impl LatencyPolicy {
    pub fn delay_for(&self, operation: CatalogOperation) -> Duration {
        match self {
            LatencyPolicy::Simulated => operation.simulated_delay(),
            LatencyPolicy::Fixed(d) => *d,
            LatencyPolicy::Disabled => Duration::ZERO,
        }
    }

    pub async fn wait(&self, operation: CatalogOperation) {
        let delay = self.delay_for(operation);
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}
