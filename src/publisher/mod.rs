mod pubsub;

pub use pubsub::PubSubPublisher;

use crate::{Result, analysis::AnalysisResult};
use async_trait::async_trait;

/// Seam for the analysis-completed event topic. Implementations block until
/// the publish is acknowledged or fails; the caller decides whether failure
/// matters (in the request path it is logged and swallowed).
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, result: &AnalysisResult) -> Result<()>;
}
