use std::{sync::Arc, time::Duration};

use tracing::debug;

use crate::engine::Engine;

/// Drives every running giveaway: one pass per `interval`, forever.
pub async fn refresh_giveaways(engine: Arc<Engine>, interval: Duration) {
    loop {
        let start = std::time::Instant::now();
        let summary = engine.tick().await;

        debug!(
            "Finished refreshing giveaways in {}ms ({} refreshed, {} drawn, {} abandoned)",
            start.elapsed().as_millis(),
            summary.refreshed,
            summary.drawn,
            summary.abandoned
        );
        tokio::time::sleep(interval.saturating_sub(start.elapsed()))
            .await;
    }
}
