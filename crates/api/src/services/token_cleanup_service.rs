use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{error, info};

use crate::AppState;
use infra::repos::refresh_tokens;

const CLEANUP_INTERVAL_SECONDS: u64 = 60 * 60; // Purge once an hour

pub struct TokenCleanupService {
    state: AppState,
    interval: Interval,
}

impl TokenCleanupService {
    pub fn new(state: AppState) -> Self {
        let mut interval = interval(Duration::from_secs(CLEANUP_INTERVAL_SECONDS));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self { state, interval }
    }

    /// Start the background cleanup loop
    pub async fn run(&mut self) {
        info!("Starting refresh token cleanup service");

        loop {
            self.interval.tick().await;

            if let Err(e) = self.purge_expired().await {
                error!("Error purging expired refresh tokens: {}", e);
            }
        }
    }

    /// Delete refresh tokens past their expiry. Returns how many were removed.
    pub async fn purge_expired(&self) -> Result<u64, sqlx::Error> {
        let removed = refresh_tokens::delete_expired(&self.state.db).await?;
        if removed > 0 {
            info!(removed, "Purged expired refresh tokens");
        }
        Ok(removed)
    }
}

/// Spawn the cleanup service as a background task
pub fn spawn_token_cleanup_service(state: AppState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut service = TokenCleanupService::new(state);
        service.run().await;
    })
}
