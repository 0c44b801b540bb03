//! Background expiry sweeper for outstanding OTP codes
//!
//! Lazy expiry on every request already keeps expired codes from being
//! accepted; the sweeper additionally evicts them while the service is idle.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::service::OtpService;
use super::traits::{MailerTrait, OtpStoreTrait};

/// Periodically removes expired entries from the OTP store
pub struct OtpSweeper<M: MailerTrait + 'static, S: OtpStoreTrait + 'static> {
    service: Arc<OtpService<M, S>>,
    interval: Duration,
}

impl<M: MailerTrait + 'static, S: OtpStoreTrait + 'static> OtpSweeper<M, S> {
    /// Create a sweeper running every `interval`
    pub fn new(service: Arc<OtpService<M, S>>, interval: Duration) -> Self {
        Self { service, interval }
    }

    /// Create a sweeper from the service configuration, or `None` when disabled
    pub fn from_config(service: Arc<OtpService<M, S>>) -> Option<Self> {
        let config = service.config();
        if !config.sweeper_enabled() {
            return None;
        }
        let interval = Duration::from_secs(config.sweep_interval_seconds);
        Some(Self::new(service, interval))
    }

    /// Run a single sweep cycle, returning the number of entries removed
    pub async fn run_once(&self) -> usize {
        match self.service.sweep_expired().await {
            Ok(removed) => {
                if removed > 0 {
                    info!(removed = removed, "Background sweep removed expired OTP entries");
                }
                removed
            }
            Err(e) => {
                error!(error = %e, "Background OTP sweep failed");
                0
            }
        }
    }

    /// Spawn the sweeper onto the tokio runtime
    pub fn spawn(self) -> JoinHandle<()> {
        info!(interval_seconds = self.interval.as_secs(), "Starting background OTP sweeper");

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let removed = self.run_once().await;
                if let Ok(active) = self.service.active_count().await {
                    debug!(removed = removed, active = active, "OTP sweep cycle finished");
                }
            }
        })
    }
}
