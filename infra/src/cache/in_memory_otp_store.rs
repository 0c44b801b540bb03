//! In-memory OTP store
//!
//! Entries are keyed by normalized email. Expiry is not enforced on reads;
//! the OTP service decides expiry and calls `sweep` to evict stale entries.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use pa_core::domain::entities::OtpEntry;
use pa_core::services::otp::OtpStoreTrait;

/// Process-wide OTP store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryOtpStore {
    entries: RwLock<HashMap<String, OtpEntry>>,
}

impl InMemoryOtpStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpStoreTrait for InMemoryOtpStore {
    async fn get(&self, email: &str) -> Result<Option<OtpEntry>, String> {
        Ok(self.entries.read().await.get(email).cloned())
    }

    async fn set(&self, entry: OtpEntry) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        if entries.insert(entry.email.clone(), entry).is_some() {
            debug!("Replaced outstanding OTP entry");
        }
        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<bool, String> {
        Ok(self.entries.write().await.remove(email).is_some())
    }

    async fn sweep(&self, now: DateTime<Utc>, validity: Duration) -> Result<usize, String> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now, validity));
        Ok(before - entries.len())
    }

    async fn len(&self) -> Result<usize, String> {
        Ok(self.entries.read().await.len())
    }
}
