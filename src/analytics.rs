//! Command usage counters.
//!
//! Recording is fire-and-forget and flushing is bounded in time. Nothing in
//! here may fail the command being measured.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

pub type Tags = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub tags: Tags,
}

#[allow(async_fn_in_trait)]
pub trait Analytics {
    fn incr(&self, name: &str, tags: Tags);

    async fn flush(&self) -> std::io::Result<()>;
}

/// Buffers counters and emits them as tracing events on flush.
#[derive(Debug, Default)]
pub struct TracingAnalytics {
    pending: Mutex<Vec<Counter>>,
}

impl TracingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Vec<Counter> {
        self.pending.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Analytics for TracingAnalytics {
    fn incr(&self, name: &str, tags: Tags) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push(Counter {
                name: name.to_string(),
                tags,
            });
        }
    }

    async fn flush(&self) -> std::io::Result<()> {
        let counters = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => {
                return Err(std::io::Error::other("analytics buffer poisoned"));
            }
        };
        for counter in counters {
            tracing::debug!(counter = %counter.name, tags = ?counter.tags, "analytics");
        }
        Ok(())
    }
}

/// Flush `analytics`, giving up after `timeout`. Failures are only logged.
pub async fn flush_with_timeout<A: Analytics>(analytics: &A, timeout: Duration) {
    match tokio::time::timeout(timeout, analytics.flush()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("Failed to flush analytics: {}", e),
        Err(_) => tracing::warn!("Analytics flush timed out after {:?}", timeout),
    }
}
