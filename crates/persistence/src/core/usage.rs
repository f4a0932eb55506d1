//! Request accounting.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::UsageSnapshot;

/// Counts handled requests in the backing store.
#[async_trait]
pub trait UsageStats: Send + Sync {
    /// Records one request made at `now_ts` (unix seconds).
    ///
    /// The first call fixes the start timestamp; later calls only bump the
    /// counter.
    async fn record_request(&self, now_ts: i64) -> StorageResult<()>;

    /// Returns the current counters.
    async fn usage(&self) -> StorageResult<UsageSnapshot>;
}
