//! Request accounting snapshot.

use serde::{Deserialize, Serialize};

/// Request counters as stored in the backing store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Unix time (seconds) of the first recorded request, if any.
    pub start_ts: Option<i64>,
    /// Total number of recorded requests.
    pub total_requests: u64,
}

impl UsageSnapshot {
    /// Seconds elapsed since the first request, never less than one.
    ///
    /// With no recorded start time the window starts at `now_ts`.
    pub fn uptime_seconds(&self, now_ts: i64) -> i64 {
        let start = self.start_ts.unwrap_or(now_ts);
        (now_ts - start).max(1)
    }

    /// Average requests per second over the uptime window.
    pub fn avg_rps(&self, now_ts: i64) -> f64 {
        self.total_requests as f64 / self.uptime_seconds(now_ts) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_never_below_one() {
        let snapshot = UsageSnapshot::default();
        assert_eq!(snapshot.uptime_seconds(1_000), 1);

        let snapshot = UsageSnapshot {
            start_ts: Some(1_000),
            total_requests: 0,
        };
        assert_eq!(snapshot.uptime_seconds(1_000), 1);
        assert_eq!(snapshot.uptime_seconds(1_010), 10);
    }

    #[test]
    fn test_avg_rps() {
        let snapshot = UsageSnapshot {
            start_ts: Some(100),
            total_requests: 50,
        };
        assert!((snapshot.avg_rps(110) - 5.0).abs() < f64::EPSILON);
    }
}
