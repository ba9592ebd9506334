//! Per-node health tracking and ranking

use std::cmp::Ordering;

use parking_lot::Mutex;

/// Weight given to the newest outcome in the moving average.
const ALPHA: f64 = 0.2;

#[derive(Debug)]
struct HealthState {
    score: f64,
    last_selected: u64,
}

/// Interior-mutable health record carried by every node.
///
/// Callers report request outcomes back here after dispatch; the record
/// keeps an exponential moving average in `[0.0, 1.0]`. New nodes start at
/// 1.0 so fresh endpoints are tried immediately.
#[derive(Debug)]
pub struct HealthRecord {
    state: Mutex<HealthState>,
}

impl HealthRecord {
    /// Create a record for a node that has not served any requests yet.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(HealthState {
                score: 1.0,
                last_selected: 0,
            }),
        }
    }

    /// Report a successful request against this node.
    pub fn record_success(&self) {
        self.record(1.0);
    }

    /// Report a failed request against this node.
    pub fn record_failure(&self) {
        self.record(0.0);
    }

    fn record(&self, outcome: f64) {
        let mut state = self.state.lock();
        state.score = ALPHA * outcome + (1.0 - ALPHA) * state.score;
    }

    /// Current smoothed score.
    pub fn score(&self) -> f64 {
        self.state.lock().score
    }

    /// Record that the selector handed this node out, for fairness
    /// tie-breaking. `seq` comes from the manager's monotone counter.
    pub fn mark_selected(&self, seq: u64) {
        self.state.lock().last_selected = seq;
    }

    /// Sequence number of the most recent hand-out (0 if never selected).
    pub fn last_selected(&self) -> u64 {
        self.state.lock().last_selected
    }

    /// Consistent `(score, last_selected)` snapshot used for ranking.
    pub fn rank(&self) -> HealthRank {
        let state = self.state.lock();
        HealthRank {
            score: state.score,
            last_selected: state.last_selected,
        }
    }
}

impl Default for HealthRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of a node's health used to order selection candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthRank {
    /// Smoothed outcome score, higher is healthier.
    pub score: f64,
    /// Selection sequence number, lower means selected longer ago.
    pub last_selected: u64,
}

impl HealthRank {
    /// Ordering for selection: healthiest first, least recently selected
    /// on ties, spreading load across equally healthy endpoints.
    pub fn selection_order(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then(self.last_selected.cmp(&other.last_selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_healthy() {
        let health = HealthRecord::new();
        assert_eq!(health.score(), 1.0);
        assert_eq!(health.last_selected(), 0);
    }

    #[test]
    fn failures_lower_the_score_and_successes_recover_it() {
        let health = HealthRecord::new();
        health.record_failure();
        let after_failure = health.score();
        assert!(after_failure < 1.0);

        health.record_failure();
        assert!(health.score() < after_failure);

        let floor = health.score();
        health.record_success();
        assert!(health.score() > floor);
    }

    #[test]
    fn score_stays_within_unit_interval() {
        let health = HealthRecord::new();
        for _ in 0..100 {
            health.record_failure();
        }
        assert!(health.score() >= 0.0);
        for _ in 0..100 {
            health.record_success();
        }
        assert!(health.score() <= 1.0);
    }

    #[test]
    fn selection_order_prefers_higher_score() {
        let healthy = HealthRank {
            score: 0.9,
            last_selected: 10,
        };
        let sick = HealthRank {
            score: 0.2,
            last_selected: 0,
        };
        assert_eq!(healthy.selection_order(&sick), Ordering::Less);
    }

    #[test]
    fn selection_order_breaks_ties_by_least_recently_selected() {
        let stale = HealthRank {
            score: 0.5,
            last_selected: 1,
        };
        let fresh = HealthRank {
            score: 0.5,
            last_selected: 7,
        };
        assert_eq!(stale.selection_order(&fresh), Ordering::Less);
    }
}
