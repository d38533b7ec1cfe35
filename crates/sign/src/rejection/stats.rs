//! Rejection statistics

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use dchallenge_api::{RejectionObserver, RejectionOutcome};

/// Atomic counters of rejection-loop outcomes.
///
/// Safe to share between threads (e.g. behind an `Arc`) and to pass by
/// reference into several loops at once. Counting never feeds back into any
/// decision.
#[derive(Debug, Default)]
pub struct RejectionStats {
    attempts: AtomicU64,
    accepted: AtomicU64,
    rejected: AtomicU64,
    bypassed: AtomicU64,
}

impl RejectionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the counters; each field is loaded independently
    pub fn snapshot(&self) -> RejectionSnapshot {
        RejectionSnapshot {
            attempts: self.attempts.load(Ordering::Relaxed),
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            bypassed: self.bypassed.load(Ordering::Relaxed),
        }
    }

    /// Zero all counters
    pub fn reset(&self) {
        self.attempts.store(0, Ordering::Relaxed);
        self.accepted.store(0, Ordering::Relaxed);
        self.rejected.store(0, Ordering::Relaxed);
        self.bypassed.store(0, Ordering::Relaxed);
    }
}

impl RejectionObserver for RejectionStats {
    fn record(&self, outcome: RejectionOutcome) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        let counter = match outcome {
            RejectionOutcome::Accepted => &self.accepted,
            RejectionOutcome::Rejected => &self.rejected,
            RejectionOutcome::Bypassed => &self.bypassed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Point-in-time counter values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionSnapshot {
    pub attempts: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub bypassed: u64,
}

impl RejectionSnapshot {
    /// Fraction of attempts rejected; 0 when nothing was recorded
    pub fn rejection_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.rejected as f64 / self.attempts as f64
        }
    }

    /// Fraction of attempts let through by a bypass
    pub fn bypass_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.bypassed as f64 / self.attempts as f64
        }
    }
}

impl fmt::Display for RejectionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attempts, {} accepted, {} rejected ({:.2}%), {} bypassed",
            self.attempts,
            self.accepted,
            self.rejected,
            self.rejection_rate() * 100.0,
            self.bypassed
        )
    }
}
