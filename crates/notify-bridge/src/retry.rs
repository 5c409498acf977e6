//! Bounded-retry scheduler for arming late-bound page patches.
//!
//! Fixed-interval attempts with an explicit budget, terminating on
//! success, cancellation, or exhaustion. The hosted page may
//! legitimately never define an integration point in a session, so
//! exhaustion is silent apart from a debug line.

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Result of a single installation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Target wrapped, or found already wrapped. Stop retrying.
    Installed,
    /// Target not present yet. Try again.
    Pending,
}

/// How a retry loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome {
    Installed,
    Exhausted,
    Cancelled,
}

/// Fixed interval and attempt budget for one patch target.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

/// Run `probe` at a fixed interval until it reports [`Probe::Installed`],
/// the budget is exhausted, or `cancel` fires. The first attempt runs
/// immediately.
pub async fn run<F>(
    name: &str,
    policy: RetryPolicy,
    cancel: CancellationToken,
    mut probe: F,
) -> RetryOutcome
where
    F: FnMut() -> Probe,
{
    let budget = policy.max_attempts.max(1);

    for attempt in 1..=budget {
        if cancel.is_cancelled() {
            tracing::debug!("{name}: install loop cancelled");
            return RetryOutcome::Cancelled;
        }

        if probe() == Probe::Installed {
            tracing::debug!("{name}: installed after {attempt} attempt(s)");
            return RetryOutcome::Installed;
        }

        if attempt == budget {
            break;
        }

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("{name}: install loop cancelled");
                return RetryOutcome::Cancelled;
            }
            _ = sleep(policy.interval) => {}
        }
    }

    tracing::debug!("{name}: target never appeared within {budget} attempts");
    RetryOutcome::Exhausted
}
