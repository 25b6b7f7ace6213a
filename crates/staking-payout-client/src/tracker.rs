use std::time::Duration;

use staking_payout_chain_api::{BlockHash, EventMethod, EventRecord, StatusStream, TxStatus};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

/// Dispatch outcome recorded in a submission's finalization events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// An `ExtrinsicSuccess` event was present.
    Success,
    /// An `ExtrinsicFailed` event was present.
    Failed,
    /// Neither event was delivered with the finalization.
    Unknown,
}

/// Terminal outcome of one send or batch submission.
///
/// Finalization is terminal regardless of the dispatch outcome: a
/// finalized-but-failed operation is settled chain history, and its
/// `dispatch` field is the only place the failure shows up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxOutcome {
    /// Nothing was submitted; the operation was a no-op (zero-amount
    /// transfer).
    Skipped,
    /// The node rejected the submission before it entered the pool.
    SubmitFailed { reason: String },
    /// The node reported the operation invalid; no inclusion will follow.
    Invalid,
    /// The operation is irreversibly included.
    Finalized {
        block: BlockHash,
        dispatch: DispatchResult,
    },
    /// No terminal status arrived within the configured ceiling. The
    /// operation may still finalize later; the caller cannot tell from
    /// here.
    TimedOut,
}

impl TxOutcome {
    /// Whether the submission demonstrably did not take effect. A timed-out
    /// wait counts as failure for policy purposes even though the
    /// operation may still land.
    pub fn is_failure(&self) -> bool {
        match self {
            TxOutcome::Skipped => false,
            TxOutcome::SubmitFailed { .. } | TxOutcome::Invalid | TxOutcome::TimedOut => true,
            TxOutcome::Finalized { dispatch, .. } => *dispatch == DispatchResult::Failed,
        }
    }
}

/// Drain a status subscription until a terminal status or the deadline,
/// whichever comes first.
pub(crate) async fn track(mut statuses: StatusStream, timeout: Duration) -> TxOutcome {
    let deadline = Instant::now() + timeout;
    loop {
        let status = match time::timeout_at(deadline, statuses.recv()).await {
            Err(_) => {
                warn!(?timeout, "no terminal status within ceiling");
                return TxOutcome::TimedOut;
            }
            Ok(None) => {
                // Subscription gone; the outcome is unknowable before the
                // deadline, so hold the wait to its ceiling.
                debug!("status subscription closed before a terminal status");
                time::sleep_until(deadline).await;
                warn!(?timeout, "no terminal status within ceiling");
                return TxOutcome::TimedOut;
            }
            Ok(Some(status)) => status,
        };

        match status {
            TxStatus::Invalid => {
                warn!("transaction invalid");
                return TxOutcome::Invalid;
            }
            TxStatus::Ready => debug!("transaction ready"),
            TxStatus::Broadcast => debug!("transaction broadcast"),
            TxStatus::InBlock(block) => info!(%block, "transaction included"),
            TxStatus::Finalized { block, events } => {
                let dispatch = dispatch_result(&events);
                match dispatch {
                    DispatchResult::Success => info!(%block, "transaction finalized, succeeded"),
                    DispatchResult::Failed => warn!(%block, "transaction finalized, failed"),
                    DispatchResult::Unknown => info!(%block, "transaction finalized"),
                }
                return TxOutcome::Finalized { block, dispatch };
            }
        }
    }
}

fn dispatch_result(events: &[EventRecord]) -> DispatchResult {
    let mut result = DispatchResult::Unknown;
    for event in events {
        match event.method {
            EventMethod::ExtrinsicSuccess => result = DispatchResult::Success,
            EventMethod::ExtrinsicFailed => return DispatchResult::Failed,
            EventMethod::Other(_) => {}
        }
    }
    result
}
