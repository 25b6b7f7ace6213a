use std::time::Duration;

/// What to do when one batch in a claim run fails or times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFailurePolicy {
    /// Keep submitting the remaining batches. Later eras can still pay out
    /// even when an earlier window did not resolve.
    ContinueOnFailure,
    /// Stop at the first failed batch and report what ran.
    AbortOnFailure,
}

/// What to do when the node rejects a submission outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionErrorPolicy {
    /// Log the rejection and report it as a [`TxOutcome::SubmitFailed`]
    /// outcome, leaving the decision to the caller.
    ///
    /// [`TxOutcome::SubmitFailed`]: crate::TxOutcome::SubmitFailed
    Capture,
    /// Return the rejection as an error.
    Propagate,
}

/// Configuration for payout client operations.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// How long to wait for a submission to reach a terminal status.
    pub tx_timeout: Duration,

    /// Maximum claim operations packed into one batched submission.
    pub max_batch_claims: usize,

    /// Behavior of the sequential claim loop when a batch fails.
    pub batch_failure_policy: BatchFailurePolicy,

    /// Behavior when the node rejects a submission.
    pub submission_error_policy: SubmissionErrorPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tx_timeout: Duration::from_secs(120),
            max_batch_claims: 9,
            batch_failure_policy: BatchFailurePolicy::ContinueOnFailure,
            submission_error_policy: SubmissionErrorPolicy::Capture,
        }
    }
}
