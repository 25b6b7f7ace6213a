use staking_payout_chain_api::{AccountId, ChainError, KeystoreError};
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by payout client operations.
///
/// Submission rejections and terminal-wait timeouts are *not* errors by
/// default; they are reported as [`TxOutcome`](crate::TxOutcome) values.
/// `SubmissionRejected` only appears under
/// [`SubmissionErrorPolicy::Propagate`](crate::SubmissionErrorPolicy::Propagate).
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("chain api error: {0}")]
    Chain(#[from] ChainError),

    #[error("keystore error: {0}")]
    Keystore(#[from] KeystoreError),

    #[error("chain reports no active era")]
    ActiveEraUnavailable,

    #[error("no staking ledger for controller {0}")]
    LedgerUnavailable(AccountId),

    #[error("submission rejected: {0}")]
    SubmissionRejected(ChainError),
}
