/*!
# Staking Payout Chain API

Node-facing collaborator interface for the staking-payout client: the typed
data model of the target ledger (eras, balances, ledgers, exposures,
transaction statuses) and the [`ChainApi`] trait the payout client drives.

This crate owns no transport. Connecting to a node, decrypting key material
and producing signatures all live behind [`ChainApi`] implementations; the
types here are what flows across that seam.

## Status subscriptions

[`ChainApi::sign_and_submit`] returns a [`StatusStream`] immediately; the
node's lifecycle notifications for that submission are delivered through it
asynchronously until a terminal status ([`TxStatus::Invalid`] or
[`TxStatus::Finalized`]) is reached.
*/

mod api;
mod constants;
mod error;
mod keystore;
mod types;

pub use api::{ChainApi, StatusStream};
pub use constants::MIN_SENDER_BALANCE;
pub use error::{ChainError, ChainResult, KeystoreError, KeystoreResult};
pub use keystore::{Keystore, KeystoreContent, KeystoreEncoding, Signer};
pub use types::{
    AccountId, AccountInfo, Balance, BlockHash, Call, EraIndex, EventMethod, EventRecord,
    Exposure, Mortality, Nonce, StakingLedger, TxOptions, TxStatus,
};
