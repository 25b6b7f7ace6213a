use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::{
    AccountId, AccountInfo, BlockHash, Call, ChainResult, EraIndex, Exposure, Signer,
    StakingLedger, TxOptions, TxStatus,
};

/// Lifecycle notifications for one submission, delivered asynchronously by
/// the node. The stream ends after a terminal status (or when the node
/// drops the subscription).
pub type StatusStream = mpsc::UnboundedReceiver<TxStatus>;

/// The node collaborator the payout client drives.
///
/// Implementations own the RPC connection, state queries, operation
/// encoding, key decryption and signing. All methods are read-only against
/// chain state except [`sign_and_submit`](ChainApi::sign_and_submit).
#[async_trait]
pub trait ChainApi: Send + Sync {
    /// Chain name, e.g. `Polkadot`.
    async fn system_chain(&self) -> ChainResult<String>;

    /// Node implementation name.
    async fn system_name(&self) -> ChainResult<String>;

    /// Node implementation version.
    async fn system_version(&self) -> ChainResult<String>;

    /// Genesis block hash, used as the checkpoint for immortal submissions.
    async fn genesis_hash(&self) -> ChainResult<BlockHash>;

    /// Current nonce and free balance of an account.
    async fn account_info(&self, who: &AccountId) -> ChainResult<AccountInfo>;

    /// Index of the active reward era, if the chain reports one.
    async fn active_era(&self) -> ChainResult<Option<EraIndex>>;

    /// Oldest era the chain still retains reward data for.
    async fn history_depth(&self) -> ChainResult<EraIndex>;

    /// Staking ledger of a controller account, if it has one.
    async fn staking_ledger(&self, controller: &AccountId) -> ChainResult<Option<StakingLedger>>;

    /// Stake backing `stash` in `era`.
    async fn era_exposure(&self, era: EraIndex, stash: &AccountId) -> ChainResult<Exposure>;

    /// Sign `call` with the signer's key material under `options` and
    /// submit it. Returns the status subscription immediately; an `Err`
    /// means the operation never reached the node's pool.
    async fn sign_and_submit(
        &self,
        signer: &Signer,
        call: &Call,
        options: &TxOptions,
    ) -> ChainResult<StatusStream>;
}
