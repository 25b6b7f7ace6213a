/*!
# Staking Payout Client

Submits value transfers and reward claims to a remote ledger node through a
[`ChainApi`] collaborator, tracks every submission to a terminal outcome,
and plans unclaimed-reward claims into bounded, sequentially submitted
batches.

## Quick Start

```rust,no_run
use staking_payout_client::PayoutClient;
use staking_payout_chain_api::{AccountId, ChainApi, Keystore};

# async fn example(api: impl ChainApi) -> Result<(), Box<dyn std::error::Error>> {
let client = PayoutClient::new(api);
client.identify().await?;

let keystore = Keystore::new("validator.json", "validator.pass");
let signer = keystore.unlock()?;

// Claim every unclaimed reward era, nine claims per batch, one batch at
// a time.
let summary = client.claim(&signer, &AccountId::new("controller-address")).await?;
println!(
    "submitted {} batches, {} failed",
    summary.batches.len(),
    summary.failed_batches()
);
# Ok(())
# }
```

## Custom Configuration

```rust,no_run
use std::time::Duration;
use staking_payout_client::{BatchFailurePolicy, ClientConfig, PayoutClient};
use staking_payout_chain_api::ChainApi;

# fn example(api: impl ChainApi) {
let config = ClientConfig {
    tx_timeout: Duration::from_secs(48),
    batch_failure_policy: BatchFailurePolicy::AbortOnFailure,
    ..Default::default()
};
let client = PayoutClient::with_config(api, config);
# }
```

## Outcomes, not silence

Every send resolves to a [`TxOutcome`]: finalized (with its dispatch
result), invalid, rejected at submission, or timed out. Submission
rejections and timeouts never panic the batch loop; whether a rejection is
returned as an error and whether a failed batch halts the remaining ones
are both [`ClientConfig`] policies.
*/

mod batches;
mod client;
mod config;
mod error;
mod tracker;

pub use client::{BatchOutcome, ClaimSummary, NodeIdentity, PayoutClient};
pub use config::{BatchFailurePolicy, ClientConfig, SubmissionErrorPolicy};
pub use error::{ClientError, ClientResult};
pub use tracker::{DispatchResult, TxOutcome};

// Re-export the collaborator surface for convenience
pub use staking_payout_chain_api::{
    AccountId, Balance, BlockHash, Call, ChainApi, EraIndex, Keystore, Signer, StatusStream,
    TxStatus,
};
