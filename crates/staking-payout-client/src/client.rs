use std::ops::RangeInclusive;

use staking_payout_chain_api::{
    AccountId, Balance, Call, ChainApi, EraIndex, Keystore, Mortality, Signer, TxOptions,
};
use tracing::{debug, info, warn};

use crate::batches;
use crate::config::{BatchFailurePolicy, ClientConfig, SubmissionErrorPolicy};
use crate::error::{ClientError, ClientResult};
use crate::tracker::{self, TxOutcome};

/// Identity of the node on the other end of the collaborator.
#[derive(Debug, Clone)]
pub struct NodeIdentity {
    pub chain: String,
    pub node_name: String,
    pub node_version: String,
}

/// Resolution of one claim window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Era window the batch covered, fixed before exposure filtering.
    pub eras: RangeInclusive<EraIndex>,
    /// Claim operations that survived the exposure filter.
    pub submitted_claims: usize,
    pub outcome: TxOutcome,
}

/// Typed result of a claim run: what was computed and how each batch
/// resolved, in submission order.
#[derive(Debug, Clone)]
pub struct ClaimSummary {
    pub active_era: EraIndex,
    /// High-water mark the unclaimed range was computed from.
    pub last_claimed: EraIndex,
    pub batches: Vec<BatchOutcome>,
}

impl ClaimSummary {
    pub fn failed_batches(&self) -> usize {
        self.batches
            .iter()
            .filter(|b| b.outcome.is_failure())
            .count()
    }
}

/// Client-side controller for value transfers and reward claims.
///
/// One instance drives one [`ChainApi`] collaborator. Operations are
/// sequential per call; nothing here parallelizes submissions for the same
/// sender.
pub struct PayoutClient<C> {
    api: C,
    config: ClientConfig,
}

impl<C: ChainApi> PayoutClient<C> {
    /// Create a client with default configuration.
    pub fn new(api: C) -> Self {
        Self {
            api,
            config: ClientConfig::default(),
        }
    }

    /// Create a client with custom configuration.
    pub fn with_config(api: C, config: ClientConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Probe the node's identity. The three probes are read-only and
    /// order-independent, so they run concurrently.
    pub async fn identify(&self) -> ClientResult<NodeIdentity> {
        let (chain, node_name, node_version) = futures::try_join!(
            self.api.system_chain(),
            self.api.system_name(),
            self.api.system_version(),
        )?;
        info!(%chain, %node_name, %node_version, "connected");
        Ok(NodeIdentity {
            chain,
            node_name,
            node_version,
        })
    }

    /// Free balance of an account.
    pub async fn balance_of(&self, who: &AccountId) -> ClientResult<Balance> {
        Ok(self.api.account_info(who).await?.free)
    }

    /// Free balance of the account a keystore file belongs to.
    pub async fn balance_of_keystore(&self, keystore: &Keystore) -> ClientResult<Balance> {
        let content = keystore.read_content()?;
        self.balance_of(&AccountId::new(content.address)).await
    }

    /// Transfer `amount` to `dest` and track the submission to a terminal
    /// outcome. A zero amount is a no-op reported as
    /// [`TxOutcome::Skipped`], with no RPC traffic.
    pub async fn transfer(
        &self,
        signer: &Signer,
        dest: &AccountId,
        amount: Balance,
    ) -> ClientResult<TxOutcome> {
        self.send_transfer(signer, dest, amount, false).await
    }

    /// Like [`transfer`](PayoutClient::transfer), but refuses to reap the
    /// sender.
    pub async fn transfer_keep_alive(
        &self,
        signer: &Signer,
        dest: &AccountId,
        amount: Balance,
    ) -> ClientResult<TxOutcome> {
        self.send_transfer(signer, dest, amount, true).await
    }

    async fn send_transfer(
        &self,
        signer: &Signer,
        dest: &AccountId,
        amount: Balance,
        keep_alive: bool,
    ) -> ClientResult<TxOutcome> {
        if amount == 0 {
            debug!(%dest, "zero-amount transfer, nothing to submit");
            return Ok(TxOutcome::Skipped);
        }

        info!(from = %signer.address(), %dest, amount, "sending transfer");
        let call = Call::transfer(dest.clone(), amount, keep_alive);
        self.submit_and_track(signer, &call).await
    }

    /// Claim every unclaimed reward era for `controller`'s staking ledger,
    /// in bounded batches, sequentially.
    ///
    /// Fails fast when the chain reports no active era or the controller
    /// has no ledger. Batch-level failures are policy-driven; see
    /// [`BatchFailurePolicy`].
    pub async fn claim(&self, signer: &Signer, controller: &AccountId) -> ClientResult<ClaimSummary> {
        let active_era = self
            .api
            .active_era()
            .await?
            .ok_or(ClientError::ActiveEraUnavailable)?;
        let ledger = self
            .api
            .staking_ledger(controller)
            .await?
            .ok_or_else(|| ClientError::LedgerUnavailable(controller.clone()))?;

        // The record's top entry is the exclusive lower bound of the
        // unclaimed range; an empty record falls back to the oldest era
        // the chain still has reward data for.
        let last_claimed = match ledger.last_claimed_era() {
            Some(era) => era,
            None => self.api.history_depth().await?,
        };

        let eras = batches::unclaimed_eras(last_claimed, active_era);
        if eras.is_empty() {
            info!(%controller, active_era, last_claimed, "all rewards already claimed");
            return Ok(ClaimSummary {
                active_era,
                last_claimed,
                batches: Vec::new(),
            });
        }
        info!(
            %controller,
            active_era,
            last_claimed,
            unclaimed = eras.len(),
            "claiming rewards"
        );

        let windows = batches::claim_windows(&eras, self.config.max_batch_claims);
        let total = windows.len();
        let mut outcomes: Vec<BatchOutcome> = Vec::with_capacity(total);

        for (index, window) in windows.into_iter().enumerate() {
            let eras_span = window[0]..=window[window.len() - 1];

            let mut calls = Vec::with_capacity(window.len());
            for &era in &window {
                let exposure = self.api.era_exposure(era, &ledger.stash).await?;
                if exposure.is_eligible() {
                    calls.push(Call::payout_stakers(ledger.stash.clone(), era));
                } else {
                    debug!(era, stash = %ledger.stash, "no exposure, dropping era from batch");
                }
            }

            let submitted_claims = calls.len();
            info!(
                batch = index + 1,
                total,
                eras = ?eras_span,
                claims = submitted_claims,
                "submitting claim batch"
            );
            let outcome = self.submit_and_track(signer, &Call::batch(calls)).await?;

            let failed = outcome.is_failure();
            outcomes.push(BatchOutcome {
                eras: eras_span,
                submitted_claims,
                outcome,
            });

            if failed && self.config.batch_failure_policy == BatchFailurePolicy::AbortOnFailure {
                warn!(batch = index + 1, total, "batch failed, aborting remaining batches");
                break;
            }
        }

        let summary = ClaimSummary {
            active_era,
            last_claimed,
            batches: outcomes,
        };
        info!(
            %controller,
            batches = summary.batches.len(),
            failed = summary.failed_batches(),
            "claim run complete"
        );
        Ok(summary)
    }

    /// Snapshot the sender's nonce, sign and submit, then wait for a
    /// terminal status within the configured ceiling.
    async fn submit_and_track(&self, signer: &Signer, call: &Call) -> ClientResult<TxOutcome> {
        let sender = signer.address();
        // Nonce is read immediately before submission; concurrent
        // submissions for the same sender would race on it.
        let account = self.api.account_info(&sender).await?;
        let checkpoint = self.api.genesis_hash().await?;
        let options = TxOptions {
            checkpoint,
            mortality: Mortality::Immortal,
            nonce: account.nonce,
        };

        let statuses = match self.api.sign_and_submit(signer, call, &options).await {
            Ok(statuses) => statuses,
            Err(err) => match self.config.submission_error_policy {
                SubmissionErrorPolicy::Capture => {
                    warn!(%sender, error = %err, "submission rejected");
                    return Ok(TxOutcome::SubmitFailed {
                        reason: err.to_string(),
                    });
                }
                SubmissionErrorPolicy::Propagate => {
                    return Err(ClientError::SubmissionRejected(err))
                }
            },
        };

        Ok(tracker::track(statuses, self.config.tx_timeout).await)
    }
}
