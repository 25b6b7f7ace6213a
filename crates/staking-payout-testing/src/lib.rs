/*!
# Staking Payout Testing

A scripted, in-memory [`ChainApi`] collaborator for exercising the payout
client without a node, plus fixture helpers shared by the integration
scenarios under `tests/`.

[`MockChain`] serves chain state from plain maps and resolves each
submission's status stream according to a [`StatusScript`], recording every
submission (signer, call, options) for assertion.
*/

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use staking_payout_chain_api::{
    AccountId, AccountInfo, Balance, BlockHash, Call, ChainApi, ChainError, ChainResult, EraIndex,
    EventRecord, Exposure, KeystoreContent, KeystoreEncoding, Nonce, Signer, StakingLedger,
    StatusStream, TxOptions, TxStatus,
};
use tokio::sync::mpsc::{self, UnboundedSender};

pub const MOCK_CHAIN: &str = "Development";
pub const MOCK_NODE_NAME: &str = "mock-node";
pub const MOCK_NODE_VERSION: &str = "0.1.0";
pub const MOCK_GENESIS_HASH: &str = "0xgenesis";

/// How the mock resolves one submission's status stream.
#[derive(Debug, Clone)]
pub enum StatusScript {
    /// Ready, Broadcast, InBlock, then Finalized carrying a success or
    /// failure dispatch event.
    Finalize { success: bool },
    /// Immediate Invalid.
    Invalid,
    /// Refuse the submission before it enters the pool.
    Reject { reason: String },
    /// Transient statuses only; the sender is parked so the stream never
    /// closes and never turns terminal.
    Silent,
}

/// One recorded submission.
#[derive(Debug, Clone)]
pub struct SubmittedTx {
    pub signer: AccountId,
    pub call: Call,
    pub options: TxOptions,
}

struct MockState {
    active_era: Option<EraIndex>,
    history_depth: EraIndex,
    ledgers: HashMap<String, StakingLedger>,
    exposures: HashMap<(EraIndex, String), Exposure>,
    default_exposure: Exposure,
    accounts: HashMap<String, AccountInfo>,
    scripts: VecDeque<StatusScript>,
    default_script: StatusScript,
    submissions: Vec<SubmittedTx>,
    parked_senders: Vec<UnboundedSender<TxStatus>>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            active_era: None,
            history_depth: 84,
            ledgers: HashMap::new(),
            exposures: HashMap::new(),
            default_exposure: Exposure {
                total: 1_000,
                own: 1_000,
            },
            accounts: HashMap::new(),
            scripts: VecDeque::new(),
            default_script: StatusScript::Finalize { success: true },
            submissions: Vec::new(),
            parked_senders: Vec::new(),
        }
    }
}

/// Scripted in-memory node collaborator.
pub struct MockChain {
    state: Mutex<MockState>,
}

impl Default for MockChain {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
        }
    }

    pub fn set_active_era(&self, era: Option<EraIndex>) {
        self.state.lock().unwrap().active_era = era;
    }

    pub fn set_history_depth(&self, depth: EraIndex) {
        self.state.lock().unwrap().history_depth = depth;
    }

    pub fn set_ledger(&self, controller: &AccountId, ledger: StakingLedger) {
        self.state
            .lock()
            .unwrap()
            .ledgers
            .insert(controller.as_str().to_owned(), ledger);
    }

    /// Override the exposure for one (era, stash) pair. Pairs without an
    /// override use the default exposure, which is eligible.
    pub fn set_exposure(&self, era: EraIndex, stash: &AccountId, total: Balance) {
        self.state.lock().unwrap().exposures.insert(
            (era, stash.as_str().to_owned()),
            Exposure { total, own: total },
        );
    }

    pub fn set_account(&self, who: &AccountId, nonce: Nonce, free: Balance) {
        self.state
            .lock()
            .unwrap()
            .accounts
            .insert(who.as_str().to_owned(), AccountInfo { nonce, free });
    }

    /// Script used when the per-submission queue is empty.
    pub fn set_default_script(&self, script: StatusScript) {
        self.state.lock().unwrap().default_script = script;
    }

    /// Queue a script for the next submission; consumed in order.
    pub fn push_script(&self, script: StatusScript) {
        self.state.lock().unwrap().scripts.push_back(script);
    }

    pub fn submissions(&self) -> Vec<SubmittedTx> {
        self.state.lock().unwrap().submissions.clone()
    }
}

#[async_trait]
impl ChainApi for MockChain {
    async fn system_chain(&self) -> ChainResult<String> {
        Ok(MOCK_CHAIN.to_owned())
    }

    async fn system_name(&self) -> ChainResult<String> {
        Ok(MOCK_NODE_NAME.to_owned())
    }

    async fn system_version(&self) -> ChainResult<String> {
        Ok(MOCK_NODE_VERSION.to_owned())
    }

    async fn genesis_hash(&self) -> ChainResult<BlockHash> {
        Ok(BlockHash(MOCK_GENESIS_HASH.to_owned()))
    }

    async fn account_info(&self, who: &AccountId) -> ChainResult<AccountInfo> {
        let state = self.state.lock().unwrap();
        Ok(state.accounts.get(who.as_str()).cloned().unwrap_or_default())
    }

    async fn active_era(&self) -> ChainResult<Option<EraIndex>> {
        Ok(self.state.lock().unwrap().active_era)
    }

    async fn history_depth(&self) -> ChainResult<EraIndex> {
        Ok(self.state.lock().unwrap().history_depth)
    }

    async fn staking_ledger(&self, controller: &AccountId) -> ChainResult<Option<StakingLedger>> {
        let state = self.state.lock().unwrap();
        Ok(state.ledgers.get(controller.as_str()).cloned())
    }

    async fn era_exposure(&self, era: EraIndex, stash: &AccountId) -> ChainResult<Exposure> {
        let state = self.state.lock().unwrap();
        Ok(state
            .exposures
            .get(&(era, stash.as_str().to_owned()))
            .copied()
            .unwrap_or(state.default_exposure))
    }

    async fn sign_and_submit(
        &self,
        signer: &Signer,
        call: &Call,
        options: &TxOptions,
    ) -> ChainResult<StatusStream> {
        let mut state = self.state.lock().unwrap();
        state.submissions.push(SubmittedTx {
            signer: signer.address(),
            call: call.clone(),
            options: options.clone(),
        });
        let index = state.submissions.len();
        let script = state
            .scripts
            .pop_front()
            .unwrap_or_else(|| state.default_script.clone());

        let (tx, rx) = mpsc::unbounded_channel();
        let block = BlockHash(format!("0xblock{index}"));
        match script {
            StatusScript::Reject { reason } => return Err(ChainError::Rpc(reason)),
            StatusScript::Invalid => {
                let _ = tx.send(TxStatus::Invalid);
            }
            StatusScript::Finalize { success } => {
                let _ = tx.send(TxStatus::Ready);
                let _ = tx.send(TxStatus::Broadcast);
                let _ = tx.send(TxStatus::InBlock(block.clone()));
                let event = if success {
                    EventRecord::success()
                } else {
                    EventRecord::failed()
                };
                let _ = tx.send(TxStatus::Finalized {
                    block,
                    events: vec![event],
                });
            }
            StatusScript::Silent => {
                let _ = tx.send(TxStatus::Ready);
                let _ = tx.send(TxStatus::Broadcast);
                state.parked_senders.push(tx.clone());
            }
        }
        Ok(rx)
    }
}

/// Signer backed by an in-memory keystore envelope; `name` doubles as the
/// account address.
pub fn dev_signer(name: &str) -> Signer {
    let content = KeystoreContent {
        address: name.to_owned(),
        encoded: "0x00".to_owned(),
        encoding: KeystoreEncoding {
            content: vec!["pkcs8".to_owned(), "sr25519".to_owned()],
            kind: vec!["scrypt".to_owned(), "xsalsa20-poly1305".to_owned()],
            version: "3".to_owned(),
        },
    };
    Signer::from_parts(content, "pass")
}

/// A bonded ledger with the given claimed-reward history.
pub fn ledger_with(stash: &str, claimed_rewards: Vec<EraIndex>) -> StakingLedger {
    StakingLedger {
        stash: AccountId::new(stash),
        total: 1_000_000,
        active: 1_000_000,
        claimed_rewards,
    }
}

/// Count the claim operations inside a recorded batch submission.
pub fn batch_claims(submission: &SubmittedTx) -> usize {
    match &submission.call {
        Call::Batch(calls) => calls.len(),
        other => panic!("expected a batch call, got {other:?}"),
    }
}

/// The eras named by the claim operations inside a recorded batch.
pub fn batch_eras(submission: &SubmittedTx) -> Vec<EraIndex> {
    match &submission.call {
        Call::Batch(calls) => calls
            .iter()
            .map(|call| match call {
                Call::PayoutStakers { era, .. } => *era,
                other => panic!("expected a payout call, got {other:?}"),
            })
            .collect(),
        other => panic!("expected a batch call, got {other:?}"),
    }
}
