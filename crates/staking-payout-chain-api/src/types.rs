use std::fmt;

/// Discrete reward epoch index. Monotonically increasing on-chain.
pub type EraIndex = u32;

/// Balance in the ledger's smallest unit.
pub type Balance = u128;

/// Per-account transaction counter used for replay protection.
pub type Nonce = u64;

/// Opaque ledger participant identifier, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(addr: &str) -> Self {
        Self(addr.to_owned())
    }
}

impl From<String> for AccountId {
    fn from(addr: String) -> Self {
        Self(addr)
    }
}

/// Block reference as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHash(pub String);

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of an account's system state.
#[derive(Debug, Clone, Default)]
pub struct AccountInfo {
    /// Next valid transaction nonce for the account.
    pub nonce: Nonce,
    /// Free (transferable) balance.
    pub free: Balance,
}

/// Per-participant staking record.
///
/// `claimed_rewards` is ordered ascending by era, exactly as the chain
/// reports it; the highest entry is the claim high-water mark.
#[derive(Debug, Clone)]
pub struct StakingLedger {
    /// Stash account the ledger belongs to.
    pub stash: AccountId,
    /// Total bonded balance.
    pub total: Balance,
    /// Actively staked balance.
    pub active: Balance,
    /// Eras whose rewards have already been paid out.
    pub claimed_rewards: Vec<EraIndex>,
}

impl StakingLedger {
    /// Highest era already paid out, if any rewards were ever claimed.
    pub fn last_claimed_era(&self) -> Option<EraIndex> {
        self.claimed_rewards.last().copied()
    }
}

/// Stake backing a participant in one era.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exposure {
    /// Total stake behind the participant, own plus nominated.
    pub total: Balance,
    /// The participant's own stake.
    pub own: Balance,
}

impl Exposure {
    /// Whether the participant has anything to claim for the era.
    pub fn is_eligible(&self) -> bool {
        self.total > 0
    }
}

/// Event discriminator attached to a finalized submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventMethod {
    ExtrinsicSuccess,
    ExtrinsicFailed,
    Other(String),
}

/// One runtime event from a finalized block, scoped to the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub method: EventMethod,
}

impl EventRecord {
    pub fn success() -> Self {
        Self {
            method: EventMethod::ExtrinsicSuccess,
        }
    }

    pub fn failed() -> Self {
        Self {
            method: EventMethod::ExtrinsicFailed,
        }
    }
}

/// Lifecycle status notification for one submitted operation.
///
/// `Invalid` and `Finalized` are terminal; the rest are informational and
/// carry no completion guarantee.
#[derive(Debug, Clone)]
pub enum TxStatus {
    /// The node rejected the operation as invalid; no inclusion will follow.
    Invalid,
    /// Accepted into the local pool.
    Ready,
    /// Gossiped to peers.
    Broadcast,
    /// Included in a (not yet final) block.
    InBlock(BlockHash),
    /// Irreversibly included; `events` are the dispatch events recorded for
    /// the operation.
    Finalized {
        block: BlockHash,
        events: Vec<EventRecord>,
    },
}

impl TxStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TxStatus::Invalid | TxStatus::Finalized { .. })
    }
}

/// A submittable state-change request, before signing.
///
/// Constructors mirror the operations the payout client needs; the
/// [`ChainApi`](crate::ChainApi) implementation encodes and signs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// Move `value` to `dest`. `keep_alive` refuses the transfer if it
    /// would reap the sender.
    Transfer {
        dest: AccountId,
        value: Balance,
        keep_alive: bool,
    },
    /// Pay out the rewards of `era` for `validator_stash` and its nominators.
    PayoutStakers {
        validator_stash: AccountId,
        era: EraIndex,
    },
    /// Submit `calls` as one atomic unit.
    Batch(Vec<Call>),
}

impl Call {
    pub fn transfer(dest: AccountId, value: Balance, keep_alive: bool) -> Self {
        Call::Transfer {
            dest,
            value,
            keep_alive,
        }
    }

    pub fn payout_stakers(validator_stash: AccountId, era: EraIndex) -> Self {
        Call::PayoutStakers {
            validator_stash,
            era,
        }
    }

    pub fn batch(calls: Vec<Call>) -> Self {
        Call::Batch(calls)
    }
}

/// Validity window of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mortality {
    /// Valid forever, checkpointed against the genesis block.
    Immortal,
    /// Valid for `period` blocks from the checkpoint.
    Mortal { period: u64 },
}

/// Signing options for one submission.
#[derive(Debug, Clone)]
pub struct TxOptions {
    /// Block the signature is checkpointed against.
    pub checkpoint: BlockHash,
    /// Validity window.
    pub mortality: Mortality,
    /// Sender nonce, snapshotted immediately before submission.
    pub nonce: Nonce,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(TxStatus::Invalid.is_terminal());
        assert!(TxStatus::Finalized {
            block: BlockHash("0xabc".into()),
            events: vec![],
        }
        .is_terminal());
        assert!(!TxStatus::Ready.is_terminal());
        assert!(!TxStatus::Broadcast.is_terminal());
        assert!(!TxStatus::InBlock(BlockHash("0xabc".into())).is_terminal());
    }

    #[test]
    fn ledger_high_water_mark() {
        let ledger = StakingLedger {
            stash: "stash".into(),
            total: 100,
            active: 100,
            claimed_rewards: vec![3, 4, 7],
        };
        assert_eq!(ledger.last_claimed_era(), Some(7));

        let empty = StakingLedger {
            claimed_rewards: vec![],
            ..ledger
        };
        assert_eq!(empty.last_claimed_era(), None);
    }

    #[test]
    fn exposure_eligibility() {
        assert!(!Exposure::default().is_eligible());
        assert!(Exposure { total: 1, own: 0 }.is_eligible());
    }
}
