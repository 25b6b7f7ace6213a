use crate::Balance;

/// Smallest balance a funding account is expected to keep, so it can cover
/// fees for its own future submissions.
pub const MIN_SENDER_BALANCE: Balance = 1_000_000_000_000;
