use staking_payout_client::{DispatchResult, PayoutClient, TxOutcome};
use staking_payout_testing::{batch_claims, batch_eras, dev_signer, ledger_with, MockChain};

/// 23 unclaimed eras split into sequential batches of at most 9 claims.
///
/// Flow:
/// 1. Ledger claimed through era 100, active era 124.
/// 2. Claim run produces exactly three batches sized 9, 9, 5.
/// 3. Batches cover eras 101..=123 in order, no gaps, no overlaps.
#[tokio::test]
async fn test_claim_batch_partitioning() {
    let chain = MockChain::new();
    let controller = "controller".into();
    chain.set_active_era(Some(124));
    chain.set_ledger(&controller, ledger_with("stash", (90..=100).collect()));

    let client = PayoutClient::new(chain);
    let summary = client.claim(&dev_signer("stash"), &controller).await.unwrap();

    assert_eq!(summary.active_era, 124);
    assert_eq!(summary.last_claimed, 100);

    let submissions = client.api().submissions();
    assert_eq!(submissions.len(), 3);

    let sizes: Vec<usize> = submissions.iter().map(batch_claims).collect();
    assert_eq!(sizes, vec![9, 9, 5]);

    let claimed: Vec<u32> = submissions.iter().flat_map(|s| batch_eras(s)).collect();
    let expected: Vec<u32> = (101..=123).collect();
    assert_eq!(claimed, expected);

    assert_eq!(summary.batches.len(), 3);
    assert_eq!(summary.batches[0].eras, 101..=109);
    assert_eq!(summary.batches[1].eras, 110..=118);
    assert_eq!(summary.batches[2].eras, 119..=123);
    assert!(summary.batches.iter().all(|b| matches!(
        b.outcome,
        TxOutcome::Finalized {
            dispatch: DispatchResult::Success,
            ..
        }
    )));
    assert_eq!(summary.failed_batches(), 0);
}
