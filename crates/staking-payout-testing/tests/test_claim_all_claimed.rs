use staking_payout_client::PayoutClient;
use staking_payout_testing::{dev_signer, ledger_with, MockChain};

/// A ledger whose high-water mark already touches the active era submits
/// nothing and returns cleanly.
#[tokio::test]
async fn test_claim_all_claimed() {
    let chain = MockChain::new();
    let controller = "controller".into();
    chain.set_active_era(Some(100));
    chain.set_ledger(&controller, ledger_with("stash", vec![97, 98, 99]));

    let client = PayoutClient::new(chain);
    let summary = client.claim(&dev_signer("stash"), &controller).await.unwrap();

    assert!(summary.batches.is_empty());
    assert!(client.api().submissions().is_empty());
}

/// The high-water mark can sit numerically at or past the active era; the
/// unclaimed count goes negative and the run still returns cleanly.
#[tokio::test]
async fn test_claim_mark_past_active_era() {
    let chain = MockChain::new();
    let controller = "controller".into();
    chain.set_active_era(Some(100));
    chain.set_ledger(&controller, ledger_with("stash", vec![102]));

    let client = PayoutClient::new(chain);
    let summary = client.claim(&dev_signer("stash"), &controller).await.unwrap();

    assert!(summary.batches.is_empty());
    assert!(client.api().submissions().is_empty());
}
