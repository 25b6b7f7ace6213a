use staking_payout_client::{ClientError, PayoutClient};
use staking_payout_testing::{dev_signer, ledger_with, MockChain};

/// No active era aborts the claim flow before anything is submitted.
#[tokio::test]
async fn test_missing_active_era() {
    let chain = MockChain::new();
    chain.set_active_era(None);

    let client = PayoutClient::new(chain);
    let result = client.claim(&dev_signer("stash"), &"controller".into()).await;

    assert!(matches!(result, Err(ClientError::ActiveEraUnavailable)));
    assert!(client.api().submissions().is_empty());
}

/// A controller without a staking ledger aborts the claim flow before
/// anything is submitted.
#[tokio::test]
async fn test_missing_ledger() {
    let chain = MockChain::new();
    chain.set_active_era(Some(100));
    chain.set_ledger(&"someone-else".into(), ledger_with("stash", vec![90]));

    let client = PayoutClient::new(chain);
    let controller = "controller".into();
    let result = client.claim(&dev_signer("stash"), &controller).await;

    match result {
        Err(ClientError::LedgerUnavailable(who)) => assert_eq!(who, controller),
        other => panic!("expected LedgerUnavailable, got {other:?}"),
    }
    assert!(client.api().submissions().is_empty());
}
