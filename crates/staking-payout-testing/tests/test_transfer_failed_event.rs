use staking_payout_client::{DispatchResult, PayoutClient, TxOutcome};
use staking_payout_testing::{dev_signer, MockChain, StatusScript};

/// Finalization with an `ExtrinsicFailed` event still resolves the wait;
/// the failure shows up only in the dispatch result.
#[tokio::test]
async fn test_transfer_failed_event() {
    let chain = MockChain::new();
    chain.push_script(StatusScript::Finalize { success: false });

    let client = PayoutClient::new(chain);
    let outcome = client
        .transfer(&dev_signer("alice"), &"bob".into(), 1_000)
        .await
        .unwrap();

    match &outcome {
        TxOutcome::Finalized { dispatch, .. } => {
            assert_eq!(*dispatch, DispatchResult::Failed);
        }
        other => panic!("expected a finalized outcome, got {other:?}"),
    }
    assert!(outcome.is_failure());
}
