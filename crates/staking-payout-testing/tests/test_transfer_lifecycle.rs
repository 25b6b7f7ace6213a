use staking_payout_chain_api::{Call, Mortality};
use staking_payout_client::{DispatchResult, PayoutClient, TxOutcome};
use staking_payout_testing::{dev_signer, MockChain, MOCK_GENESIS_HASH};

/// A transfer is signed with the sender's snapshotted nonce, an immortal
/// validity window checkpointed at genesis, and tracks through to a
/// successful finalization.
#[tokio::test]
async fn test_transfer_lifecycle() {
    let chain = MockChain::new();
    let sender = dev_signer("alice");
    let dest = "bob".into();
    chain.set_account(&sender.address(), 7, 5_000_000_000_000);

    let client = PayoutClient::new(chain);
    let outcome = client.transfer(&sender, &dest, 1_000).await.unwrap();

    assert!(matches!(
        outcome,
        TxOutcome::Finalized {
            dispatch: DispatchResult::Success,
            ..
        }
    ));

    let submissions = client.api().submissions();
    assert_eq!(submissions.len(), 1);
    let submitted = &submissions[0];

    assert_eq!(submitted.signer, sender.address());
    assert_eq!(submitted.options.nonce, 7);
    assert_eq!(submitted.options.checkpoint.0, MOCK_GENESIS_HASH);
    assert_eq!(submitted.options.mortality, Mortality::Immortal);
    assert_eq!(
        submitted.call,
        Call::Transfer {
            dest,
            value: 1_000,
            keep_alive: false,
        }
    );
}

/// The keep-alive variant carries the flag through to the built call.
#[tokio::test]
async fn test_transfer_keep_alive_sets_the_flag() {
    let chain = MockChain::new();
    let sender = dev_signer("alice");

    let client = PayoutClient::new(chain);
    client
        .transfer_keep_alive(&sender, &"bob".into(), 1_000)
        .await
        .unwrap();

    let submissions = client.api().submissions();
    assert!(matches!(
        submissions[0].call,
        Call::Transfer {
            keep_alive: true,
            ..
        }
    ));
}
