use std::time::{Duration, Instant};

use staking_payout_client::{ClientConfig, PayoutClient, TxOutcome};
use staking_payout_testing::{dev_signer, MockChain, StatusScript};

/// A status stream that never turns terminal resolves to `TimedOut` once
/// the configured ceiling elapses; the wait neither hangs nor errors.
#[tokio::test]
async fn test_transfer_timeout() {
    let chain = MockChain::new();
    chain.set_default_script(StatusScript::Silent);

    let config = ClientConfig {
        tx_timeout: Duration::from_millis(300),
        ..Default::default()
    };
    let client = PayoutClient::with_config(chain, config);

    let started = Instant::now();
    let outcome = client
        .transfer(&dev_signer("alice"), &"bob".into(), 1_000)
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(outcome, TxOutcome::TimedOut);
    assert!(outcome.is_failure());
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_secs(3));
    assert_eq!(client.api().submissions().len(), 1);
}
