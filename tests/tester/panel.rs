// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{json, Value};

use pokt_tester::{AccountPanel, Method, SendForm, StakeForm};

use super::notifier::RecordingNotifier;
use super::provider::MockProvider;

type TestPanel = AccountPanel<MockProvider, RecordingNotifier>;

async fn mount(
    provider: MockProvider,
) -> (TestPanel, Arc<MockProvider>, Arc<RecordingNotifier>) {
    let provider = Arc::new(provider);
    let notifier = Arc::new(RecordingNotifier::default());
    let panel =
        AccountPanel::mount("addr1".into(), provider.clone(), notifier.clone())
            .await;
    (panel, provider, notifier)
}

#[tokio::test]
async fn mount_issues_four_reads() {
    let (_, provider, _) = mount(MockProvider::new()).await;

    let calls = provider.calls();
    assert_eq!(calls.len(), 4);

    let methods: HashSet<Method> = calls.iter().map(|(m, _)| *m).collect();
    let expected: HashSet<Method> = [
        Method::Chain,
        Method::Height,
        Method::Balance,
        Method::PublicKey,
    ]
    .into_iter()
    .collect();
    assert_eq!(methods, expected);

    let none: Vec<Value> = vec![];
    let by_address = vec![json!({"address": "addr1"})];
    assert_eq!(provider.calls_to(Method::Chain), vec![none.clone()]);
    assert_eq!(provider.calls_to(Method::Height), vec![none]);
    assert_eq!(provider.calls_to(Method::Balance), vec![by_address.clone()]);
    assert_eq!(provider.calls_to(Method::PublicKey), vec![by_address]);
}

#[tokio::test]
async fn mount_shows_account_details() {
    let provider = MockProvider::new()
        .respond(Method::Chain, json!({"chain": "testnet"}))
        .respond(Method::Height, json!({"height": 81234}))
        .respond(Method::Balance, json!({"balance": 42}))
        .respond(Method::PublicKey, json!({"publicKey": "a1b2"}));
    let (panel, _, notifier) = mount(provider).await;

    let details = panel.details();
    assert_eq!(details.chain, "testnet");
    assert_eq!(details.height, 81234);
    assert_eq!(details.public_key, "a1b2");
    assert_eq!(details.balance_text(), "42 uPOKT");

    let shown = panel.to_string();
    assert!(shown.contains("Pocket Network Chain: testnet"));
    assert!(shown.contains("Pocket Network Height: 81234"));
    assert!(shown.contains("POKT Account: addr1"));
    assert!(shown.contains("Account Balance: 42 uPOKT"));
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn missing_fields_fall_back_to_defaults() {
    let provider = MockProvider::new()
        .respond(Method::Chain, json!({}))
        .respond(Method::Height, json!({}))
        .respond(Method::Balance, json!({}));
    let (panel, _, notifier) = mount(provider).await;

    let details = panel.details();
    assert_eq!(details.chain, "");
    assert_eq!(details.height_text(), "");
    assert_eq!(details.balance_text(), "0 uPOKT");
    assert!(panel.to_string().contains("Account Balance: 0 uPOKT"));
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn numeric_strings_show_as_amounts() {
    let provider = MockProvider::new()
        .respond(Method::Height, json!({"height": "81234"}))
        .respond(Method::Balance, json!({"balance": "42"}));
    let (panel, _, notifier) = mount(provider).await;

    assert_eq!(panel.details().height, 81234);
    assert!(panel.to_string().contains("Account Balance: 42 uPOKT"));
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn chain_and_public_key_fail_silently() {
    let provider = MockProvider::new()
        .reject(Method::Chain, "chain unavailable")
        .reject(Method::PublicKey, "locked")
        .respond(Method::Balance, json!({"balance": 7}));
    let (panel, _, notifier) = mount(provider).await;

    assert!(notifier.alerts().is_empty());
    assert_eq!(panel.details().chain, "");
    assert_eq!(panel.details().public_key, "");
    assert_eq!(panel.details().balance, 7);
}

#[tokio::test]
async fn height_and_balance_failures_alert() {
    let provider = MockProvider::new()
        .reject(Method::Height, "node unreachable")
        .reject(Method::Balance, "unknown account");
    let (panel, _, notifier) = mount(provider).await;

    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 2);
    assert!(alerts.contains(&"Error:\n\nnode unreachable".to_string()));
    assert!(alerts.contains(&"Error:\n\nunknown account".to_string()));
    assert_eq!(panel.details().balance_text(), "0 uPOKT");
}

#[tokio::test]
async fn send_clears_the_form_on_success() {
    let provider = MockProvider::new()
        .respond(Method::SendTransaction, json!({"hash": "0xabc"}));
    let (mut panel, provider, notifier) = mount(provider).await;

    panel.send = SendForm {
        recipient: "addr2".into(),
        amount: "100".into(),
        memo: "hi".into(),
    };
    assert!(panel.submit_send().await);

    assert_eq!(
        provider.calls_to(Method::SendTransaction),
        vec![vec![json!({
            "amount": "100",
            "from": "addr1",
            "to": "addr2",
            "memo": "hi",
        })]]
    );
    assert_eq!(panel.send, SendForm::default());
    assert_eq!(panel.details().last_hash.as_deref(), Some("0xabc"));

    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("0xabc"));
}

#[tokio::test]
async fn send_keeps_the_form_on_failure() {
    let provider = MockProvider::new()
        .reject(Method::SendTransaction, "Insufficient funds");
    let (mut panel, _, notifier) = mount(provider).await;

    let form = SendForm {
        recipient: "addr2".into(),
        amount: "100000000".into(),
        memo: String::new(),
    };
    panel.send = form.clone();
    assert!(!panel.submit_send().await);

    assert_eq!(panel.send, form);
    assert_eq!(panel.details().last_hash, None);
    assert_eq!(notifier.alerts(), vec!["Error:\n\nInsufficient funds"]);
}

#[tokio::test]
async fn send_without_hash_is_a_failure() {
    let provider =
        MockProvider::new().respond(Method::SendTransaction, json!({}));
    let (mut panel, _, notifier) = mount(provider).await;

    panel.send.recipient = "addr2".into();
    panel.send.amount = "1".into();
    assert!(!panel.submit_send().await);

    assert_eq!(panel.send.recipient, "addr2");
    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("pokt_sendTransaction"));
}

#[tokio::test]
async fn sign_shows_the_signature() {
    let provider = MockProvider::new()
        .respond(Method::SignMessage, json!({"signature": "deadbeef"}));
    let (mut panel, provider, notifier) = mount(provider).await;

    panel.sign.message = "hello".into();
    assert!(panel.submit_sign().await);

    assert_eq!(
        provider.calls_to(Method::SignMessage),
        vec![vec![json!({"message": "hello", "address": "addr1"})]]
    );
    assert_eq!(panel.details().signature, "deadbeef");
    assert!(panel.to_string().contains("Signature:\ndeadbeef"));
    assert_eq!(panel.sign.message, "hello");
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn sign_failure_alerts() {
    let provider =
        MockProvider::new().reject(Method::SignMessage, "User denied");
    let (mut panel, _, notifier) = mount(provider).await;

    panel.sign.message = "hello".into();
    assert!(!panel.submit_sign().await);

    assert_eq!(panel.details().signature, "");
    assert_eq!(notifier.alerts(), vec!["Error:\n\nUser denied"]);
}

#[tokio::test]
async fn tx_is_pretty_printed() {
    let tx = json!({"hash": "0xabc", "height": 10});
    let provider = MockProvider::new().respond(Method::Tx, tx.clone());
    let (mut panel, provider, _) = mount(provider).await;

    panel.tx.hash = "0xabc".into();
    assert!(panel.submit_tx().await);

    assert_eq!(
        provider.calls_to(Method::Tx),
        vec![vec![json!({"hash": "0xabc"})]]
    );
    assert_eq!(panel.details().transaction, Some(tx));
    assert!(panel
        .to_string()
        .contains("Transaction:\n{\n  \"hash\": \"0xabc\",\n  \"height\": 10\n}"));
}

#[tokio::test]
async fn tx_not_found_shows_nothing() {
    let (mut panel, _, notifier) = mount(MockProvider::new()).await;

    panel.tx.hash = "0xmissing".into();
    assert!(panel.submit_tx().await);

    assert_eq!(panel.details().transaction, None);
    assert!(!panel.to_string().contains("Transaction:"));
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn block_lookup_by_height() {
    let block = json!({"header": {"height": 5}});
    let provider = MockProvider::new().respond(Method::Block, block.clone());
    let (mut panel, provider, _) = mount(provider).await;

    panel.block.height = "5".into();
    assert!(panel.submit_block().await);

    assert_eq!(
        provider.calls_to(Method::Block),
        vec![vec![json!({"height": 5})]]
    );
    assert_eq!(panel.details().block, Some(block));
}

#[tokio::test]
async fn block_height_must_be_a_number() {
    let (mut panel, provider, notifier) = mount(MockProvider::new()).await;

    panel.block.height = "tip".into();
    assert!(!panel.submit_block().await);

    assert!(provider.calls_to(Method::Block).is_empty());
    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("tip"));
}

#[tokio::test]
async fn stake_splits_chains() {
    let provider = MockProvider::new()
        .respond(Method::StakeNode, json!({"hash": "0xdef"}));
    let (mut panel, provider, notifier) = mount(provider).await;

    panel.stake = StakeForm {
        amount: "15000000000".into(),
        chains: "0001,0002".into(),
        service_url: "https://node.example:443".into(),
        operator_public_key: "pk".into(),
    };
    assert!(panel.submit_stake().await);

    let calls = provider.calls_to(Method::StakeNode);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0]["chains"], json!(["0001", "0002"]));
    assert_eq!(
        calls[0],
        vec![json!({
            "amount": "15000000000",
            "chains": ["0001", "0002"],
            "address": "addr1",
            "operatorPublicKey": "pk",
            "serviceURL": "https://node.example:443",
        })]
    );

    assert_eq!(panel.stake, StakeForm::default());
    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("0xdef"));
}

#[tokio::test]
async fn stake_keeps_the_form_on_failure() {
    let provider =
        MockProvider::new().reject(Method::StakeNode, "Below minimum stake");
    let (mut panel, _, notifier) = mount(provider).await;

    let form = StakeForm {
        amount: "1".into(),
        chains: "0021".into(),
        service_url: "https://node.example:443".into(),
        operator_public_key: "pk".into(),
    };
    panel.stake = form.clone();
    assert!(!panel.submit_stake().await);

    assert_eq!(panel.stake, form);
    assert_eq!(notifier.alerts(), vec!["Error:\n\nBelow minimum stake"]);
}

#[tokio::test]
async fn address_change_reloads_details() {
    let (mut panel, provider, _) = mount(MockProvider::new()).await;
    assert_eq!(provider.calls().len(), 4);

    panel.set_address("addr1".into()).await;
    assert_eq!(provider.calls().len(), 4);

    panel.set_address("addr9".into()).await;
    assert_eq!(panel.address(), "addr9");
    assert_eq!(provider.calls().len(), 8);
    assert_eq!(
        provider.calls_to(Method::Balance).last(),
        Some(&vec![json!({"address": "addr9"})])
    );
}

#[test]
fn stake_chains_split_on_commas() {
    let form = StakeForm {
        chains: "0001,0021, 0040".into(),
        ..Default::default()
    };
    assert_eq!(form.chain_list(), vec!["0001", "0021", " 0040"]);

    let single = StakeForm {
        chains: "0001".into(),
        ..Default::default()
    };
    assert_eq!(single.chain_list(), vec!["0001"]);
}
