use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use transfer_ledger::application::ledger::Ledger;
use transfer_ledger::domain::account::{Account, AccountId, Balance};
use transfer_ledger::error::LedgerError;
use transfer_ledger::infrastructure::in_memory::InMemoryAccountStore;
use transfer_ledger::infrastructure::notification::RecordingNotifier;

fn id(s: &str) -> AccountId {
    AccountId::new(s).unwrap()
}

async fn ledger_with(accounts: &[(&str, Decimal)]) -> (Ledger, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let ledger = Ledger::new(
        Box::new(InMemoryAccountStore::new()),
        Box::new(notifier.clone()),
    );
    for (name, balance) in accounts {
        ledger
            .create_account(Account::open(id(name), *balance).unwrap())
            .await
            .unwrap();
    }
    (ledger, notifier)
}

async fn balance(ledger: &Ledger, name: &str) -> Balance {
    ledger.account(&id(name)).await.unwrap().unwrap().balance()
}

async fn total(ledger: &Ledger) -> Decimal {
    ledger
        .accounts()
        .await
        .unwrap()
        .iter()
        .map(|a| a.balance().value())
        .sum()
}

#[tokio::test]
async fn test_successful_transfer_scenario() {
    let (ledger, _) = ledger_with(&[("A", dec!(1000)), ("B", dec!(500))]).await;

    ledger.transfer(&id("A"), &id("B"), dec!(200)).await.unwrap();

    assert_eq!(balance(&ledger, "A").await, Balance(dec!(800)));
    assert_eq!(balance(&ledger, "B").await, Balance(dec!(700)));
}

#[tokio::test]
async fn test_negative_amount_rejected_and_balances_unchanged() {
    let (ledger, _) = ledger_with(&[("A", dec!(1000)), ("B", dec!(500))]).await;

    let result = ledger.transfer(&id("A"), &id("B"), dec!(-100)).await;
    assert!(matches!(result, Err(LedgerError::InvalidAmount)));

    assert_eq!(balance(&ledger, "A").await, Balance(dec!(1000)));
    assert_eq!(balance(&ledger, "B").await, Balance(dec!(500)));
}

#[tokio::test]
async fn test_overdraw_rejected_and_balances_unchanged() {
    let (ledger, _) = ledger_with(&[("A", dec!(1000)), ("B", dec!(500))]).await;

    let result = ledger.transfer(&id("A"), &id("B"), dec!(10000)).await;
    assert!(matches!(result, Err(LedgerError::InsufficientBalance)));

    assert_eq!(balance(&ledger, "A").await, Balance(dec!(1000)));
    assert_eq!(balance(&ledger, "B").await, Balance(dec!(500)));
}

#[tokio::test]
async fn test_missing_source_is_reported_by_id() {
    let (ledger, _) = ledger_with(&[("B", dec!(500))]).await;

    let err = ledger
        .transfer(&id("missing"), &id("B"), dec!(100))
        .await
        .unwrap_err();
    match err {
        LedgerError::AccountNotFound(missing) => assert_eq!(missing.as_str(), "missing"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_self_transfer_rejected() {
    let (ledger, _) = ledger_with(&[("A", dec!(1000))]).await;

    let result = ledger.transfer(&id("A"), &id("A"), dec!(100)).await;
    assert!(matches!(result, Err(LedgerError::SameAccount)));
    assert_eq!(balance(&ledger, "A").await, Balance(dec!(1000)));
}

#[tokio::test]
async fn test_duplicate_create_rejected() {
    let (ledger, _) = ledger_with(&[("A", dec!(1000))]).await;

    let result = ledger
        .create_account(Account::open(id("A"), dec!(1000)).unwrap())
        .await;
    match result {
        Err(LedgerError::DuplicateAccount(duplicate)) => {
            assert_eq!(duplicate.as_str(), "A")
        }
        other => panic!("expected duplicate account error, got {other:?}"),
    }
    assert_eq!(balance(&ledger, "A").await, Balance(dec!(1000)));
}

#[tokio::test]
async fn test_funds_conserved_across_mixed_outcomes() {
    let (ledger, _) = ledger_with(&[("A", dec!(1000)), ("B", dec!(500)), ("C", dec!(0))]).await;
    let initial = total(&ledger).await;

    ledger.transfer(&id("A"), &id("B"), dec!(200)).await.unwrap();
    ledger.transfer(&id("B"), &id("C"), dec!(700)).await.unwrap();
    assert!(ledger.transfer(&id("C"), &id("A"), dec!(10000)).await.is_err());
    assert!(ledger.transfer(&id("A"), &id("A"), dec!(5)).await.is_err());
    assert!(ledger.transfer(&id("A"), &id("nobody"), dec!(5)).await.is_err());
    ledger.transfer(&id("C"), &id("A"), dec!(100)).await.unwrap();

    assert_eq!(total(&ledger).await, initial);
    for account in ledger.accounts().await.unwrap() {
        assert!(account.balance().value() >= Decimal::ZERO);
    }
}

#[tokio::test]
async fn test_success_sends_exactly_two_notifications() {
    let (ledger, notifier) = ledger_with(&[("A", dec!(1000)), ("B", dec!(500))]).await;

    ledger.transfer(&id("A"), &id("B"), dec!(200)).await.unwrap();

    let sent = notifier.sent().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, id("A"));
    assert!(sent[0].1.contains("to account B"));
    assert_eq!(sent[1].0, id("B"));
    assert!(sent[1].1.contains("from account A"));
}

#[tokio::test]
async fn test_rejection_sends_no_notification() {
    let (ledger, notifier) = ledger_with(&[("A", dec!(100)), ("B", dec!(0))]).await;

    assert!(ledger.transfer(&id("A"), &id("B"), dec!(500)).await.is_err());
    assert!(ledger.transfer(&id("A"), &id("B"), dec!(0)).await.is_err());

    assert!(notifier.sent().await.is_empty());
}
