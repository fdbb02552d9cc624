use crate::domain::account::AccountId;
use crate::domain::ports::Notifier;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Notification adapter that writes through the `log` facade.
///
/// Stands in for a real delivery channel; the ledger only requires
/// fire-and-forget semantics from it.
#[derive(Default, Clone)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, account: &AccountId, message: &str) {
        log::info!("notifying {account}: {message}");
    }
}

/// Notification adapter that records every message for assertions in tests.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<(AccountId, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(account, message)` pair delivered so far, in order.
    pub async fn sent(&self) -> Vec<(AccountId, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, account: &AccountId, message: &str) {
        self.sent
            .lock()
            .await
            .push((account.clone(), message.to_string()));
    }
}
