//! Analytics Change Notifications
//!
//! Every mutation that can change a user's analytics publishes an
//! [`AnalyticsUpdated`] for the affected user. Subscribers filter by user.

use std::time::Duration;

use kernel::id::UserId;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsUpdated {
    pub user_id: UserId,
}

/// Broadcast bus for [`AnalyticsUpdated`]
#[derive(Debug, Clone)]
pub struct AnalyticsEvents {
    sender: broadcast::Sender<AnalyticsUpdated>,
}

impl Default for AnalyticsEvents {
    fn default() -> Self {
        Self::new(256)
    }
}

impl AnalyticsEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Fire and forget; nobody listening is not an error
    pub fn publish(&self, user_id: UserId) {
        let receivers = self.sender.send(AnalyticsUpdated { user_id }).unwrap_or(0);
        tracing::trace!(user_id = %user_id, receivers, "Analytics update published");
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AnalyticsUpdated> {
        self.sender.subscribe()
    }

    /// Wait until an update for `user_id` arrives or `timeout` elapses.
    /// Returns whether an update arrived.
    pub async fn wait_for(&self, user_id: UserId, timeout: Duration) -> bool {
        let mut receiver = self.subscribe();
        tokio::time::timeout(timeout, next_for(&mut receiver, user_id))
            .await
            .unwrap_or(false)
    }
}

/// Skips updates for other users. A lagged receiver reports an update,
/// since one of the dropped events may have been ours.
pub async fn next_for(receiver: &mut broadcast::Receiver<AnalyticsUpdated>, user_id: UserId) -> bool {
    loop {
        match receiver.recv().await {
            Ok(event) if event.user_id == user_id => return true,
            Ok(_) => continue,
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Analytics subscriber lagged");
                return true;
            }
            Err(RecvError::Closed) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let events = AnalyticsEvents::default();
        events.publish(UserId::new());
    }

    #[tokio::test]
    async fn test_filters_by_user() {
        let events = AnalyticsEvents::default();
        let me = UserId::new();
        let mut receiver = events.subscribe();

        events.publish(UserId::new());
        events.publish(me);

        assert!(next_for(&mut receiver, me).await);
    }

    #[tokio::test]
    async fn test_wait_for_times_out() {
        let events = AnalyticsEvents::default();
        let changed = events.wait_for(UserId::new(), Duration::from_millis(20)).await;
        assert!(!changed);
    }

    #[tokio::test]
    async fn test_wait_for_wakes_on_update() {
        let events = AnalyticsEvents::default();
        let me = UserId::new();

        let waiter = {
            let events = events.clone();
            tokio::spawn(async move { events.wait_for(me, Duration::from_secs(5)).await })
        };
        // let the waiter subscribe first
        while events.sender.receiver_count() == 0 {
            tokio::task::yield_now().await;
        }
        events.publish(me);

        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn test_lagged_counts_as_update() {
        let events = AnalyticsEvents::new(1);
        let me = UserId::new();
        let mut receiver = events.subscribe();
        events.publish(UserId::new());
        events.publish(UserId::new());
        assert!(next_for(&mut receiver, me).await);
    }
}
