use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Per-call deadline and cancellation signal for `verify`.
///
/// Independent of the transport timeout: whichever fires first ends the
/// call.
#[derive(Debug, Clone, Default)]
pub struct VerifyContext {
    deadline: Option<Instant>,
    cancellation: CancellationHandle,
}

impl VerifyContext {
    /// No deadline, and only canceled through `cancellation_handle`.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Handle that cancels every in-flight call using this context (or a
    /// clone of it).
    pub fn cancellation_handle(&self) -> CancellationHandle {
        self.cancellation.clone()
    }

    pub fn is_canceled(&self) -> bool {
        self.cancellation.is_canceled()
    }

    pub(crate) async fn canceled(&self) {
        self.cancellation.canceled().await
    }

    /// Resolves at the deadline, or never if there is none.
    pub(crate) async fn deadline_elapsed(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CancellationHandle {
    token: CancellationToken,
}

impl CancellationHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_canceled(&self) -> bool {
        self.token.is_cancelled()
    }

    async fn canceled(&self) {
        self.token.cancelled().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_earliest_deadline() {
        let now = Instant::now();
        let ctx = VerifyContext::background()
            .with_deadline(now + Duration::from_secs(5))
            .with_deadline(now + Duration::from_secs(1))
            .with_deadline(now + Duration::from_secs(3));
        assert_eq!(ctx.deadline(), Some(now + Duration::from_secs(1)));
    }

    #[tokio::test]
    async fn cancel_wakes_waiters() {
        let ctx = VerifyContext::background();
        let handle = ctx.cancellation_handle();
        let waiter = tokio::spawn({
            let ctx = ctx.clone();
            async move { ctx.canceled().await }
        });
        tokio::task::yield_now().await;
        handle.cancel();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter was not woken")
            .unwrap();
        assert!(ctx.is_canceled());
    }

    #[tokio::test]
    async fn already_canceled_resolves_immediately() {
        let ctx = VerifyContext::background();
        ctx.cancellation_handle().cancel();
        tokio::time::timeout(Duration::from_millis(100), ctx.canceled())
            .await
            .expect("canceled context should resolve");
    }
}
