//! Polling until a resource reaches a wanted state.
//!
//! A poll loop repeats a GET at a constant interval until the response has
//! one of the accepted statuses and every predicate holds. It always runs
//! under a [`PollContext`] that carries a deadline; a context without one is
//! rejected before anything is sent.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tokio::time::{Instant, sleep, sleep_until, timeout_at};

use crate::error::{OcmError, PollError, Result};
use crate::request::{GetRequest, GetResponse};

/// Default time between two ticks of a poll loop
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Status accepted when no status is configured
pub const DEFAULT_STATUS: u16 = 200;

/// Deadline and cancellation signal of a poll loop
#[derive(Debug, Clone, Default)]
pub struct PollContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Cancels the poll loops running under a context
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    /// Stop every loop using the associated context at its next suspension
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl PollContext {
    /// A context without deadline. Poll loops refuse to run under it.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`
    pub fn with_deadline(deadline: impl Into<Instant>) -> Self {
        Self {
            deadline: Some(deadline.into()),
            cancel: None,
        }
    }

    /// Derive a context that can also be cancelled through the returned handle
    pub fn cancellable(self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        let context = Self {
            deadline: self.deadline,
            cancel: Some(receiver),
        };
        (context, CancelHandle { sender })
    }

    /// The deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True once the associated handle has been used
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|receiver| *receiver.borrow())
    }

    async fn cancelled(&self) {
        let Some(receiver) = &self.cancel else {
            return std::future::pending().await;
        };
        let mut receiver = receiver.clone();
        loop {
            if *receiver.borrow_and_update() {
                return;
            }
            if receiver.changed().await.is_err() {
                // The handle is gone, so the context can no longer be cancelled.
                return std::future::pending().await;
            }
        }
    }
}

/// Run `task` every `interval` until it yields a value.
///
/// `task` returns `Ok(Some(value))` to finish, `Ok(None)` to try again at
/// the next tick and `Err` to abort the loop. Each attempt is bounded by the
/// context deadline, as is the wait between attempts. A zero `interval` or
/// a context without deadline fails before `task` first runs.
pub async fn poll_context<T, F, Fut>(
    context: &PollContext,
    interval: Duration,
    mut task: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    if interval.is_zero() {
        return Err(PollError::InvalidInterval.into());
    }
    let deadline = context.deadline.ok_or(PollError::MissingDeadline)?;
    let mut tick: u64 = 0;

    loop {
        if context.is_cancelled() {
            return Err(PollError::Cancelled.into());
        }
        if Instant::now() >= deadline {
            return Err(PollError::DeadlineExceeded.into());
        }

        tick += 1;
        let outcome = tokio::select! {
            biased;
            _ = context.cancelled() => return Err(PollError::Cancelled.into()),
            result = timeout_at(deadline, task()) => match result {
                Ok(outcome) => outcome?,
                Err(_) => return Err(PollError::DeadlineExceeded.into()),
            },
        };

        tracing::debug!("poll tick {}: done={}", tick, outcome.is_some());
        if let Some(value) = outcome {
            return Ok(value);
        }

        tokio::select! {
            biased;
            _ = context.cancelled() => return Err(PollError::Cancelled.into()),
            _ = sleep_until(deadline) => return Err(PollError::DeadlineExceeded.into()),
            _ = sleep(interval) => {}
        }
    }
}

type Predicate<T> = Box<dyn Fn(&GetResponse<T>) -> bool + Send + Sync>;

/// Request that repeats a GET until the response satisfies all conditions
pub struct PollRequest<T> {
    base: GetRequest<T>,
    interval: Duration,
    statuses: Vec<u16>,
    predicates: Vec<Predicate<T>>,
}

impl<T> fmt::Debug for PollRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollRequest")
            .field("request", &self.base)
            .field("interval", &self.interval)
            .field("statuses", &self.statuses)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

/// Response of a successful poll loop
pub type PollResponse<T> = GetResponse<T>;

impl<T: DeserializeOwned> PollRequest<T> {
    pub(crate) fn new(request: GetRequest<T>) -> Self {
        Self {
            base: request,
            interval: DEFAULT_INTERVAL,
            statuses: Vec::new(),
            predicates: Vec::new(),
        }
    }

    // Keeps the option methods from the wrapped GET request.
    fn map_base(mut self, f: impl FnOnce(GetRequest<T>) -> GetRequest<T>) -> Self {
        self.base = f(self.base);
        self
    }

    /// Add a query parameter
    pub fn parameter(self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.map_base(|base| base.parameter(name, value))
    }

    /// Add a request header
    pub fn header(self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.map_base(|base| base.header(name, value))
    }

    /// Act on behalf of another user
    pub fn impersonate(self, user: impl Into<String>) -> Self {
        self.map_base(|base| base.impersonate(user))
    }

    /// Time between two attempts
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Accept `status` as a terminal status. When none is given only 200
    /// is accepted.
    pub fn status(mut self, status: u16) -> Self {
        self.statuses.push(status);
        self
    }

    /// Require `predicate` to hold for the response
    pub fn predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&GetResponse<T>) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    fn accepts(&self, response: &GetResponse<T>) -> bool {
        let status_ok = if self.statuses.is_empty() {
            response.status() == DEFAULT_STATUS
        } else {
            self.statuses.contains(&response.status())
        };
        status_ok && self.predicates.iter().all(|predicate| predicate(response))
    }

    /// Run the poll loop under `context`.
    ///
    /// Error statuses count as observed statuses and do not stop the loop;
    /// transport and decoding failures do.
    pub async fn start(&self, context: &PollContext) -> Result<PollResponse<T>> {
        poll_context(context, self.interval, || async {
            let response = self.base.exchange().await?;
            Ok::<_, OcmError>(self.accepts(&response).then_some(response))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_background_context_fails_immediately() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let result: Result<()> = poll_context(&PollContext::background(), DEFAULT_INTERVAL, || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Some(()))
            }
        })
        .await;

        assert!(matches!(
            result,
            Err(OcmError::Poll(PollError::MissingDeadline))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_finishes_on_third_tick() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let interval = Duration::from_millis(20);
        let context = PollContext::with_timeout(interval * 10);

        let value = poll_context(&context, interval, || {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                Ok((n == 3).then_some(n))
            }
        })
        .await
        .unwrap();

        assert_eq!(value, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_interval_fails_immediately() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let context = PollContext::with_timeout(Duration::from_millis(100));
        let result: Result<()> = poll_context(&context, Duration::ZERO, || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(None)
            }
        })
        .await;

        assert!(matches!(
            result,
            Err(OcmError::Poll(PollError::InvalidInterval))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let context = PollContext::with_timeout(Duration::from_millis(50));
        let result: Result<()> =
            poll_context(&context, Duration::from_millis(10), || async { Ok(None) }).await;
        assert!(matches!(
            result,
            Err(OcmError::Poll(PollError::DeadlineExceeded))
        ));
    }

    #[tokio::test]
    async fn test_task_error_aborts() {
        let context = PollContext::with_timeout(Duration::from_secs(5));
        let result: Result<()> = poll_context(&context, Duration::from_millis(10), || async {
            Err(OcmError::Configuration("boom".to_string()))
        })
        .await;
        assert!(matches!(result, Err(OcmError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_cancelled() {
        let (context, handle) = PollContext::with_timeout(Duration::from_secs(5)).cancellable();
        let task = tokio::spawn(async move {
            poll_context::<(), _, _>(&context, Duration::from_millis(10), || async { Ok(None) })
                .await
        });

        tokio::time::sleep(Duration::from_millis(30)).await;
        handle.cancel();

        let result = task.await.unwrap();
        assert!(matches!(result, Err(OcmError::Poll(PollError::Cancelled))));
    }

    #[test]
    fn test_context_deadlines() {
        assert!(PollContext::background().deadline().is_none());
        let context = PollContext::with_timeout(Duration::from_secs(1));
        assert!(context.deadline().is_some());
        assert!(!context.is_cancelled());

        let (context, handle) = context.cancellable();
        handle.cancel();
        assert!(context.is_cancelled());
    }
}
