//! Public sorting API.
//!
//! Two surfaces over the same scheduler/collector core:
//! - [`sort`] / [`sort_with`]: callback form. The callback receives the
//!   finished sequence exactly once, and for empty input never.
//! - [`spawn_sort`] / [`SortHandle`]: handle form. The handle wraps the
//!   completion channel for callers that prefer to await or poll.

use std::time::Duration;

use crate::core::{collector, scheduler};

pub use crate::core::scheduler::{SortConfig, DEFAULT_DELAY_UNIT};

/// Handle to an in-flight sort invocation.
///
/// The completion channel carries at most one message. For empty input no
/// deferred action ever fires, so the channel closes without yielding a
/// value; the accessors surface that as `None`.
pub struct SortHandle {
    receiver: flume::Receiver<Vec<u64>>,
}

impl SortHandle {
    /// Wait for completion. `None` means the completion channel closed
    /// without a result, which happens exactly when nothing was scheduled.
    pub async fn completed(self) -> Option<Vec<u64>> {
        self.receiver.recv_async().await.ok()
    }

    /// Bounded blocking wait, for callers outside the async runtime.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Vec<u64>> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Non-blocking completion poll.
    pub fn try_recv(&self) -> Option<Vec<u64>> {
        self.receiver.try_recv().ok()
    }

    pub(crate) fn into_receiver(self) -> flume::Receiver<Vec<u64>> {
        self.receiver
    }
}

/// Schedule a sort of `values` and return a handle to its completion.
///
/// Registration is non-blocking: this returns as soon as every per-value
/// timer task and the collector task are spawned. Must be called from
/// within a tokio runtime.
///
/// Output is ordered ascending by value, except that equal values resolve
/// by timer firing order: wall-clock delay is the sort key, so there is no
/// stability guarantee. There is no way to cancel an invocation; once
/// scheduled, every timer task fires.
pub fn spawn_sort(values: &[u64], config: &SortConfig) -> SortHandle {
    let (fired_tx, fired_rx) = flume::unbounded();
    let (done_tx, done_rx) = flume::bounded(1);
    let expected = values.len();

    scheduler::schedule_values(values, config, fired_tx);
    tokio::spawn(collector::collect(expected, fired_rx, done_tx));

    SortHandle { receiver: done_rx }
}

/// Sort `values` with the default 100 ms-per-unit delay and hand the
/// finished sequence to `on_complete`.
///
/// `on_complete` is invoked exactly once, and for empty input never: with
/// nothing scheduled no deferred action fires, so the completion check is
/// never reached and the callback is dropped uninvoked.
///
/// # Example
///
/// ```rust,no_run
/// #[tokio::main]
/// async fn main() {
///     let (tx, rx) = flume::bounded(1);
///     siesta::sort(&[1, 3, 2], move |sorted| {
///         let _ = tx.send(sorted);
///     });
///     assert_eq!(rx.recv_async().await.unwrap(), vec![1, 2, 3]);
/// }
/// ```
pub fn sort<F>(values: &[u64], on_complete: F)
where
    F: FnOnce(Vec<u64>) + Send + 'static,
{
    sort_with(values, &SortConfig::default(), on_complete)
}

/// [`sort`] with an explicit delay-unit configuration.
pub fn sort_with<F>(values: &[u64], config: &SortConfig, on_complete: F)
where
    F: FnOnce(Vec<u64>) + Send + 'static,
{
    let receiver = spawn_sort(values, config).into_receiver();
    tokio::spawn(async move {
        // A closed channel means nothing ever fired (empty input); the
        // callback is dropped without being invoked.
        if let Ok(result) = receiver.recv_async().await {
            on_complete(result);
        }
    });
}
