//! Result collection and completion signalling.

use flume::{Receiver, Sender};

/// Drive the collector side of one invocation: receive fired values one at
/// a time, append each to the per-invocation result, and re-check the
/// pending count in the same step. When the result first reaches `expected`
/// entries the finished sequence is sent on `done_tx`, exactly once, since
/// the loop returns immediately after sending.
///
/// With zero scheduled actions the firing channel closes before anything is
/// appended, so the loop exits without signalling and `done_tx` is dropped
/// unsent: completion is never manufactured for input that nothing fired
/// for.
pub async fn collect(expected: usize, fired_rx: Receiver<u64>, done_tx: Sender<Vec<u64>>) {
    let mut result = Vec::with_capacity(expected);

    while let Ok(value) = fired_rx.recv_async().await {
        result.push(value);
        log::debug!("collected value {value} ({}/{expected})", result.len());

        if result.len() == expected {
            if done_tx.send_async(result).await.is_err() {
                log::warn!("sort completed but the completion receiver was dropped");
            }
            return;
        }
    }

    log::debug!(
        "firing channel closed after {} of {expected} appends; no completion signalled",
        result.len()
    );
}
