use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use siesta::{sort_with, spawn_sort, SortConfig};

// 50ms per unit keeps adjacent scaled delays far enough apart that timer
// jitter on a loaded test machine does not reorder them.
fn short_config() -> SortConfig {
    SortConfig::with_delay_unit_ms(50)
}

fn is_ascending(values: &[u64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[tokio::test]
async fn test_distinct_values_sort_ascending() {
    let handle = spawn_sort(&[1, 3, 2], &short_config());

    let result = handle.completed().await.expect("sort should complete");
    assert_eq!(result, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_single_element_completes_after_scaled_delay() {
    let config = SortConfig::with_delay_unit_ms(40);
    let started = Instant::now();
    let handle = spawn_sort(&[5], &config);

    let result = handle.completed().await.expect("sort should complete");
    assert_eq!(result, vec![5]);
    assert!(
        started.elapsed() >= Duration::from_millis(200),
        "completion arrived before the scaled delay elapsed"
    );
}

#[tokio::test]
async fn test_duplicates_keep_partial_order() {
    let handle = spawn_sort(&[2, 2, 1], &short_config());

    let result = handle.completed().await.expect("sort should complete");
    let mut multiset = result.clone();
    multiset.sort_unstable();
    assert_eq!(multiset, vec![1, 2, 2]);
    assert_eq!(result[0], 1, "the 1 must precede both 2s");
}

#[tokio::test]
async fn test_empty_input_never_signals_completion() {
    let handle = spawn_sort(&[], &short_config());

    match tokio::time::timeout(Duration::from_secs(1), handle.completed()).await {
        Ok(Some(result)) => panic!("empty input unexpectedly completed with {result:?}"),
        Ok(None) | Err(_) => {}
    }
}

#[tokio::test]
async fn test_callback_invoked_exactly_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = flume::bounded(1);

    let counter = Arc::clone(&calls);
    sort_with(&[1, 1, 0, 2], &short_config(), move |result| {
        counter.fetch_add(1, Ordering::SeqCst);
        let _ = tx.send(result);
    });

    let result = rx
        .recv_async()
        .await
        .expect("callback should deliver a result");
    assert!(is_ascending(&result));
    assert_eq!(result.len(), 4);

    // Generous settle window: any spurious second invocation would have
    // fired well within it.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_repeated_invocations_are_independent() {
    for _ in 0..2 {
        let handle = spawn_sort(&[4, 0, 2], &short_config());
        let result = handle.completed().await.expect("sort should complete");
        assert_eq!(result, vec![0, 2, 4]);
    }
}

#[tokio::test]
async fn test_concurrent_invocations_do_not_interfere() {
    let first = spawn_sort(&[3, 1], &short_config());
    let second = spawn_sort(&[2, 4], &short_config());

    let (first, second) = tokio::join!(first.completed(), second.completed());
    assert_eq!(first.expect("first sort should complete"), vec![1, 3]);
    assert_eq!(second.expect("second sort should complete"), vec![2, 4]);
}

#[tokio::test]
async fn test_random_distinct_values_sort_ascending() {
    use rand::seq::SliceRandom;

    let mut values: Vec<u64> = (0..8).collect();
    values.shuffle(&mut rand::rng());

    let handle = spawn_sort(&values, &short_config());
    let result = handle.completed().await.expect("sort should complete");
    assert_eq!(result, (0..8).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_handle_wait_timeout_and_try_recv() {
    let handle = spawn_sort(&[1], &SortConfig::with_delay_unit_ms(30));

    assert!(handle.try_recv().is_none(), "completion cannot be instant");

    let result = tokio::task::spawn_blocking(move || handle.wait_timeout(Duration::from_secs(5)))
        .await
        .expect("blocking wait should not panic")
        .expect("sort should complete within the timeout");
    assert_eq!(result, vec![1]);
}
