//! Per-value deferred-action scheduling.

use std::time::Duration;

use flume::Sender;

/// Wall-clock delay per input unit: value `1` waits one unit, value `3`
/// waits three.
pub const DEFAULT_DELAY_UNIT: Duration = Duration::from_millis(100);

/// Tunables for one sort invocation.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Delay per input unit. Values whose scaled delays land close together
    /// relative to this unit are subject to timer jitter; widening the unit
    /// sharpens the ordering at the cost of total runtime.
    pub delay_unit: Duration,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            delay_unit: DEFAULT_DELAY_UNIT,
        }
    }
}

impl SortConfig {
    /// Config with a delay unit given in milliseconds.
    pub fn with_delay_unit_ms(ms: u64) -> Self {
        Self {
            delay_unit: Duration::from_millis(ms),
        }
    }

    /// Scaled delay for `value`, saturating at `Duration::MAX`. A saturated
    /// delay would never fire within a process lifetime anyway.
    pub fn scaled_delay(&self, value: u64) -> Duration {
        let factor = u32::try_from(value).unwrap_or(u32::MAX);
        self.delay_unit.checked_mul(factor).unwrap_or(Duration::MAX)
    }
}

/// Spawn one detached timer task per value. Each task sleeps the scaled
/// delay for its value, then reports the value (not its index) on
/// `fired_tx`. The caller's `fired_tx` is consumed here so the firing
/// channel closes once every scheduled task has reported.
///
/// Send failures are ignored: the receiving side is gone only when the
/// whole invocation was dropped, and there is no one left to notify.
pub fn schedule_values(values: &[u64], config: &SortConfig, fired_tx: Sender<u64>) {
    for &value in values {
        let delay = config.scaled_delay(value);
        let tx = fired_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            log::debug!("deferred append fired for value {value} after {delay:?}");
            let _ = tx.send_async(value).await;
        });
    }

    log::debug!("scheduled {} deferred appends", values.len());
}
