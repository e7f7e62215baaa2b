use std::time::Duration;

/// Artificial delays applied before each store operation.
///
/// The store sleeps first and then touches memory, so a caller that drops the
/// future during the delay never reaches the mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub write: Duration,
    pub stats: Duration,
}

impl Latency {
    /// No delay at all. The default, and what tests use.
    pub const fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            write: Duration::ZERO,
            stats: Duration::ZERO,
        }
    }

    /// Timings that mimic a remote API as seen from the dashboard.
    pub const fn simulated() -> Self {
        Self {
            list: Duration::from_millis(600),
            get: Duration::from_millis(400),
            write: Duration::from_millis(800),
            stats: Duration::from_millis(800),
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }
}

pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
