//! Tokio timer.

use std::time::Duration;

pub(super) async fn sleep_impl(duration: Duration) {
    tokio::time::sleep(duration).await
}
