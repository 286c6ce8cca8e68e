//! async-std timer.

use std::time::Duration;

pub(super) async fn sleep_impl(duration: Duration) {
    async_std::task::sleep(duration).await
}
