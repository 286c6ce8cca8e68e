//! smol timer.

use std::time::Duration;

pub(super) async fn sleep_impl(duration: Duration) {
    smol::Timer::after(duration).await;
}
