//! Startup progress indicator.
//!
//! A one-shot task counts from 0 to 100, one value per tick, and sends each value over a
//! channel. The caller reports the values and waits for 100 before opening the shop.

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

pub const SPLASH_DONE: u8 = 100;

/// Spawns the ticking task and returns the receiving side.
pub fn spawn_progress(tick: Duration) -> mpsc::Receiver<u8> {
    let (sender, receiver) = mpsc::channel(8);
    tokio::spawn(async move {
        for value in 0..=SPLASH_DONE {
            if value > 0 && !tick.is_zero() {
                tokio::time::sleep(tick).await;
            }
            if sender.send(value).await.is_err() {
                debug!(value, "Progress receiver gone");
                return;
            }
        }
    });
    receiver
}

/// Runs the progress task to completion, passing every value to `on_progress`.
pub async fn show_splash(tick: Duration, mut on_progress: impl FnMut(u8)) {
    let mut progress = spawn_progress(tick);
    while let Some(value) = progress.recv().await {
        on_progress(value);
    }
    debug!("Splash finished");
}
