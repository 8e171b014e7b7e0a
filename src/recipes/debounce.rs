use std::time::Duration;

use tokio::sync::mpsc;

/// Forwards a value only after `delay` passes with no newer input.
///
/// Each input restarts the timer and replaces the pending value. A value
/// still pending when `input` closes is dropped.
pub fn debounce<T>(mut input: mpsc::Receiver<T>, delay: Duration) -> mpsc::Receiver<T>
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        while let Some(first) = input.recv().await {
            let mut pending = first;
            loop {
                tokio::select! {
                    next = input.recv() => match next {
                        Some(value) => pending = value,
                        None => return,
                    },
                    _ = tokio::time::sleep(delay) => {
                        if tx.send(pending).await.is_err() {
                            return;
                        }
                        break;
                    }
                }
            }
        }
    });
    rx
}
