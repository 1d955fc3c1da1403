// src/notifier.rs

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub const UPDATE_EVENT: &str = "update";
pub const UPDATE_MESSAGE: &str = "最新進度更新！";
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

const HUB_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub message: String,
}

/// A named event frame, `{"event": ..., "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub event: String,
    pub data: UpdatePayload,
}

impl Default for UpdateEvent {
    fn default() -> Self {
        Self {
            event: UPDATE_EVENT.into(),
            data: UpdatePayload {
                message: UPDATE_MESSAGE.into(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateHub {
    tx: broadcast::Sender<UpdateEvent>,
}

impl UpdateHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(HUB_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UpdateEvent> {
        self.tx.subscribe()
    }

    /// Number of receivers reached; 0 when nobody is connected.
    pub fn publish(&self, event: UpdateEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for UpdateHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the broadcast loop. It runs until the runtime shuts down or the
/// handle is aborted.
pub fn spawn_notifier(hub: UpdateHub, interval: Duration) -> JoinHandle<()> {
    info!(interval_secs = interval.as_secs_f64(), "starting update notifier");
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let reached = hub.publish(UpdateEvent::default());
            debug!(reached, "update broadcast");
        }
    })
}
