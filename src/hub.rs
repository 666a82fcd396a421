use std::time::Instant;
use tokio::sync::broadcast;

/// Buffered events per subscriber before it starts lagging
const HUB_CAPACITY: usize = 256;

/// Global input events a host forwards to its widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    PointerPress { x: u16, y: u16, at: Instant },
    PointerMove { x: u16, y: u16, at: Instant },
    PointerRelease { x: u16, y: u16, at: Instant },
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Pointer,
    Resize,
}

impl HostEvent {
    pub fn topic(&self) -> Topic {
        match self {
            HostEvent::PointerPress { .. }
            | HostEvent::PointerMove { .. }
            | HostEvent::PointerRelease { .. } => Topic::Pointer,
            HostEvent::Resize { .. } => Topic::Resize,
        }
    }
}

/// Document/window-level event source shared by every widget on screen.
///
/// Widgets hold [`Subscription`]s obtained here; dropping a subscription is
/// the only way to release it, so a torn down widget cannot keep listening.
#[derive(Debug, Clone)]
pub struct EventHub {
    tx: broadcast::Sender<HostEvent>,
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(HUB_CAPACITY);
        Self { tx }
    }

    /// Publish to all live subscribers. Having none is fine.
    pub fn publish(&self, event: HostEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self, topic: Topic) -> Subscription {
        Subscription {
            topic,
            rx: self.tx.subscribe(),
        }
    }

    /// Number of subscriptions currently alive across all widgets
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Owned handle to a hub topic. Released on drop.
#[derive(Debug)]
pub struct Subscription {
    topic: Topic,
    rx: broadcast::Receiver<HostEvent>,
}

impl Subscription {
    /// Take every pending event for this topic without blocking
    pub fn drain(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) if event.topic() == self.topic => events.push(event),
                Ok(_) => {}
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, topic = ?self.topic, "subscription lagged, events dropped");
                }
                Err(broadcast::error::TryRecvError::Empty)
                | Err(broadcast::error::TryRecvError::Closed) => break,
            }
        }
        events
    }
}
