// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{SignalStatus, SubscriptionStatus, ThemeMode, TransactionStatus};
use std::sync::mpsc::{Receiver, Sender, channel};

/// Change notifications published by the stores to their subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    NotificationsChanged {
        total: usize,
        unread: usize,
    },
    SignalAdded {
        id: String,
    },
    SignalStatusChanged {
        id: String,
        status: SignalStatus,
    },
    SettingsChanged {
        section: &'static str,
    },
    SubscriptionPending,
    SubscriptionChanged {
        plan_id: String,
        status: SubscriptionStatus,
    },
    TransactionAdded {
        id: String,
    },
    TransactionStatusChanged {
        id: String,
        status: TransactionStatus,
    },
    ThemeChanged {
        mode: ThemeMode,
        is_system_theme: bool,
    },
}

/// Fan-out of store events. Subscribers whose receiver was dropped are pruned
/// on the next publish.
#[derive(Debug, Default)]
pub struct EventBus {
    senders: Vec<Sender<StoreEvent>>,
}

impl EventBus {
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = channel();
        self.senders.push(tx);
        rx
    }

    pub fn publish(&mut self, event: StoreEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_receivers_are_pruned() {
        let mut bus = EventBus::default();
        let keep = bus.subscribe();
        let gone = bus.subscribe();
        drop(gone);

        bus.publish(StoreEvent::SubscriptionPending);
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(keep.try_recv().unwrap(), StoreEvent::SubscriptionPending);
    }
}
