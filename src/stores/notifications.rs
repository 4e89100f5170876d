// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::models::{Notification, NotificationGroup, NotificationType};
use std::sync::mpsc::Receiver;
use tracing::{debug, warn};

/// Display title and icon for each category, in display order.
const GROUPS: [(NotificationType, &str, &str); 6] = [
    (NotificationType::Signal, "Trading Signals", "trending-up"),
    (NotificationType::Trade, "Trade Updates", "swap-horizontal"),
    (NotificationType::Market, "Market Alerts", "bar-chart"),
    (NotificationType::News, "News", "newspaper"),
    (NotificationType::Security, "Security", "shield-checkmark"),
    (NotificationType::System, "System", "settings"),
];

/// Notification list plus its unread counter.
///
/// Every mutation recomputes `unread_count` from the list, so the counter
/// always equals the number of entries with `is_read == false`.
#[derive(Debug, Default)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
    unread_count: usize,
    events: EventBus,
}

impl NotificationStore {
    pub fn new(seed: Vec<Notification>) -> Self {
        let mut store = Self {
            notifications: seed,
            unread_count: 0,
            events: EventBus::default(),
        };
        store.recount();
        store
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| !n.is_read)
    }

    pub fn notifications_of_type(&self, kind: NotificationType) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| n.kind == kind).collect()
    }

    /// Prepends `n`. Ids are not deduplicated; callers keep them unique.
    pub fn add_notification(&mut self, n: Notification) {
        debug!(id = %n.id, kind = %n.kind, "add notification");
        self.notifications.insert(0, n);
        self.changed();
    }

    /// Marks the first entry with `id` as read. The counter is recomputed even
    /// when nothing matches.
    pub fn mark_as_read(&mut self, id: &str) -> Result<(), StoreError> {
        let found = match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.is_read = true;
                true
            }
            None => false,
        };
        self.changed();
        if found {
            debug!(id, "notification read");
            Ok(())
        } else {
            warn!(id, "mark_as_read: no such notification");
            Err(StoreError::not_found("notification", id))
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for n in &mut self.notifications {
            n.is_read = true;
        }
        self.unread_count = 0;
        self.publish();
    }

    /// Removes every entry carrying `id` and returns the first of them.
    pub fn delete_notification(&mut self, id: &str) -> Result<Notification, StoreError> {
        let removed = self
            .notifications
            .iter()
            .position(|n| n.id == id)
            .map(|idx| self.notifications.remove(idx));
        if removed.is_some() {
            self.notifications.retain(|n| n.id != id);
        }
        self.changed();
        removed.ok_or_else(|| {
            warn!(id, "delete_notification: no such notification");
            StoreError::not_found("notification", id)
        })
    }

    pub fn clear_all(&mut self) -> usize {
        let n = self.notifications.len();
        self.notifications.clear();
        self.changed();
        n
    }

    /// Non-empty groups in fixed category order. Pure: repeated calls on an
    /// unchanged store return equal results.
    pub fn grouped_notifications(&self) -> Vec<NotificationGroup> {
        GROUPS
            .iter()
            .filter_map(|&(kind, title, icon)| {
                let notifications: Vec<Notification> = self
                    .notifications
                    .iter()
                    .filter(|n| n.kind == kind)
                    .cloned()
                    .collect();
                let count = notifications.len();
                (count > 0).then_some(NotificationGroup {
                    kind,
                    title,
                    icon,
                    notifications,
                    count,
                })
            })
            .collect()
    }

    fn recount(&mut self) {
        self.unread_count = self.notifications.iter().filter(|n| !n.is_read).count();
    }

    fn changed(&mut self) {
        self.recount();
        self.publish();
    }

    fn publish(&mut self) {
        let event = StoreEvent::NotificationsChanged {
            total: self.notifications.len(),
            unread: self.unread_count,
        };
        self.events.publish(event);
    }
}
