// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::clock::Clock;
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::models::{
    Device, NewTicket, Preferences, PreferencesUpdate, ProfileUpdate, SecuritySettings,
    SecurityUpdate, SupportTicket, TicketStatus, UserProfile,
};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use tracing::{debug, warn};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

const SESSION_TIMEOUT_RANGE: std::ops::RangeInclusive<u32> = 5..=1440;

pub struct SettingsStore {
    profile: UserProfile,
    security: SecuritySettings,
    preferences: Preferences,
    devices: Vec<Device>,
    tickets: Vec<SupportTicket>,
    clock: Arc<dyn Clock>,
    events: EventBus,
}

impl SettingsStore {
    pub fn new(
        profile: UserProfile,
        security: SecuritySettings,
        preferences: Preferences,
        devices: Vec<Device>,
        tickets: Vec<SupportTicket>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            profile,
            security,
            preferences,
            devices,
            tickets,
            clock,
            events: EventBus::default(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn security(&self) -> &SecuritySettings {
        &self.security
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn tickets(&self) -> &[SupportTicket] {
        &self.tickets
    }

    /// Applies the fields present in `update`; everything else is kept.
    pub fn update_profile(&mut self, mut update: ProfileUpdate) -> Result<&UserProfile, StoreError> {
        if let Some(name) = update.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(StoreError::validation("name must not be empty"));
            }
        }
        if let Some(email) = update.email.as_mut() {
            *email = email.trim().to_string();
            if !EMAIL.is_match(email) {
                warn!(email = %email, "rejected profile email");
                return Err(StoreError::validation(format!(
                    "'{}' is not a valid email address",
                    email
                )));
            }
        }
        self.profile.merge(update);
        debug!("profile updated");
        self.publish("profile");
        Ok(&self.profile)
    }

    pub fn update_security(
        &mut self,
        update: SecurityUpdate,
    ) -> Result<&SecuritySettings, StoreError> {
        if let Some(minutes) = update.session_timeout_minutes {
            if !SESSION_TIMEOUT_RANGE.contains(&minutes) {
                return Err(StoreError::validation(format!(
                    "session timeout {} min is outside {}..={}",
                    minutes,
                    SESSION_TIMEOUT_RANGE.start(),
                    SESSION_TIMEOUT_RANGE.end()
                )));
            }
        }
        self.security.merge(update);
        debug!("security settings updated");
        self.publish("security");
        Ok(&self.security)
    }

    /// Top-level fields overwrite; `notifications` and `trading` merge one
    /// level down so sibling flags survive a partial update.
    pub fn update_preferences(
        &mut self,
        update: PreferencesUpdate,
    ) -> Result<&Preferences, StoreError> {
        if let Some(lot) = update.trading.as_ref().and_then(|t| t.default_lot_size) {
            if lot <= Decimal::ZERO {
                return Err(StoreError::validation(format!(
                    "default lot size must be positive, got {}",
                    lot
                )));
            }
        }
        self.preferences.merge(update);
        debug!("preferences updated");
        self.publish("preferences");
        Ok(&self.preferences)
    }

    pub fn toggle_two_factor(&mut self) -> bool {
        self.security.two_factor_enabled = !self.security.two_factor_enabled;
        debug!(enabled = self.security.two_factor_enabled, "two-factor toggled");
        self.publish("security");
        self.security.two_factor_enabled
    }

    pub fn add_device(&mut self, device: Device) {
        debug!(id = %device.id, "add device");
        self.devices.push(device);
        self.publish("devices");
    }

    /// Removes a device. The device this session runs on cannot be removed.
    pub fn remove_device(&mut self, id: &str) -> Result<Device, StoreError> {
        let idx = self
            .devices
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| StoreError::not_found("device", id))?;
        if self.devices[idx].is_current {
            warn!(id, "refused to remove the current device");
            return Err(StoreError::validation("the current device cannot be removed"));
        }
        let removed = self.devices.remove(idx);
        self.publish("devices");
        Ok(removed)
    }

    pub fn create_support_ticket(&mut self, ticket: NewTicket) -> Result<&SupportTicket, StoreError> {
        let subject = ticket.subject.trim();
        if subject.is_empty() {
            return Err(StoreError::validation("ticket subject must not be empty"));
        }
        let now = self.clock.now();
        let created = SupportTicket {
            id: format!("TKT-{}", now.timestamp_millis()),
            subject: subject.to_string(),
            description: ticket.description.trim().to_string(),
            category: ticket.category,
            priority: ticket.priority,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %created.id, "support ticket created");
        self.tickets.insert(0, created);
        self.publish("tickets");
        Ok(&self.tickets[0])
    }

    fn publish(&mut self, section: &'static str) {
        self.events.publish(StoreEvent::SettingsChanged { section });
    }
}
