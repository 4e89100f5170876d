// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::clock::{Clock, Latency};
use crate::collab::MemoryClipboard;
use crate::seed;
use crate::stores::theme::PreferenceStorage;
use crate::stores::{
    NotificationStore, SettingsStore, SignalStore, SubscriptionStore, ThemeStore, WalletStore,
};
use anyhow::Result;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Every store the screens work with, owned in one place and handed to the
/// screen handlers explicitly.
pub struct App {
    pub clock: Arc<dyn Clock>,
    pub latency: Arc<dyn Latency>,
    pub delay: Duration,
    pub signals: SignalStore,
    pub notifications: NotificationStore,
    pub settings: SettingsStore,
    pub subscription: Mutex<SubscriptionStore>,
    pub wallet: WalletStore,
    pub theme: ThemeStore<Box<dyn PreferenceStorage>>,
    pub clipboard: MemoryClipboard,
}

impl App {
    /// Builds every store from the seed datasets.
    pub fn seeded(
        clock: Arc<dyn Clock>,
        latency: Arc<dyn Latency>,
        delay: Duration,
        storage: Box<dyn PreferenceStorage>,
    ) -> Result<Self> {
        let now = clock.now();
        Ok(Self {
            signals: SignalStore::new(seed::signals(now), seed::performance(now)),
            notifications: NotificationStore::new(seed::notifications(now)),
            settings: SettingsStore::new(
                seed::profile(now),
                seed::security(now),
                seed::preferences(),
                seed::devices(now),
                seed::tickets(now),
                clock.clone(),
            ),
            subscription: Mutex::new(SubscriptionStore::new(
                seed::PLANS.clone(),
                seed::subscription(now),
                clock.clone(),
            )),
            wallet: WalletStore::new(seed::wallet_assets(), seed::transactions(now), clock.clone()),
            theme: ThemeStore::load(storage)?,
            clipboard: MemoryClipboard::default(),
            clock,
            latency,
            delay,
        })
    }
}
