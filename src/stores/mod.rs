// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod notifications;
pub mod settings;
pub mod signals;
pub mod subscription;
pub mod theme;
pub mod wallet;

pub use notifications::NotificationStore;
pub use settings::SettingsStore;
pub use signals::SignalStore;
pub use subscription::SubscriptionStore;
pub use theme::ThemeStore;
pub use wallet::WalletStore;
