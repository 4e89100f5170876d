// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::events::{EventBus, StoreEvent};
use crate::models::{ThemeMode, ThemePreference};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use tracing::{debug, warn};

pub const THEME_KEY: &str = "fxdesk.theme_preference";

/// Device-local key-value storage.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub primary: &'static str,
    pub profit: &'static str,
    pub loss: &'static str,
}

pub static LIGHT: Theme = Theme {
    mode: ThemeMode::Light,
    background: "#F7F9FC",
    surface: "#FFFFFF",
    text: "#0B1426",
    muted: "#6B7A90",
    primary: "#2962FF",
    profit: "#00A86B",
    loss: "#E5484D",
};

pub static DARK: Theme = Theme {
    mode: ThemeMode::Dark,
    background: "#0B1426",
    surface: "#141F33",
    text: "#F2F5FA",
    muted: "#8A97AD",
    primary: "#4C7DFF",
    profit: "#16C784",
    loss: "#FF5C61",
};

pub fn theme_for(mode: ThemeMode) -> &'static Theme {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

/// Theme mode, persisted on every change.
pub struct ThemeStore<S: PreferenceStorage> {
    pref: ThemePreference,
    storage: S,
    events: EventBus,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Reads the stored preference. Missing or unreadable values fall back to
    /// the default (light, following the system).
    pub fn load(storage: S) -> Result<Self> {
        let pref = match storage.get(THEME_KEY)? {
            Some(raw) => serde_json::from_str::<ThemePreference>(&raw).unwrap_or_else(|err| {
                warn!(%err, "ignoring malformed theme preference");
                ThemePreference::default()
            }),
            None => ThemePreference::default(),
        };
        debug!(mode = %pref.theme, system = pref.is_system_theme, "theme loaded");
        Ok(Self {
            pref,
            storage,
            events: EventBus::default(),
        })
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn preference(&self) -> ThemePreference {
        self.pref
    }

    pub fn mode(&self) -> ThemeMode {
        self.pref.theme
    }

    pub fn is_dark(&self) -> bool {
        self.pref.theme == ThemeMode::Dark
    }

    pub fn theme(&self) -> &'static Theme {
        theme_for(self.pref.theme)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Explicit choice; stops following the system setting.
    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<()> {
        self.apply(ThemePreference {
            theme: mode,
            is_system_theme: false,
        })
    }

    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.pref.theme.flipped();
        self.set_mode(next)?;
        Ok(next)
    }

    pub fn use_system_theme(&mut self, system_mode: ThemeMode) -> Result<()> {
        self.apply(ThemePreference {
            theme: system_mode,
            is_system_theme: true,
        })
    }

    fn apply(&mut self, pref: ThemePreference) -> Result<()> {
        let raw = serde_json::to_string(&pref)?;
        self.storage
            .set(THEME_KEY, &raw)
            .context("Failed to persist theme preference")?;
        self.pref = pref;
        self.events.publish(StoreEvent::ThemeChanged {
            mode: pref.theme,
            is_system_theme: pref.is_system_theme,
        });
        Ok(())
    }
}

impl PreferenceStorage for Box<dyn PreferenceStorage> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
