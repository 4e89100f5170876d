// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Simulated backend round trip for subscription changes.
pub const DEFAULT_LATENCY_MS: u64 = 1500;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub latency: Duration,
    pub log_filter: String,
}

impl AppConfig {
    /// Global flags win over their environment variables (wired through clap),
    /// which win over the defaults.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let db_path = match m.get_one::<String>("db").map(|s| s.trim()) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => crate::db::default_db_path()?,
        };
        let latency_ms = match m.get_one::<String>("latency_ms").map(|s| s.trim()) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid latency '{}', expected milliseconds", raw))?,
            _ => DEFAULT_LATENCY_MS,
        };
        let log_filter = m
            .get_one::<String>("log_level")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Ok(Self {
            db_path,
            latency: Duration::from_millis(latency_ms),
            log_filter,
        })
    }
}
