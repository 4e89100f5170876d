// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::collab::{Clipboard, SignalExporter};
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::models::{BotPerformance, SignalStatus, TradingSignal};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use tracing::{debug, info, warn};

/// Trading signals and the bot's performance summary.
#[derive(Debug)]
pub struct SignalStore {
    signals: Vec<TradingSignal>,
    performance: BotPerformance,
    events: EventBus,
}

/// Figures computed from the signal list itself, for comparison with the
/// seeded [`BotPerformance`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub expired: usize,
    pub wins: usize,
    pub losses: usize,
    pub breakeven: usize,
    pub win_rate: Decimal, // wins over wins + losses, in percent
    pub realized_profit: Decimal,
}

impl SignalStore {
    pub fn new(signals: Vec<TradingSignal>, performance: BotPerformance) -> Self {
        Self {
            signals,
            performance,
            events: EventBus::default(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn signals(&self) -> &[TradingSignal] {
        &self.signals
    }

    pub fn signal(&self, id: &str) -> Option<&TradingSignal> {
        self.signals.iter().find(|s| s.id == id)
    }

    pub fn active_signals(&self) -> Vec<&TradingSignal> {
        self.signals_with_status(SignalStatus::Active)
    }

    pub fn signals_with_status(&self, status: SignalStatus) -> Vec<&TradingSignal> {
        self.signals.iter().filter(|s| s.status == status).collect()
    }

    pub fn performance(&self) -> &BotPerformance {
        &self.performance
    }

    pub fn add_signal(&mut self, signal: TradingSignal) -> Result<(), StoreError> {
        validate_signal(&signal)?;
        debug!(id = %signal.id, symbol = %signal.symbol, "add signal");
        let id = signal.id.clone();
        self.signals.insert(0, signal);
        self.events.publish(StoreEvent::SignalAdded { id });
        Ok(())
    }

    /// Replaces the status of one signal and nothing else. Only `active`
    /// signals may change; terminal statuses are final.
    pub fn update_signal_status(
        &mut self,
        id: &str,
        status: SignalStatus,
    ) -> Result<&TradingSignal, StoreError> {
        let idx = self
            .signals
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("signal", id))?;

        let current = self.signals[idx].status;
        if current.is_terminal() {
            warn!(id, from = %current, to = %status, "rejected signal transition");
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                from: current.to_string(),
                to: status.to_string(),
            });
        }

        self.signals[idx].status = status;
        debug!(id, %status, "signal status updated");
        self.events.publish(StoreEvent::SignalStatusChanged {
            id: id.to_string(),
            status,
        });
        Ok(&self.signals[idx])
    }

    pub fn export_signals(&self, exporter: &dyn SignalExporter) -> Result<PathBuf> {
        let path = exporter
            .export(&self.signals)
            .context("Failed to export signals")?;
        info!(count = self.signals.len(), path = %path.display(), "signals exported");
        Ok(path)
    }

    pub fn copy_signal(&self, id: &str, clipboard: &mut dyn Clipboard) -> Result<String> {
        let signal = self
            .signal(id)
            .ok_or_else(|| StoreError::not_found("signal", id))?;
        let text = signal_share_text(signal);
        clipboard
            .write(&text)
            .with_context(|| format!("Failed to copy signal '{}'", id))?;
        debug!(id, "signal copied");
        Ok(text)
    }

    pub fn signal_summary(&self) -> SignalSummary {
        let count = |st: SignalStatus| self.signals.iter().filter(|s| s.status == st).count();
        let closed_pl: Vec<Decimal> = self
            .signals
            .iter()
            .filter(|s| s.status == SignalStatus::Completed)
            .filter_map(|s| s.profit_loss)
            .collect();
        let wins = closed_pl.iter().filter(|p| **p > Decimal::ZERO).count();
        let losses = closed_pl.iter().filter(|p| **p < Decimal::ZERO).count();
        // breakeven trades count as neither and stay out of the win rate
        let decided = wins + losses;
        let win_rate = if decided == 0 {
            Decimal::ZERO
        } else {
            let denom = Decimal::from(decided as u64);
            (Decimal::from(wins as u64) * Decimal::ONE_HUNDRED / denom).round_dp(2)
        };
        SignalSummary {
            total: self.signals.len(),
            active: count(SignalStatus::Active),
            completed: count(SignalStatus::Completed),
            cancelled: count(SignalStatus::Cancelled),
            expired: count(SignalStatus::Expired),
            wins,
            losses,
            breakeven: closed_pl.len() - decided,
            win_rate,
            realized_profit: closed_pl.iter().copied().sum(),
        }
    }
}

fn validate_signal(s: &TradingSignal) -> Result<(), StoreError> {
    if s.id.trim().is_empty() {
        return Err(StoreError::validation("signal id must not be empty"));
    }
    if s.symbol.trim().is_empty() {
        return Err(StoreError::validation("signal symbol must not be empty"));
    }
    if s.confidence > 100 {
        return Err(StoreError::validation(format!(
            "confidence {} is outside 0..=100",
            s.confidence
        )));
    }
    for (name, price) in [
        ("entry_price", s.entry_price),
        ("target_price", s.target_price),
        ("stop_loss", s.stop_loss),
    ] {
        if price <= Decimal::ZERO {
            return Err(StoreError::validation(format!(
                "{} must be positive, got {}",
                name, price
            )));
        }
    }
    Ok(())
}

/// Plain-text form used when a signal is copied or shared.
pub fn signal_share_text(s: &TradingSignal) -> String {
    format!(
        "{} {} @ {}\nTarget: {}\nStop: {}\nConfidence: {}%\nStrategy: {} ({})",
        s.action.as_str().to_uppercase(),
        s.symbol,
        s.entry_price,
        s.target_price,
        s.stop_loss,
        s.confidence,
        s.strategy,
        s.timeframe
    )
}
