// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Platform capabilities the stores call out to: clipboard and file export.

use crate::error::{ClipboardError, ExportError};
use crate::models::TradingSignal;
use std::fs;
use std::path::{Path, PathBuf};

pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

pub trait SignalExporter {
    fn export(&self, signals: &[TradingSignal]) -> Result<PathBuf, ExportError>;
}

/// Keeps every write in memory. The terminal shell echoes the last entry.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    entries: Vec<String>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.entries.push(text.to_string());
        Ok(())
    }
}

const SIGNAL_COLUMNS: [&str; 12] = [
    "id",
    "symbol",
    "action",
    "confidence",
    "entry_price",
    "target_price",
    "stop_loss",
    "status",
    "created_at",
    "profit_loss",
    "strategy",
    "timeframe",
];

/// Writes `signals.csv` into a directory.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl SignalExporter for CsvExporter {
    fn export(&self, signals: &[TradingSignal]) -> Result<PathBuf, ExportError> {
        if signals.is_empty() {
            return Err(ExportError::Empty);
        }
        fs::create_dir_all(&self.dir)?;
        let out = self.dir.join("signals.csv");
        let mut wtr = csv::Writer::from_path(&out)?;
        wtr.write_record(SIGNAL_COLUMNS)?;
        for s in signals {
            wtr.write_record([
                s.id.clone(),
                s.symbol.clone(),
                s.action.to_string(),
                s.confidence.to_string(),
                s.entry_price.to_string(),
                s.target_price.to_string(),
                s.stop_loss.to_string(),
                s.status.to_string(),
                s.created_at.to_rfc3339(),
                s.profit_loss.map(|p| p.to_string()).unwrap_or_default(),
                s.strategy.clone(),
                s.timeframe.clone(),
            ])?;
        }
        wtr.flush()?;
        Ok(out)
    }
}

/// Writes `signals.json` (pretty-printed array) into a directory.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    dir: PathBuf,
}

impl JsonExporter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl SignalExporter for JsonExporter {
    fn export(&self, signals: &[TradingSignal]) -> Result<PathBuf, ExportError> {
        if signals.is_empty() {
            return Err(ExportError::Empty);
        }
        fs::create_dir_all(&self.dir)?;
        let out = self.dir.join("signals.json");
        fs::write(&out, serde_json::to_string_pretty(signals)?)?;
        Ok(out)
    }
}
