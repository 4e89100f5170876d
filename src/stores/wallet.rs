// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::clock::Clock;
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::models::{
    NewTransaction, Transaction, TransactionKind, TransactionStatus, WalletAsset,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use tracing::{debug, warn};

/// Asset snapshot plus an append-only transaction log.
///
/// Balances are the seeded snapshot and are not rebuilt from the log;
/// [`WalletStore::ledger_balances`] derives the log's own view for
/// reconciliation.
pub struct WalletStore {
    assets: Vec<WalletAsset>,
    transactions: Vec<Transaction>,
    next_seq: u64,
    clock: Arc<dyn Clock>,
    events: EventBus,
}

impl WalletStore {
    pub fn new(
        assets: Vec<WalletAsset>,
        transactions: Vec<Transaction>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            assets,
            transactions,
            next_seq: 1,
            clock,
            events: EventBus::default(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn assets(&self) -> &[WalletAsset] {
        &self.assets
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transactions_with_status(&self, status: TransactionStatus) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.status == status)
            .collect()
    }

    pub fn total_balance(&self) -> Decimal {
        self.assets.iter().map(|a| a.value).sum()
    }

    /// Appends a pending transaction stamped with the clock. Newest first.
    pub fn add_transaction(&mut self, tx: NewTransaction) -> Result<&Transaction, StoreError> {
        if tx.amount <= Decimal::ZERO {
            return Err(StoreError::validation(format!(
                "transaction amount must be positive, got {}",
                tx.amount
            )));
        }
        if tx.value < Decimal::ZERO {
            return Err(StoreError::validation(format!(
                "transaction value must not be negative, got {}",
                tx.value
            )));
        }
        let asset = tx.asset.trim().to_uppercase();
        if asset.is_empty() {
            return Err(StoreError::validation("transaction asset must not be empty"));
        }
        let now = self.clock.now();
        let id = format!("tx-{}-{}", now.timestamp_millis(), self.next_seq);
        self.next_seq += 1;
        let created = Transaction {
            id: id.clone(),
            kind: tx.kind,
            asset,
            amount: tx.amount,
            value: tx.value,
            status: TransactionStatus::Pending,
            timestamp: now,
            reference: tx.reference,
            note: tx.note,
        };
        debug!(%id, kind = %created.kind, "add transaction");
        self.transactions.insert(0, created);
        self.events.publish(StoreEvent::TransactionAdded { id });
        Ok(&self.transactions[0])
    }

    /// Settles a pending transaction. Settled entries never change again.
    pub fn update_transaction_status(
        &mut self,
        id: &str,
        status: TransactionStatus,
    ) -> Result<&Transaction, StoreError> {
        let idx = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("transaction", id))?;
        let current = self.transactions[idx].status;
        if current != TransactionStatus::Pending {
            warn!(id, from = %current, to = %status, "rejected transaction transition");
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                from: current.to_string(),
                to: status.to_string(),
            });
        }
        self.transactions[idx].status = status;
        self.events.publish(StoreEvent::TransactionStatusChanged {
            id: id.to_string(),
            status,
        });
        Ok(&self.transactions[idx])
    }

    /// Net amount per asset over completed transactions. Deposits and trades
    /// credit the asset; withdrawals and transfers debit it.
    pub fn ledger_balances(&self) -> BTreeMap<String, Decimal> {
        let mut out = BTreeMap::new();
        for t in self
            .transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
        {
            let signed = match t.kind {
                TransactionKind::Deposit | TransactionKind::Trade => t.amount,
                TransactionKind::Withdrawal | TransactionKind::Transfer => -t.amount,
            };
            *out.entry(t.asset.clone()).or_insert(Decimal::ZERO) += signed;
        }
        out
    }
}
