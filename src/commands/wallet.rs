// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::{NewTransaction, TransactionKind, TransactionStatus};
use crate::utils::{
    fmt_money, fmt_pct, maybe_print_json, optional, parse_decimal, parse_enum, pretty_table,
    required,
};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("assets", sub)) => assets(app, sub)?,
        Some(("tx", sub)) => transactions(app, sub)?,
        Some(("ledger", sub)) => ledger(app, sub)?,
        Some(("add", sub)) => {
            let tx = NewTransaction {
                kind: parse_enum::<TransactionKind>(&required(sub, "kind")?)?,
                asset: required(sub, "asset")?,
                amount: parse_decimal(&required(sub, "amount")?)?,
                value: parse_decimal(&required(sub, "value")?)?,
                reference: None,
                note: optional(sub, "note"),
            };
            let t = app.wallet.add_transaction(tx)?;
            println!("Recorded {} {} {} as {}", t.kind, t.amount, t.asset, t.id);
        }
        Some(("settle", sub)) => {
            let id = required(sub, "id")?;
            let status = parse_enum::<TransactionStatus>(&required(sub, "status")?)?;
            let t = app.wallet.update_transaction_status(&id, status)?;
            println!("Transaction {} is now {}", t.id, t.status);
        }
        _ => {}
    }
    Ok(())
}

fn assets(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let assets = app.wallet.assets();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &assets)? {
        let rows = assets
            .iter()
            .map(|a| {
                vec![
                    a.symbol.clone(),
                    a.name.clone(),
                    a.balance.to_string(),
                    fmt_money(&a.value, "USD"),
                    fmt_pct(&a.change_24h),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Asset", "Name", "Balance", "Value", "24h"], rows)
        );
        println!("Total balance: {}", fmt_money(&app.wallet.total_balance(), "USD"));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub asset: String,
    pub amount: String,
    pub value: String,
    pub status: String,
    pub note: String,
}

pub fn query_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let status = optional(sub, "status")
        .map(|s| parse_enum::<TransactionStatus>(&s))
        .transpose()?;
    Ok(app
        .wallet
        .transactions()
        .iter()
        .filter(|t| status.is_none_or(|st| t.status == st))
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            kind: t.kind.to_string(),
            asset: t.asset.clone(),
            amount: t.amount.to_string(),
            value: format!("{:.2}", t.value),
            status: t.status.to_string(),
            note: t.note.clone().unwrap_or_default(),
        })
        .collect())
}

fn transactions(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(app, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|r| {
                vec![
                    r.id, r.date, r.kind, r.asset, r.amount, r.value, r.status, r.note,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Asset", "Amount", "Value (USD)", "Status", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct LedgerRow {
    asset: String,
    snapshot: Decimal,
    ledger: Decimal,
}

/// Seeded balances next to the net flow of completed transactions.
fn ledger(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let flows = app.wallet.ledger_balances();
    let mut data: Vec<LedgerRow> = app
        .wallet
        .assets()
        .iter()
        .map(|a| LedgerRow {
            asset: a.symbol.clone(),
            snapshot: a.balance,
            ledger: flows.get(&a.symbol).copied().unwrap_or(Decimal::ZERO),
        })
        .collect();
    for (asset, flow) in &flows {
        if !data.iter().any(|r| &r.asset == asset) {
            data.push(LedgerRow {
                asset: asset.clone(),
                snapshot: Decimal::ZERO,
                ledger: *flow,
            });
        }
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.asset.clone(),
                    r.snapshot.to_string(),
                    r.ledger.to_string(),
                    (r.snapshot - r.ledger).to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Asset", "Balance", "Ledger net", "Unexplained"], rows)
        );
    }
    Ok(())
}
