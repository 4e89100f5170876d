// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::collab::{CsvExporter, JsonExporter, SignalExporter};
use crate::models::SignalStatus;
use crate::utils::{fmt_pct, maybe_print_json, optional, parse_enum, pretty_table, required};
use anyhow::{Result, bail};
use serde::Serialize;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        Some(("performance", sub)) => performance(app, sub)?,
        Some(("summary", sub)) => summary(app, sub)?,
        Some(("close", sub)) => close(app, sub)?,
        Some(("export", sub)) => export(app, sub)?,
        Some(("copy", sub)) => copy(app, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct SignalRow {
    pub id: String,
    pub symbol: String,
    pub action: String,
    pub confidence: u8,
    pub entry: String,
    pub target: String,
    pub stop: String,
    pub status: String,
    pub pnl: String,
}

pub fn query_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<SignalRow>> {
    let status = optional(sub, "status")
        .map(|s| parse_enum::<SignalStatus>(&s))
        .transpose()?;
    Ok(app
        .signals
        .signals()
        .iter()
        .filter(|s| status.is_none_or(|st| s.status == st))
        .map(|s| SignalRow {
            id: s.id.clone(),
            symbol: s.symbol.clone(),
            action: s.action.as_str().to_uppercase(),
            confidence: s.confidence,
            entry: s.entry_price.to_string(),
            target: s.target_price.to_string(),
            stop: s.stop_loss.to_string(),
            status: s.status.to_string(),
            pnl: s.profit_loss_percent.map(|p| fmt_pct(&p)).unwrap_or_default(),
        })
        .collect())
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(app, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|r| {
                vec![
                    r.id,
                    r.symbol,
                    r.action,
                    format!("{}%", r.confidence),
                    r.entry,
                    r.target,
                    r.stop,
                    r.status,
                    r.pnl,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Symbol", "Action", "Conf", "Entry", "Target", "Stop", "Status", "P/L"],
                rows,
            )
        );
    }
    Ok(())
}

fn performance(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let p = app.signals.performance();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), p)? {
        return Ok(());
    }
    let rows = vec![
        vec!["Total signals".into(), p.total_signals.to_string()],
        vec!["Winning / losing".into(), format!("{} / {}", p.winning_trades, p.losing_trades)],
        vec!["Win rate".into(), format!("{:.2}%", p.win_rate)],
        vec!["Total profit".into(), format!("{:.2}", p.total_profit)],
        vec!["Average profit".into(), format!("{:.2}", p.average_profit)],
        vec!["Profit factor".into(), p.profit_factor.to_string()],
        vec!["Max drawdown".into(), format!("{:.2}%", p.max_drawdown)],
        vec!["Sharpe ratio".into(), p.sharpe_ratio.to_string()],
        vec![
            "Best trade".into(),
            format!("{} {:.2} ({})", p.best_trade.symbol, p.best_trade.profit, p.best_trade.date),
        ],
        vec![
            "Worst trade".into(),
            format!("{} {:.2} ({})", p.worst_trade.symbol, p.worst_trade.profit, p.worst_trade.date),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));

    let months = p
        .monthly_returns
        .iter()
        .map(|m| vec![m.month.clone(), fmt_pct(&m.return_pct)])
        .collect();
    println!("{}", pretty_table(&["Month", "Return"], months));

    let assets = p
        .top_assets
        .iter()
        .map(|a| {
            vec![
                a.symbol.clone(),
                a.trades.to_string(),
                format!("{:.2}%", a.win_rate),
                format!("{:.2}", a.profit),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Asset", "Trades", "Win rate", "Profit"], assets)
    );
    Ok(())
}

fn summary(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let s = app.signals.signal_summary();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        let rows = vec![vec![
            s.total.to_string(),
            s.active.to_string(),
            s.completed.to_string(),
            s.cancelled.to_string(),
            s.expired.to_string(),
            format!("{}/{}/{}", s.wins, s.losses, s.breakeven),
            format!("{:.2}%", s.win_rate),
            format!("{:.2}", s.realized_profit),
        ]];
        println!(
            "{}",
            pretty_table(
                &[
                    "Total", "Active", "Completed", "Cancelled", "Expired", "W/L/BE", "Win rate",
                    "Realized",
                ],
                rows,
            )
        );
    }
    Ok(())
}

fn close(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let status: SignalStatus = parse_enum(&required(sub, "status")?)?;
    if !status.is_terminal() {
        bail!("A signal can only be closed as completed, cancelled or expired");
    }
    let s = app.signals.update_signal_status(&id, status)?;
    println!("Signal {} ({}) is now {}", s.id, s.symbol, s.status);
    Ok(())
}

fn export(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;
    let exporter: Box<dyn SignalExporter> = match fmt.as_str() {
        "csv" => Box::new(CsvExporter::new(&out)),
        "json" => Box::new(JsonExporter::new(&out)),
        other => bail!("Unknown format: {} (use csv|json)", other),
    };
    let path = app.signals.export_signals(exporter.as_ref())?;
    println!("Exported {} signals to {}", app.signals.signals().len(), path.display());
    Ok(())
}

fn copy(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let text = app.signals.copy_signal(&id, &mut app.clipboard)?;
    println!("Copied to clipboard:\n{}", text);
    Ok(())
}
