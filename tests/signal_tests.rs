// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, TimeZone, Utc};
use fxdesk::app::App;
use fxdesk::clock::ManualClock;
use fxdesk::collab::{CsvExporter, JsonExporter, MemoryClipboard};
use fxdesk::error::StoreError;
use fxdesk::events::StoreEvent;
use fxdesk::models::{SignalAction, SignalStatus, TradingSignal};
use fxdesk::stores::SignalStore;
use fxdesk::stores::theme::MemoryStorage;
use fxdesk::{cli, commands::signals, seed};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
}

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn signal(id: &str, status: SignalStatus) -> TradingSignal {
    TradingSignal {
        id: id.into(),
        symbol: "EUR/USD".into(),
        action: SignalAction::Buy,
        confidence: 80,
        entry_price: d("1.0850"),
        target_price: d("1.0920"),
        stop_loss: d("1.0810"),
        status,
        created_at: t0(),
        expires_at: None,
        profit_loss: None,
        profit_loss_percent: None,
        strategy: "Breakout".into(),
        timeframe: "H1".into(),
        description: "Range breakout above resistance".into(),
        tags: vec!["breakout".into()],
    }
}

fn seeded() -> SignalStore {
    SignalStore::new(seed::signals(t0()), seed::performance(t0()))
}

#[test]
fn completing_a_signal_changes_only_its_status() {
    let mut store = SignalStore::new(
        vec![signal("1", SignalStatus::Active)],
        seed::performance(t0()),
    );
    let before = store.signal("1").unwrap().clone();

    let updated = store
        .update_signal_status("1", SignalStatus::Completed)
        .unwrap()
        .clone();
    assert_eq!(updated.status, SignalStatus::Completed);
    assert_eq!(
        updated,
        TradingSignal {
            status: SignalStatus::Completed,
            ..before
        }
    );

    let err = store
        .update_signal_status("1", SignalStatus::Active)
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidTransition {
            id: "1".into(),
            from: "completed".into(),
            to: "active".into(),
        }
    );
    assert_eq!(store.signal("1").unwrap().status, SignalStatus::Completed);
}

#[test]
fn terminal_statuses_are_final() {
    for terminal in [
        SignalStatus::Completed,
        SignalStatus::Cancelled,
        SignalStatus::Expired,
    ] {
        let mut store = SignalStore::new(vec![signal("s", terminal)], seed::performance(t0()));
        for &next in SignalStatus::ALL {
            assert!(
                store.update_signal_status("s", next).is_err(),
                "{} -> {} should be rejected",
                terminal,
                next
            );
        }
    }
}

#[test]
fn active_signal_may_be_reasserted() {
    let mut store = seeded();
    let s = store
        .update_signal_status("sig-1001", SignalStatus::Active)
        .unwrap();
    assert_eq!(s.status, SignalStatus::Active);
}

#[test]
fn unknown_signal_is_not_found() {
    let mut store = seeded();
    let err = store
        .update_signal_status("sig-404", SignalStatus::Cancelled)
        .unwrap_err();
    assert_eq!(err, StoreError::not_found("signal", "sig-404"));
}

#[test]
fn add_signal_validates_and_prepends() {
    let mut store = seeded();
    let rx = store.subscribe();

    let mut bad = signal("new", SignalStatus::Active);
    bad.confidence = 101;
    assert!(matches!(
        store.add_signal(bad),
        Err(StoreError::Validation(_))
    ));
    let mut bad = signal("new", SignalStatus::Active);
    bad.stop_loss = Decimal::ZERO;
    assert!(matches!(
        store.add_signal(bad),
        Err(StoreError::Validation(_))
    ));
    let mut bad = signal("new", SignalStatus::Active);
    bad.symbol = "  ".into();
    assert!(store.add_signal(bad).is_err());

    store.add_signal(signal("new", SignalStatus::Active)).unwrap();
    assert_eq!(store.signals()[0].id, "new");
    assert_eq!(store.signals().len(), 6);
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![StoreEvent::SignalAdded { id: "new".into() }]
    );
}

#[test]
fn status_filters() {
    let store = seeded();
    let active: Vec<&str> = store.active_signals().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(active, vec!["sig-1001", "sig-1002"]);
    assert_eq!(store.signals_with_status(SignalStatus::Completed).len(), 2);
    assert_eq!(store.signals_with_status(SignalStatus::Cancelled).len(), 0);
}

#[test]
fn summary_is_derived_from_the_signal_list() {
    let store = seeded();
    let s = store.signal_summary();
    assert_eq!(s.total, 5);
    assert_eq!(s.active, 2);
    assert_eq!(s.completed, 2);
    assert_eq!(s.expired, 1);
    assert_eq!(s.wins, 1);
    assert_eq!(s.losses, 1);
    assert_eq!(s.breakeven, 0);
    assert_eq!(s.win_rate, d("50"));
    assert_eq!(s.realized_profit, d("295.00"));

    let empty = SignalStore::new(Vec::new(), seed::performance(t0())).signal_summary();
    assert_eq!(empty.win_rate, Decimal::ZERO);
}

#[test]
fn breakeven_trades_are_neither_wins_nor_losses() {
    let mut flat = signal("flat", SignalStatus::Completed);
    flat.profit_loss = Some(Decimal::ZERO);
    let store = SignalStore::new(vec![flat], seed::performance(t0()));
    let s = store.signal_summary();
    assert_eq!((s.wins, s.losses, s.breakeven), (0, 0, 1));
    assert_eq!(s.win_rate, Decimal::ZERO);

    let mut win = signal("win", SignalStatus::Completed);
    win.profit_loss = Some(d("12.50"));
    let mut flat = signal("flat", SignalStatus::Completed);
    flat.profit_loss = Some(d("0.00"));
    let store = SignalStore::new(vec![win, flat], seed::performance(t0()));
    let s = store.signal_summary();
    assert_eq!((s.wins, s.losses, s.breakeven), (1, 0, 1));
    assert_eq!(s.win_rate, d("100"));
    assert_eq!(s.realized_profit, d("12.50"));
}

#[test]
fn performance_stays_independent_of_signals() {
    let mut store = seeded();
    let before = store.performance().clone();
    store
        .update_signal_status("sig-1001", SignalStatus::Completed)
        .unwrap();
    assert_eq!(store.performance(), &before);
}

#[test]
fn export_writes_csv_and_json() {
    let store = seeded();
    let dir = tempdir().unwrap();

    let csv_path = store
        .export_signals(&CsvExporter::new(dir.path().join("out")))
        .unwrap();
    let text = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("id,symbol,action,confidence"));
    assert_eq!(lines.count(), 5);
    assert!(text.contains("sig-0998,XAU/USD,buy"));

    let json_path = store.export_signals(&JsonExporter::new(dir.path())).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 5);
    assert_eq!(v[0]["id"], "sig-1001");
}

#[test]
fn export_of_empty_list_fails() {
    let store = SignalStore::new(Vec::new(), seed::performance(t0()));
    let dir = tempdir().unwrap();
    let err = store
        .export_signals(&CsvExporter::new(dir.path()))
        .unwrap_err();
    assert!(format!("{:#}", err).contains("nothing to export"));
    assert!(!dir.path().join("signals.csv").exists());
}

#[test]
fn copy_signal_writes_share_text() {
    let store = seeded();
    let mut clipboard = MemoryClipboard::default();
    let text = store.copy_signal("sig-1002", &mut clipboard).unwrap();
    assert!(text.starts_with("SELL GBP/JPY @ "));
    assert!(text.contains("Confidence: "));
    assert_eq!(clipboard.last(), Some(text.as_str()));

    assert!(store.copy_signal("sig-404", &mut clipboard).is_err());
    assert_eq!(clipboard.len(), 1);
}

fn app() -> App {
    let clock = Arc::new(ManualClock::new(t0()));
    App::seeded(
        clock.clone(),
        clock,
        Duration::ZERO,
        Box::new(MemoryStorage::default()),
    )
    .unwrap()
}

#[test]
fn list_filters_by_status() {
    let app = app();
    let matches = cli::build_cli().get_matches_from([
        "fxdesk", "signals", "list", "--status", " Completed ",
    ]);
    let Some(("signals", sm)) = matches.subcommand() else {
        panic!("signals command not parsed");
    };
    let (_, lm) = sm.subcommand().unwrap();
    let rows = signals::query_rows(&app, lm).unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["sig-0998", "sig-0995"]);
}

#[test]
fn close_command_rejects_active_target() {
    let mut app = app();
    let matches = cli::build_cli().get_matches_from([
        "fxdesk", "signals", "close", "--id", "sig-1001", "--status", "active",
    ]);
    let (_, sm) = matches.subcommand().unwrap();
    assert!(signals::handle(&mut app, sm).is_err());

    let matches = cli::build_cli().get_matches_from([
        "fxdesk", "signals", "close", "--id", "sig-1001", "--status", "cancelled",
    ]);
    let (_, sm) = matches.subcommand().unwrap();
    signals::handle(&mut app, sm).unwrap();
    assert_eq!(
        app.signals.signal("sig-1001").unwrap().status,
        SignalStatus::Cancelled
    );
}

#[test]
fn copy_command_uses_app_clipboard() {
    let mut app = app();
    let matches =
        cli::build_cli().get_matches_from(["fxdesk", "signals", "copy", "--id", "sig-1001"]);
    let (_, sm) = matches.subcommand().unwrap();
    signals::handle(&mut app, sm).unwrap();
    assert!(app.clipboard.last().unwrap().starts_with("BUY EUR/USD"));
}
