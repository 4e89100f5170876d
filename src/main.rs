// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use fxdesk::app::App;
use fxdesk::clock::{SystemClock, ThreadLatency};
use fxdesk::config::AppConfig;
use fxdesk::db::{self, SqliteStorage};
use fxdesk::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    let cfg = AppConfig::from_matches(&matches)?;

    // --log-level beats RUST_LOG
    let filter = if matches.get_one::<String>("log_level").is_some() {
        EnvFilter::new(&cfg.log_filter)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let conn = db::open_or_init(&cfg.db_path)?;
    tracing::debug!(db = %cfg.db_path.display(), latency_ms = cfg.latency.as_millis() as u64, "starting");

    let mut app = App::seeded(
        Arc::new(SystemClock),
        Arc::new(ThreadLatency),
        cfg.latency,
        Box::new(SqliteStorage::new(conn)),
    )?;

    match matches.subcommand() {
        Some(("signals", sub)) => commands::signals::handle(&mut app, sub)?,
        Some(("notifications", sub)) => commands::notifications::handle(&mut app, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut app, sub)?,
        Some(("plans", sub)) => commands::plans::handle(&mut app, sub)?,
        Some(("wallet", sub)) => commands::wallet::handle(&mut app, sub)?,
        Some(("theme", sub)) => commands::theme::handle(&mut app, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
