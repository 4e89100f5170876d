// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::Subscription;
use crate::stores::subscription::{cancel_subscription, reactivate_subscription, select_plan};
use crate::utils::{maybe_print_json, pretty_table, required};
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        Some(("current", sub)) => current(app, sub)?,
        Some(("select", sub)) => {
            let id = required(sub, "id")?;
            println!("Activating plan {}...", id);
            let s = select_plan(&app.subscription, app.latency.as_ref(), app.delay, &id)?;
            print_subscription(&s);
        }
        Some(("cancel", _)) => {
            let s = cancel_subscription(&app.subscription, app.latency.as_ref(), app.delay)?;
            print_subscription(&s);
        }
        Some(("reactivate", _)) => {
            let s = reactivate_subscription(&app.subscription, app.latency.as_ref(), app.delay)?;
            print_subscription(&s);
        }
        _ => {}
    }
    Ok(())
}

fn print_subscription(s: &Subscription) {
    println!(
        "Subscription {} on '{}' is {} (auto-renew {}, next billing {})",
        s.id,
        s.plan_id,
        s.status,
        if s.auto_renew { "on" } else { "off" },
        s.next_billing_date.format("%Y-%m-%d")
    );
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let store = app
        .subscription
        .lock()
        .unwrap_or_else(|p| p.into_inner());
    let current = store.subscription().map(|s| s.plan_id.clone());
    let plans = store.plans();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &plans)? {
        let rows = plans
            .iter()
            .map(|p| {
                let mut name = p.name.clone();
                if p.is_popular {
                    name.push_str(" ★");
                }
                vec![
                    if current.as_deref() == Some(p.id.as_str()) { "→".into() } else { String::new() },
                    p.id.clone(),
                    name,
                    format!("{} {:.2}/{}", p.currency, p.price, p.interval),
                    p.features.join(", "),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["", "ID", "Plan", "Price", "Features"], rows)
        );
    }
    Ok(())
}

fn current(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let store = app
        .subscription
        .lock()
        .unwrap_or_else(|p| p.into_inner());
    let sub_rec = store.subscription();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &sub_rec)? {
        return Ok(());
    }
    match sub_rec {
        Some(s) => {
            let plan_name = store
                .current_plan()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| s.plan_id.clone());
            let rows = vec![vec![
                plan_name,
                s.status.to_string(),
                s.start_date.format("%Y-%m-%d").to_string(),
                s.end_date.format("%Y-%m-%d").to_string(),
                if s.auto_renew { "on".into() } else { "off".into() },
            ]];
            println!(
                "{}",
                pretty_table(&["Plan", "Status", "Started", "Ends", "Auto-renew"], rows)
            );
        }
        None => println!("No active subscription"),
    }
    Ok(())
}
