// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::{
    NewTicket, NotificationPreferencesUpdate, PreferencesUpdate, ProfileUpdate, RiskLevel,
    SecurityUpdate, TicketPriority, TradingPreferencesUpdate,
};
use crate::utils::{
    maybe_print_json, optional, parse_decimal, parse_enum, pretty_table, relative_time, required,
};
use anyhow::{Result, bail};
use serde_json::json;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(app, sub)?,
        Some(("profile", sub)) => {
            let p = app.settings.update_profile(profile_update(sub)?)?;
            println!("Profile saved: {} <{}>", p.name, p.email);
        }
        Some(("security", sub)) => {
            let s = app.settings.update_security(security_update(sub))?;
            println!(
                "Security saved: biometric={}, login alerts={}, timeout={} min",
                s.biometric_enabled, s.login_alerts, s.session_timeout_minutes
            );
        }
        Some(("prefs", sub)) => {
            let p = app.settings.update_preferences(preferences_update(sub)?)?;
            println!(
                "Preferences saved: {} / {} / {}",
                p.language, p.currency, p.timezone
            );
        }
        Some(("2fa", _)) => {
            let on = app.settings.toggle_two_factor();
            println!(
                "Two-factor authentication {}",
                if on { "enabled" } else { "disabled" }
            );
        }
        Some(("devices", sub)) => devices(app, sub)?,
        Some(("device-rm", sub)) => {
            let id = required(sub, "id")?;
            let d = app.settings.remove_device(&id)?;
            println!("Signed out {} ({})", d.name, d.location);
        }
        Some(("tickets", sub)) => tickets(app, sub)?,
        Some(("ticket", sub)) => {
            let ticket = NewTicket {
                subject: required(sub, "subject")?,
                description: required(sub, "description")?,
                category: required(sub, "category")?,
                priority: parse_enum::<TicketPriority>(&required(sub, "priority")?)?,
            };
            let t = app.settings.create_support_ticket(ticket)?;
            println!("Opened ticket {}: {}", t.id, t.subject);
        }
        _ => {}
    }
    Ok(())
}

pub fn profile_update(sub: &clap::ArgMatches) -> Result<ProfileUpdate> {
    let update = ProfileUpdate {
        name: optional(sub, "name"),
        email: optional(sub, "email"),
        phone: optional(sub, "phone"),
        country: optional(sub, "country"),
        avatar_url: None,
    };
    if update == ProfileUpdate::default() {
        bail!("Nothing to update: pass at least one of --name, --email, --phone, --country");
    }
    Ok(update)
}

fn security_update(sub: &clap::ArgMatches) -> SecurityUpdate {
    SecurityUpdate {
        two_factor_enabled: None,
        biometric_enabled: sub.get_one::<bool>("biometric").copied(),
        login_alerts: sub.get_one::<bool>("login_alerts").copied(),
        session_timeout_minutes: sub.get_one::<u32>("session_timeout").copied(),
    }
}

pub fn preferences_update(sub: &clap::ArgMatches) -> Result<PreferencesUpdate> {
    let notifications = NotificationPreferencesUpdate {
        push: sub.get_one::<bool>("push").copied(),
        email: sub.get_one::<bool>("email_alerts").copied(),
        signals: sub.get_one::<bool>("signal_alerts").copied(),
        news: sub.get_one::<bool>("news_alerts").copied(),
        ..Default::default()
    };
    let trading = TradingPreferencesUpdate {
        default_lot_size: optional(sub, "lot_size")
            .map(|s| parse_decimal(&s))
            .transpose()?,
        risk_level: optional(sub, "risk_level")
            .map(|s| parse_enum::<RiskLevel>(&s))
            .transpose()?,
        confirm_orders: sub.get_one::<bool>("confirm_orders").copied(),
        ..Default::default()
    };
    Ok(PreferencesUpdate {
        language: optional(sub, "language"),
        currency: optional(sub, "currency").map(|c| c.to_uppercase()),
        timezone: optional(sub, "timezone"),
        notifications: (notifications != NotificationPreferencesUpdate::default())
            .then_some(notifications),
        trading: (trading != TradingPreferencesUpdate::default()).then_some(trading),
    })
}

fn show(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let s = &app.settings;
    let all = json!({
        "profile": s.profile(),
        "security": s.security(),
        "preferences": s.preferences(),
    });
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &all)? {
        return Ok(());
    }
    let p = s.profile();
    let sec = s.security();
    let prefs = s.preferences();
    let yes_no = |b: bool| (if b { "on" } else { "off" }).to_string();
    let rows = vec![
        vec!["Name".into(), p.name.clone()],
        vec!["Email".into(), p.email.clone()],
        vec!["Phone".into(), p.phone.clone().unwrap_or_default()],
        vec!["Country".into(), p.country.clone()],
        vec!["Member since".into(), p.member_since.to_string()],
        vec!["Two-factor".into(), yes_no(sec.two_factor_enabled)],
        vec!["Biometric".into(), yes_no(sec.biometric_enabled)],
        vec!["Login alerts".into(), yes_no(sec.login_alerts)],
        vec!["Session timeout".into(), format!("{} min", sec.session_timeout_minutes)],
        vec!["Language".into(), prefs.language.clone()],
        vec!["Currency".into(), prefs.currency.clone()],
        vec!["Timezone".into(), prefs.timezone.clone()],
        vec!["Push".into(), yes_no(prefs.notifications.push)],
        vec!["Email alerts".into(), yes_no(prefs.notifications.email)],
        vec!["Signal alerts".into(), yes_no(prefs.notifications.signals)],
        vec!["News alerts".into(), yes_no(prefs.notifications.news)],
        vec!["Lot size".into(), prefs.trading.default_lot_size.to_string()],
        vec!["Risk level".into(), prefs.trading.risk_level.to_string()],
        vec!["Confirm orders".into(), yes_no(prefs.trading.confirm_orders)],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}

fn devices(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let devices = app.settings.devices();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &devices)? {
        let now = app.clock.now();
        let rows = devices
            .iter()
            .map(|d| {
                vec![
                    d.id.clone(),
                    d.name.clone(),
                    d.kind.clone(),
                    d.location.clone(),
                    if d.is_current {
                        "this device".to_string()
                    } else {
                        relative_time(d.last_active, now)
                    },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Device", "Type", "Location", "Last active"], rows)
        );
    }
    Ok(())
}

fn tickets(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let tickets = app.settings.tickets();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &tickets)? {
        let rows = tickets
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.subject.clone(),
                    t.category.clone(),
                    t.priority.to_string(),
                    t.status.to_string(),
                    t.updated_at.format("%Y-%m-%d %H:%M").to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Subject", "Category", "Priority", "Status", "Updated"],
                rows
            )
        );
    }
    Ok(())
}
