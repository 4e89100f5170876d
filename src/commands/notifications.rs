// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::{Notification, NotificationType};
use crate::utils::{maybe_print_json, optional, parse_enum, pretty_table, relative_time, required};
use anyhow::Result;
use serde::Serialize;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        Some(("groups", sub)) => groups(app, sub)?,
        Some(("read", sub)) => {
            let id = required(sub, "id")?;
            app.notifications.mark_as_read(&id)?;
            println!(
                "Marked {} as read ({} unread)",
                id,
                app.notifications.unread_count()
            );
        }
        Some(("read-all", _)) => {
            app.notifications.mark_all_as_read();
            println!("All notifications marked as read");
        }
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            let removed = app.notifications.delete_notification(&id)?;
            println!(
                "Removed '{}' ({} unread)",
                removed.title,
                app.notifications.unread_count()
            );
        }
        Some(("clear", _)) => {
            let n = app.notifications.clear_all();
            println!("Cleared {} notifications", n);
        }
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct NotificationRow {
    pub id: String,
    pub kind: String,
    pub priority: String,
    pub title: String,
    pub age: String,
    pub read: bool,
}

pub fn query_rows(app: &App, sub: &clap::ArgMatches) -> Result<Vec<NotificationRow>> {
    let kind = optional(sub, "type")
        .map(|s| parse_enum::<NotificationType>(&s))
        .transpose()?;
    let unread_only = sub.get_flag("unread");
    let now = app.clock.now();
    let matching: Vec<&Notification> = match kind {
        Some(k) => app.notifications.notifications_of_type(k),
        None => app.notifications.notifications().iter().collect(),
    };
    Ok(matching
        .into_iter()
        .filter(|n| !unread_only || !n.is_read)
        .map(|n| NotificationRow {
            id: n.id.clone(),
            kind: n.kind.to_string(),
            priority: n.priority.to_string(),
            title: n.title.clone(),
            age: relative_time(n.timestamp, now),
            read: n.is_read,
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
                    if r.read { " ".into() } else { "●".into() },
                    r.id,
                    r.kind,
                    r.priority,
                    r.title,
                    r.age,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["", "ID", "Type", "Priority", "Title", "When"], rows)
        );
        println!("{} unread", app.notifications.unread_count());
    }
    Ok(())
}

fn groups(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let groups = app.notifications.grouped_notifications();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &groups)? {
        let rows = groups
            .iter()
            .map(|g| {
                let unread = g.notifications.iter().filter(|n| !n.is_read).count();
                vec![
                    g.title.to_string(),
                    g.icon.to_string(),
                    g.count.to_string(),
                    unread.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Group", "Icon", "Count", "Unread"], rows)
        );
    }
    Ok(())
}
