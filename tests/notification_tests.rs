// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, TimeZone, Utc};
use fxdesk::app::App;
use fxdesk::clock::ManualClock;
use fxdesk::error::StoreError;
use fxdesk::events::StoreEvent;
use fxdesk::models::{Notification, NotificationPriority, NotificationType};
use fxdesk::stores::NotificationStore;
use fxdesk::stores::theme::MemoryStorage;
use fxdesk::{cli, commands::notifications, seed};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
}

fn note(id: &str, kind: NotificationType, is_read: bool) -> Notification {
    Notification {
        id: id.into(),
        title: format!("title {}", id),
        message: format!("message {}", id),
        kind,
        priority: NotificationPriority::Medium,
        is_read,
        timestamp: t0(),
        metadata: None,
    }
}

fn expected_unread(store: &NotificationStore) -> usize {
    store.notifications().iter().filter(|n| !n.is_read).count()
}

#[test]
fn seeded_store_counts_unread() {
    let store = NotificationStore::new(seed::notifications(t0()));
    assert_eq!(store.notifications().len(), 7);
    assert_eq!(store.unread_count(), 4);
    assert_eq!(store.unread().count(), 4);
}

#[test]
fn unread_count_tracks_every_mutation() {
    let mut store = NotificationStore::new(seed::notifications(t0()));
    let check = |s: &NotificationStore| assert_eq!(s.unread_count(), expected_unread(s));

    store.add_notification(note("n-a", NotificationType::Trade, false));
    check(&store);
    store.add_notification(note("n-b", NotificationType::News, true));
    check(&store);
    store.mark_as_read("n-a").unwrap();
    check(&store);
    assert!(store.mark_as_read("missing").is_err());
    check(&store);
    store.delete_notification("ntf-1").unwrap();
    check(&store);
    store.delete_notification("ntf-5").unwrap();
    check(&store);
    store.add_notification(note("n-c", NotificationType::System, false));
    check(&store);
    store.mark_all_as_read();
    check(&store);
    assert_eq!(store.unread_count(), 0);
    store.add_notification(note("n-d", NotificationType::Signal, false));
    check(&store);
    assert_eq!(store.unread_count(), 1);
}

#[test]
fn add_notification_prepends() {
    let mut store = NotificationStore::new(seed::notifications(t0()));
    store.add_notification(note("fresh", NotificationType::Market, false));
    assert_eq!(store.notifications()[0].id, "fresh");
}

#[test]
fn unknown_ids_report_not_found() {
    let mut store = NotificationStore::new(seed::notifications(t0()));
    let before = store.notifications().to_vec();

    let err = store.mark_as_read("nope").unwrap_err();
    assert_eq!(err, StoreError::not_found("notification", "nope"));
    let err = store.delete_notification("nope").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "notification", .. }));
    assert_eq!(store.notifications(), before.as_slice());
}

#[test]
fn notifications_of_type_keeps_list_order() {
    let mut store = NotificationStore::new(seed::notifications(t0()));
    let ids: Vec<&str> = store
        .notifications_of_type(NotificationType::Signal)
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(ids, vec!["ntf-1", "ntf-6"]);

    store.add_notification(note("sig-new", NotificationType::Signal, false));
    let signals = store.notifications_of_type(NotificationType::Signal);
    assert_eq!(signals.len(), 3);
    assert_eq!(signals[0].id, "sig-new");
    assert!(signals.iter().all(|n| n.kind == NotificationType::Signal));

    let empty = NotificationStore::new(vec![note("a", NotificationType::News, false)]);
    assert!(empty.notifications_of_type(NotificationType::Trade).is_empty());
}

#[test]
fn delete_removes_every_copy_of_an_id() {
    let mut store = NotificationStore::new(Vec::new());
    store.add_notification(note("dup", NotificationType::Trade, false));
    store.add_notification(note("keep", NotificationType::News, false));
    store.add_notification(note("dup", NotificationType::Market, false));
    assert_eq!(store.unread_count(), 3);

    let removed = store.delete_notification("dup").unwrap();
    assert_eq!(removed.kind, NotificationType::Market);
    assert_eq!(store.notifications().len(), 1);
    assert_eq!(store.notifications()[0].id, "keep");
    assert_eq!(store.unread_count(), 1);
    assert!(store.delete_notification("dup").is_err());
}

#[test]
fn mark_all_as_read_is_idempotent() {
    let mut once = NotificationStore::new(seed::notifications(t0()));
    once.mark_all_as_read();
    let mut twice = NotificationStore::new(seed::notifications(t0()));
    twice.mark_all_as_read();
    twice.mark_all_as_read();

    assert_eq!(once.notifications(), twice.notifications());
    assert_eq!(once.unread_count(), twice.unread_count());
}

#[test]
fn groups_partition_the_list() {
    let mut store = NotificationStore::new(seed::notifications(t0()));
    store.add_notification(note("extra-1", NotificationType::Security, false));
    store.add_notification(note("extra-2", NotificationType::Signal, true));

    let groups = store.grouped_notifications();
    let mut seen = HashSet::new();
    let mut total = 0;
    for g in &groups {
        assert_eq!(g.count, g.notifications.len());
        for n in &g.notifications {
            assert_eq!(n.kind, g.kind);
            assert!(seen.insert(n.id.clone()), "{} appears twice", n.id);
        }
        total += g.count;
    }
    assert_eq!(total, store.notifications().len());
    let all: HashSet<String> = store.notifications().iter().map(|n| n.id.clone()).collect();
    assert_eq!(seen, all);
}

#[test]
fn groups_follow_fixed_order_and_skip_empty_types() {
    let store = NotificationStore::new(vec![
        note("a", NotificationType::System, false),
        note("b", NotificationType::Signal, false),
        note("c", NotificationType::System, true),
    ]);
    let groups = store.grouped_notifications();
    let kinds: Vec<NotificationType> = groups.iter().map(|g| g.kind).collect();
    assert_eq!(kinds, vec![NotificationType::Signal, NotificationType::System]);
    assert_eq!(groups[0].title, "Trading Signals");
    assert_eq!(groups[1].count, 2);

    assert!(NotificationStore::new(Vec::new()).grouped_notifications().is_empty());
}

#[test]
fn grouping_is_pure() {
    let store = NotificationStore::new(seed::notifications(t0()));
    assert_eq!(store.grouped_notifications(), store.grouped_notifications());
}

#[test]
fn clear_all_empties_the_store() {
    let mut store = NotificationStore::new(seed::notifications(t0()));
    let rx = store.subscribe();
    assert_eq!(store.clear_all(), 7);
    assert!(store.notifications().is_empty());
    assert_eq!(store.unread_count(), 0);
    assert_eq!(
        rx.try_recv().unwrap(),
        StoreEvent::NotificationsChanged { total: 0, unread: 0 }
    );
}

#[test]
fn subscribers_see_each_change() {
    let mut store = NotificationStore::new(seed::notifications(t0()));
    let rx = store.subscribe();
    store.mark_as_read("ntf-1").unwrap();
    store.mark_all_as_read();
    let events: Vec<StoreEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            StoreEvent::NotificationsChanged { total: 7, unread: 3 },
            StoreEvent::NotificationsChanged { total: 7, unread: 0 },
        ]
    );
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
fn list_filters_by_type_and_unread() {
    let app = app();
    let matches = cli::build_cli().get_matches_from([
        "fxdesk",
        "notifications",
        "list",
        "--type",
        " Signal ",
        "--unread",
    ]);
    let Some(("notifications", nm)) = matches.subcommand() else {
        panic!("notifications command not parsed");
    };
    let Some(("list", lm)) = nm.subcommand() else {
        panic!("list not parsed");
    };
    let rows = notifications::query_rows(&app, lm).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "ntf-1");
    assert!(!rows[0].read);
}

#[test]
fn list_rejects_unknown_type() {
    let app = app();
    let matches =
        cli::build_cli().get_matches_from(["fxdesk", "notifications", "list", "--type", "weather"]);
    let (_, nm) = matches.subcommand().unwrap();
    let (_, lm) = nm.subcommand().unwrap();
    assert!(notifications::query_rows(&app, lm).is_err());
}

#[test]
fn read_command_marks_one_notification() {
    let mut app = app();
    let matches =
        cli::build_cli().get_matches_from(["fxdesk", "notifications", "read", "--id", "ntf-2"]);
    let (_, nm) = matches.subcommand().unwrap();
    notifications::handle(&mut app, nm).unwrap();
    assert_eq!(app.notifications.unread_count(), 3);

    let matches =
        cli::build_cli().get_matches_from(["fxdesk", "notifications", "read", "--id", "ntf-404"]);
    let (_, nm) = matches.subcommand().unwrap();
    let err = notifications::handle(&mut app, nm).unwrap_err();
    assert!(err.to_string().contains("not found"));
}
