// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use fxdesk::clock::{Clock, ManualClock};
use fxdesk::error::StoreError;
use fxdesk::events::StoreEvent;
use fxdesk::models::SubscriptionStatus;
use fxdesk::seed;
use fxdesk::stores::SubscriptionStore;
use fxdesk::stores::subscription::{
    BILLING_PERIOD_DAYS, PlanChange, cancel_subscription, reactivate_subscription, select_plan,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
}

fn store(clock: Arc<ManualClock>) -> SubscriptionStore {
    SubscriptionStore::new(seed::PLANS.clone(), seed::subscription(t0()), clock)
}

#[test]
fn second_change_while_loading_conflicts() {
    let mut s = store(Arc::new(ManualClock::new(t0())));
    let pending = s.begin(PlanChange::Select("pro".into())).unwrap();
    assert!(s.is_loading());

    let err = s.begin(PlanChange::Cancel).unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    s.complete(pending).unwrap();
    assert!(!s.is_loading());
    assert!(s.begin(PlanChange::Cancel).is_ok());
}

#[test]
fn select_plan_starts_a_new_period_from_now() {
    let clock = Arc::new(ManualClock::new(t0()));
    let mut s = store(clock.clone());
    let pending = s.begin(PlanChange::Select("elite".into())).unwrap();
    clock.advance(ChronoDuration::seconds(2));
    let now = t0() + ChronoDuration::seconds(2);

    let sub = s.complete(pending).unwrap().clone();
    assert_eq!(sub.plan_id, "elite");
    assert_eq!(sub.status, SubscriptionStatus::Active);
    assert_eq!(sub.id, format!("sub-{}", now.timestamp_millis()));
    assert_eq!(sub.start_date, now);
    assert_eq!(sub.end_date, now + ChronoDuration::days(BILLING_PERIOD_DAYS));
    assert_eq!(sub.next_billing_date, sub.end_date);
    assert!(sub.auto_renew);
    assert_eq!(s.current_plan().unwrap().name, "Elite");
}

#[test]
fn unknown_plan_and_missing_subscription_are_not_found() {
    let mut s = store(Arc::new(ManualClock::new(t0())));
    assert_eq!(
        s.begin(PlanChange::Select("platinum".into())).unwrap_err(),
        StoreError::not_found("plan", "platinum")
    );
    assert!(!s.is_loading());

    let mut empty = SubscriptionStore::new(
        seed::PLANS.clone(),
        None,
        Arc::new(ManualClock::new(t0())),
    );
    assert!(matches!(
        empty.begin(PlanChange::Cancel),
        Err(StoreError::NotFound { kind: "subscription", .. })
    ));
    assert!(empty.begin(PlanChange::Reactivate).is_err());
    assert!(empty.begin(PlanChange::Select("basic".into())).is_ok());
}

#[test]
fn abandoned_change_releases_the_guard() {
    let mut s = store(Arc::new(ManualClock::new(t0())));
    let rx = s.subscribe();
    let pending = s.begin(PlanChange::Cancel).unwrap();
    assert_eq!(pending.change(), &PlanChange::Cancel);
    s.abandon(pending);
    assert!(!s.is_loading());
    assert_eq!(s.subscription().unwrap().status, SubscriptionStatus::Active);
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![StoreEvent::SubscriptionPending]);
}

#[test]
fn cancel_then_reactivate_round_trip() {
    let clock = Arc::new(ManualClock::new(t0()));
    let shared = Mutex::new(store(clock.clone()));

    let sub = cancel_subscription(&shared, clock.as_ref(), Duration::from_millis(1500)).unwrap();
    assert_eq!(sub.status, SubscriptionStatus::Cancelled);
    assert!(!sub.auto_renew);
    assert_eq!(sub.id, "sub-7");
    // the simulated round trip advanced the manual clock
    assert_eq!(clock.now(), t0() + ChronoDuration::milliseconds(1500));

    let sub = reactivate_subscription(&shared, clock.as_ref(), Duration::ZERO).unwrap();
    assert_eq!(sub.status, SubscriptionStatus::Active);
    assert!(sub.auto_renew);
    assert!(!shared.lock().unwrap().is_loading());
}

#[test]
fn select_plan_helper_publishes_pending_then_changed() {
    let clock = Arc::new(ManualClock::new(t0()));
    let shared = Mutex::new(store(clock.clone()));
    let rx = shared.lock().unwrap().subscribe();

    let sub = select_plan(&shared, clock.as_ref(), Duration::from_millis(10), "pro").unwrap();
    assert_eq!(sub.plan_id, "pro");
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![
            StoreEvent::SubscriptionPending,
            StoreEvent::SubscriptionChanged {
                plan_id: "pro".into(),
                status: SubscriptionStatus::Active,
            },
        ]
    );
}

#[test]
fn overlapping_helpers_on_threads_never_both_apply() {
    let clock = Arc::new(ManualClock::new(t0()));
    let shared = Arc::new(Mutex::new(store(clock.clone())));
    let pending = shared
        .lock()
        .unwrap()
        .begin(PlanChange::Select("pro".into()))
        .unwrap();

    let handle = {
        let shared = shared.clone();
        let clock = clock.clone();
        std::thread::spawn(move || {
            select_plan(&shared, clock.as_ref(), Duration::ZERO, "elite")
        })
    };
    let err = handle.join().unwrap().unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    shared.lock().unwrap().complete(pending).unwrap();
    assert_eq!(shared.lock().unwrap().subscription().unwrap().plan_id, "pro");
}
