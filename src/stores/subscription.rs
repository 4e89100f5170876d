// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::clock::{Clock, Latency};
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::models::{Subscription, SubscriptionPlan, SubscriptionStatus};
use chrono::Duration;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

pub const BILLING_PERIOD_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanChange {
    Select(String),
    Cancel,
    Reactivate,
}

/// Handle for the one change allowed in flight at a time.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingChange {
    token: u64,
    change: PlanChange,
}

impl PendingChange {
    pub fn change(&self) -> &PlanChange {
        &self.change
    }
}

/// Plan catalog plus the user's single subscription.
///
/// Changes run in two steps: `begin` validates and claims the in-flight slot,
/// `complete` applies the change once the simulated request has returned.
/// A second `begin` while a change is pending fails with `Conflict`.
pub struct SubscriptionStore {
    plans: Vec<SubscriptionPlan>,
    current: Option<Subscription>,
    in_flight: Option<u64>,
    next_token: u64,
    clock: Arc<dyn Clock>,
    events: EventBus,
}

impl SubscriptionStore {
    pub fn new(
        plans: Vec<SubscriptionPlan>,
        current: Option<Subscription>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            plans,
            current,
            in_flight: None,
            next_token: 1,
            clock,
            events: EventBus::default(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn plans(&self) -> &[SubscriptionPlan] {
        &self.plans
    }

    pub fn plan(&self, id: &str) -> Option<&SubscriptionPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.current.as_ref()
    }

    pub fn current_plan(&self) -> Option<&SubscriptionPlan> {
        self.current.as_ref().and_then(|s| self.plan(&s.plan_id))
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn begin(&mut self, change: PlanChange) -> Result<PendingChange, StoreError> {
        if self.in_flight.is_some() {
            warn!(?change, "subscription change already in flight");
            return Err(StoreError::Conflict(
                "a subscription change is already in progress".into(),
            ));
        }
        match &change {
            PlanChange::Select(plan_id) => {
                if self.plan(plan_id).is_none() {
                    return Err(StoreError::not_found("plan", plan_id.as_str()));
                }
            }
            PlanChange::Cancel | PlanChange::Reactivate => {
                if self.current.is_none() {
                    return Err(StoreError::not_found("subscription", "current"));
                }
            }
        }
        let token = self.next_token;
        self.next_token += 1;
        self.in_flight = Some(token);
        debug!(token, ?change, "subscription change started");
        self.events.publish(StoreEvent::SubscriptionPending);
        Ok(PendingChange { token, change })
    }

    pub fn complete(&mut self, pending: PendingChange) -> Result<&Subscription, StoreError> {
        if self.in_flight != Some(pending.token) {
            return Err(StoreError::Conflict(format!(
                "change #{} is no longer in flight",
                pending.token
            )));
        }
        self.in_flight = None;

        let now = self.clock.now();
        let sub = match pending.change {
            PlanChange::Select(plan_id) => {
                let period_end = now + Duration::days(BILLING_PERIOD_DAYS);
                self.current.insert(Subscription {
                    id: format!("sub-{}", now.timestamp_millis()),
                    plan_id,
                    status: SubscriptionStatus::Active,
                    start_date: now,
                    end_date: period_end,
                    auto_renew: true,
                    next_billing_date: period_end,
                })
            }
            PlanChange::Cancel => {
                let sub = self
                    .current
                    .as_mut()
                    .ok_or_else(|| StoreError::not_found("subscription", "current"))?;
                sub.status = SubscriptionStatus::Cancelled;
                sub.auto_renew = false;
                sub
            }
            PlanChange::Reactivate => {
                let sub = self
                    .current
                    .as_mut()
                    .ok_or_else(|| StoreError::not_found("subscription", "current"))?;
                sub.status = SubscriptionStatus::Active;
                sub.auto_renew = true;
                sub
            }
        };
        info!(plan = %sub.plan_id, status = %sub.status, "subscription updated");
        let event = StoreEvent::SubscriptionChanged {
            plan_id: sub.plan_id.clone(),
            status: sub.status,
        };
        self.events.publish(event);
        self.current
            .as_ref()
            .ok_or_else(|| StoreError::not_found("subscription", "current"))
    }

    /// Drops a pending change without applying it.
    pub fn abandon(&mut self, pending: PendingChange) {
        if self.in_flight == Some(pending.token) {
            self.in_flight = None;
        }
    }
}

/// Runs one plan change end to end against a shared store: claim the slot,
/// release the lock for the simulated round trip, then apply.
pub fn run_change(
    store: &Mutex<SubscriptionStore>,
    latency: &dyn Latency,
    delay: std::time::Duration,
    change: PlanChange,
) -> Result<Subscription, StoreError> {
    let pending = lock(store).begin(change)?;
    latency.pause(delay);
    let mut guard = lock(store);
    let sub = guard.complete(pending)?.clone();
    Ok(sub)
}

pub fn select_plan(
    store: &Mutex<SubscriptionStore>,
    latency: &dyn Latency,
    delay: std::time::Duration,
    plan_id: &str,
) -> Result<Subscription, StoreError> {
    run_change(store, latency, delay, PlanChange::Select(plan_id.to_string()))
}

pub fn cancel_subscription(
    store: &Mutex<SubscriptionStore>,
    latency: &dyn Latency,
    delay: std::time::Duration,
) -> Result<Subscription, StoreError> {
    run_change(store, latency, delay, PlanChange::Cancel)
}

pub fn reactivate_subscription(
    store: &Mutex<SubscriptionStore>,
    latency: &dyn Latency,
    delay: std::time::Duration,
) -> Result<Subscription, StoreError> {
    run_change(store, latency, delay, PlanChange::Reactivate)
}

fn lock(store: &Mutex<SubscriptionStore>) -> std::sync::MutexGuard<'_, SubscriptionStore> {
    store.lock().unwrap_or_else(|p| p.into_inner())
}
