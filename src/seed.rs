// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed datasets the stores start from. Timestamps are relative to the
//! clock's "now" so the screens always read as recent activity.

use crate::models::*;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

fn d(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn signals(now: DateTime<Utc>) -> Vec<TradingSignal> {
    vec![
        TradingSignal {
            id: "sig-1001".into(),
            symbol: "EUR/USD".into(),
            action: SignalAction::Buy,
            confidence: 87,
            entry_price: d(10845, 4),
            target_price: d(10920, 4),
            stop_loss: d(10800, 4),
            status: SignalStatus::Active,
            created_at: now - Duration::minutes(25),
            expires_at: Some(now + Duration::hours(4)),
            profit_loss: None,
            profit_loss_percent: None,
            strategy: "Trend Following".into(),
            timeframe: "H1".into(),
            description: "Bullish breakout above the 1.0840 resistance with rising volume.".into(),
            tags: tags(&["breakout", "trend"]),
        },
        TradingSignal {
            id: "sig-1002".into(),
            symbol: "GBP/JPY".into(),
            action: SignalAction::Sell,
            confidence: 74,
            entry_price: d(189450, 3),
            target_price: d(188200, 3),
            stop_loss: d(190100, 3),
            status: SignalStatus::Active,
            created_at: now - Duration::hours(2),
            expires_at: Some(now + Duration::hours(6)),
            profit_loss: None,
            profit_loss_percent: None,
            strategy: "Mean Reversion".into(),
            timeframe: "H4".into(),
            description: "Overbought RSI divergence at the weekly high.".into(),
            tags: tags(&["reversal", "rsi"]),
        },
        TradingSignal {
            id: "sig-0998".into(),
            symbol: "XAU/USD".into(),
            action: SignalAction::Buy,
            confidence: 91,
            entry_price: d(234050, 2),
            target_price: d(237500, 2),
            stop_loss: d(232000, 2),
            status: SignalStatus::Completed,
            created_at: now - Duration::days(1),
            expires_at: None,
            profit_loss: Some(d(34500, 2)),
            profit_loss_percent: Some(d(147, 2)),
            strategy: "Momentum".into(),
            timeframe: "H1".into(),
            description: "Safe-haven bid after soft CPI print.".into(),
            tags: tags(&["gold", "momentum"]),
        },
        TradingSignal {
            id: "sig-0995".into(),
            symbol: "USD/JPY".into(),
            action: SignalAction::Sell,
            confidence: 68,
            entry_price: d(151200, 3),
            target_price: d(150400, 3),
            stop_loss: d(151700, 3),
            status: SignalStatus::Completed,
            created_at: now - Duration::days(2),
            expires_at: None,
            profit_loss: Some(d(-5000, 2)),
            profit_loss_percent: Some(d(-33, 2)),
            strategy: "Mean Reversion".into(),
            timeframe: "M30".into(),
            description: "Fade of the Tokyo session spike.".into(),
            tags: tags(&["intraday"]),
        },
        TradingSignal {
            id: "sig-0990".into(),
            symbol: "AUD/USD".into(),
            action: SignalAction::Hold,
            confidence: 55,
            entry_price: d(6580, 4),
            target_price: d(6640, 4),
            stop_loss: d(6540, 4),
            status: SignalStatus::Expired,
            created_at: now - Duration::days(3),
            expires_at: Some(now - Duration::days(2)),
            profit_loss: None,
            profit_loss_percent: None,
            strategy: "Range".into(),
            timeframe: "D1".into(),
            description: "Consolidation ahead of RBA minutes.".into(),
            tags: tags(&["range"]),
        },
    ]
}

pub fn performance(now: DateTime<Utc>) -> BotPerformance {
    BotPerformance {
        total_signals: 248,
        winning_trades: 176,
        losing_trades: 72,
        win_rate: d(7097, 2),
        total_profit: d(1284550, 2),
        average_profit: d(5180, 2),
        profit_factor: d(231, 2),
        max_drawdown: d(845, 2),
        sharpe_ratio: d(187, 2),
        best_trade: TradeRef {
            symbol: "XAU/USD".into(),
            profit: d(124000, 2),
            date: (now - Duration::days(12)).date_naive(),
        },
        worst_trade: TradeRef {
            symbol: "GBP/JPY".into(),
            profit: d(-41500, 2),
            date: (now - Duration::days(33)).date_naive(),
        },
        monthly_returns: vec![
            MonthlyReturn { month: "2025-01".into(), return_pct: d(82, 1) },
            MonthlyReturn { month: "2025-02".into(), return_pct: d(54, 1) },
            MonthlyReturn { month: "2025-03".into(), return_pct: d(-21, 1) },
            MonthlyReturn { month: "2025-04".into(), return_pct: d(117, 1) },
            MonthlyReturn { month: "2025-05".into(), return_pct: d(63, 1) },
            MonthlyReturn { month: "2025-06".into(), return_pct: d(95, 1) },
        ],
        top_assets: vec![
            AssetPerformance {
                symbol: "EUR/USD".into(),
                trades: 64,
                win_rate: d(7500, 2),
                profit: d(412000, 2),
            },
            AssetPerformance {
                symbol: "XAU/USD".into(),
                trades: 41,
                win_rate: d(7317, 2),
                profit: d(388075, 2),
            },
            AssetPerformance {
                symbol: "GBP/JPY".into(),
                trades: 37,
                win_rate: d(6216, 2),
                profit: d(190540, 2),
            },
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn notification(
    id: &str,
    kind: NotificationType,
    priority: NotificationPriority,
    title: &str,
    message: &str,
    is_read: bool,
    timestamp: DateTime<Utc>,
    metadata: Option<NotificationMetadata>,
) -> Notification {
    Notification {
        id: id.into(),
        title: title.into(),
        message: message.into(),
        kind,
        priority,
        is_read,
        timestamp,
        metadata,
    }
}

pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    use NotificationPriority as P;
    use NotificationType as T;
    vec![
        notification(
            "ntf-1",
            T::Signal,
            P::High,
            "New BUY signal: EUR/USD",
            "Entry 1.0845, target 1.0920, confidence 87%.",
            false,
            now - Duration::minutes(25),
            Some(NotificationMetadata {
                symbol: Some("EUR/USD".into()),
                price: Some(d(10845, 4)),
                signal_id: Some("sig-1001".into()),
                ..Default::default()
            }),
        ),
        notification(
            "ntf-2",
            T::Trade,
            P::Medium,
            "Take profit hit",
            "XAU/USD closed at target for +$345.00.",
            false,
            now - Duration::hours(1),
            Some(NotificationMetadata {
                symbol: Some("XAU/USD".into()),
                change: Some(d(147, 2)),
                signal_id: Some("sig-0998".into()),
                ..Default::default()
            }),
        ),
        notification(
            "ntf-3",
            T::Market,
            P::Medium,
            "High volatility expected",
            "US Non-Farm Payrolls release in 30 minutes.",
            false,
            now - Duration::hours(3),
            None,
        ),
        notification(
            "ntf-4",
            T::Security,
            P::Urgent,
            "New login detected",
            "A login from a new device in Berlin, DE was detected.",
            false,
            now - Duration::hours(5),
            Some(NotificationMetadata {
                action_url: Some("fxdesk://settings/devices".into()),
                ..Default::default()
            }),
        ),
        notification(
            "ntf-5",
            T::News,
            P::Low,
            "ECB holds rates",
            "The ECB kept the deposit rate unchanged at 4.00%.",
            true,
            now - Duration::hours(9),
            None,
        ),
        notification(
            "ntf-6",
            T::Signal,
            P::Medium,
            "New SELL signal: GBP/JPY",
            "Entry 189.450, target 188.200, confidence 74%.",
            true,
            now - Duration::hours(2),
            Some(NotificationMetadata {
                symbol: Some("GBP/JPY".into()),
                price: Some(d(189450, 3)),
                signal_id: Some("sig-1002".into()),
                ..Default::default()
            }),
        ),
        notification(
            "ntf-7",
            T::System,
            P::Low,
            "Scheduled maintenance",
            "Signal delivery pauses Sunday 02:00-02:30 UTC.",
            true,
            now - Duration::days(1),
            None,
        ),
    ]
}

pub fn profile(now: DateTime<Utc>) -> UserProfile {
    UserProfile {
        id: "usr-42".into(),
        name: "Alex Morgan".into(),
        email: "alex.morgan@example.com".into(),
        phone: Some("+44 20 7946 0958".into()),
        country: "United Kingdom".into(),
        avatar_url: None,
        member_since: (now - Duration::days(400)).date_naive(),
        verified: true,
    }
}

pub fn security(now: DateTime<Utc>) -> SecuritySettings {
    SecuritySettings {
        two_factor_enabled: false,
        biometric_enabled: true,
        login_alerts: true,
        session_timeout_minutes: 30,
        last_password_change: now - Duration::days(45),
    }
}

pub fn preferences() -> Preferences {
    Preferences {
        language: "en".into(),
        currency: "USD".into(),
        timezone: "Europe/London".into(),
        notifications: NotificationPreferences {
            push: true,
            email: true,
            sms: false,
            signals: true,
            trades: true,
            market: true,
            news: false,
        },
        trading: TradingPreferences {
            default_lot_size: d(10, 2),
            risk_level: RiskLevel::Medium,
            confirm_orders: true,
            show_profit_in_percent: false,
        },
    }
}

pub fn devices(now: DateTime<Utc>) -> Vec<Device> {
    vec![
        Device {
            id: "dev-1".into(),
            name: "iPhone 15 Pro".into(),
            kind: "mobile".into(),
            location: "London, UK".into(),
            last_active: now,
            is_current: true,
        },
        Device {
            id: "dev-2".into(),
            name: "MacBook Air".into(),
            kind: "desktop".into(),
            location: "London, UK".into(),
            last_active: now - Duration::days(2),
            is_current: false,
        },
        Device {
            id: "dev-3".into(),
            name: "Pixel 8".into(),
            kind: "mobile".into(),
            location: "Berlin, DE".into(),
            last_active: now - Duration::hours(5),
            is_current: false,
        },
    ]
}

pub fn tickets(now: DateTime<Utc>) -> Vec<SupportTicket> {
    vec![SupportTicket {
        id: "TKT-1001".into(),
        subject: "Delayed signal alerts".into(),
        description: "Push alerts arrive several minutes after the signal.".into(),
        category: "notifications".into(),
        priority: TicketPriority::Medium,
        status: TicketStatus::InProgress,
        created_at: now - Duration::days(6),
        updated_at: now - Duration::days(4),
    }]
}

pub static PLANS: Lazy<Vec<SubscriptionPlan>> = Lazy::new(|| {
    let features = |list: &[&str]| tags(list);
    vec![
        SubscriptionPlan {
            id: "basic".into(),
            name: "Basic".into(),
            price: d(999, 2),
            currency: "USD".into(),
            interval: BillingInterval::Monthly,
            features: features(&["5 signals per day", "Email alerts"]),
            is_popular: false,
        },
        SubscriptionPlan {
            id: "pro".into(),
            name: "Pro".into(),
            price: d(2999, 2),
            currency: "USD".into(),
            interval: BillingInterval::Monthly,
            features: features(&[
                "Unlimited signals",
                "Push alerts",
                "Bot performance analytics",
            ]),
            is_popular: true,
        },
        SubscriptionPlan {
            id: "elite".into(),
            name: "Elite".into(),
            price: d(29900, 2),
            currency: "USD".into(),
            interval: BillingInterval::Yearly,
            features: features(&[
                "Everything in Pro",
                "Copy trading",
                "Priority support",
            ]),
            is_popular: false,
        },
    ]
});

pub fn subscription(now: DateTime<Utc>) -> Option<Subscription> {
    Some(Subscription {
        id: "sub-7".into(),
        plan_id: "basic".into(),
        status: SubscriptionStatus::Active,
        start_date: now - Duration::days(10),
        end_date: now + Duration::days(20),
        auto_renew: true,
        next_billing_date: now + Duration::days(20),
    })
}

pub fn wallet_assets() -> Vec<WalletAsset> {
    vec![
        WalletAsset {
            symbol: "USD".into(),
            name: "US Dollar".into(),
            balance: d(1250000, 2),
            value: d(1250000, 2),
            change_24h: Decimal::ZERO,
        },
        WalletAsset {
            symbol: "EUR".into(),
            name: "Euro".into(),
            balance: d(420000, 2),
            value: d(455490, 2),
            change_24h: d(32, 2),
        },
        WalletAsset {
            symbol: "GBP".into(),
            name: "British Pound".into(),
            balance: d(180000, 2),
            value: d(228600, 2),
            change_24h: d(-15, 2),
        },
        WalletAsset {
            symbol: "BTC".into(),
            name: "Bitcoin".into(),
            balance: d(2500, 4),
            value: d(1612500, 2),
            change_24h: d(214, 2),
        },
    ]
}

pub fn transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        Transaction {
            id: "tx-5005".into(),
            kind: TransactionKind::Withdrawal,
            asset: "USD".into(),
            amount: d(50000, 2),
            value: d(50000, 2),
            status: TransactionStatus::Pending,
            timestamp: now - Duration::hours(1),
            reference: Some("WD-88213".into()),
            note: None,
        },
        Transaction {
            id: "tx-5004".into(),
            kind: TransactionKind::Trade,
            asset: "EUR".into(),
            amount: d(100000, 2),
            value: d(108450, 2),
            status: TransactionStatus::Completed,
            timestamp: now - Duration::days(1),
            reference: None,
            note: Some("EUR/USD buy".into()),
        },
        Transaction {
            id: "tx-5003".into(),
            kind: TransactionKind::Deposit,
            asset: "USD".into(),
            amount: d(500000, 2),
            value: d(500000, 2),
            status: TransactionStatus::Completed,
            timestamp: now - Duration::days(3),
            reference: Some("DP-11902".into()),
            note: None,
        },
        Transaction {
            id: "tx-5002".into(),
            kind: TransactionKind::Deposit,
            asset: "BTC".into(),
            amount: d(500, 4),
            value: d(322500, 2),
            status: TransactionStatus::Failed,
            timestamp: now - Duration::days(5),
            reference: None,
            note: Some("Network fee too low".into()),
        },
        Transaction {
            id: "tx-5001".into(),
            kind: TransactionKind::Transfer,
            asset: "GBP".into(),
            amount: d(20000, 2),
            value: d(25400, 2),
            status: TransactionStatus::Completed,
            timestamp: now - Duration::days(8),
            reference: None,
            note: None,
        },
    ]
}
