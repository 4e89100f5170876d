// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase string enums shared by the models, the CLI and serde.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!(
                        "unknown {} '{}' (expected one of: {})",
                        stringify!($name),
                        other,
                        [$($text),+].join(", ")
                    )),
                }
            }
        }
    };
}

string_enum!(SignalAction {
    Buy => "buy",
    Sell => "sell",
    Hold => "hold",
});

string_enum!(SignalStatus {
    Active => "active",
    Completed => "completed",
    Cancelled => "cancelled",
    Expired => "expired",
});

impl SignalStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SignalStatus::Active)
    }
}

string_enum!(
    /// Fixed notification categories, in display order.
    NotificationType {
        Signal => "signal",
        Trade => "trade",
        Market => "market",
        News => "news",
        Security => "security",
        System => "system",
    }
);

string_enum!(NotificationPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

string_enum!(RiskLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
});

string_enum!(TicketPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
});

string_enum!(TicketStatus {
    Open => "open",
    InProgress => "in_progress",
    Resolved => "resolved",
    Closed => "closed",
});

string_enum!(SubscriptionStatus {
    Active => "active",
    Cancelled => "cancelled",
    Expired => "expired",
    Pending => "pending",
});

string_enum!(BillingInterval {
    Monthly => "monthly",
    Yearly => "yearly",
});

string_enum!(TransactionKind {
    Deposit => "deposit",
    Withdrawal => "withdrawal",
    Transfer => "transfer",
    Trade => "trade",
});

string_enum!(TransactionStatus {
    Pending => "pending",
    Completed => "completed",
    Failed => "failed",
    Cancelled => "cancelled",
});

string_enum!(ThemeMode {
    Light => "light",
    Dark => "dark",
});

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

// ---- bot signals ----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub id: String,
    pub symbol: String,
    pub action: SignalAction,
    pub confidence: u8, // 0..=100
    pub entry_price: Decimal,
    pub target_price: Decimal,
    pub stop_loss: Decimal,
    pub status: SignalStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub profit_loss: Option<Decimal>,
    pub profit_loss_percent: Option<Decimal>,
    pub strategy: String,
    pub timeframe: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRef {
    pub symbol: String,
    pub profit: Decimal,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturn {
    pub month: String, // YYYY-MM
    pub return_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPerformance {
    pub symbol: String,
    pub trades: u32,
    pub win_rate: Decimal,
    pub profit: Decimal,
}

/// Seeded performance summary of the bot. Tracked on its own, not derived
/// from the signal list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotPerformance {
    pub total_signals: u32,
    pub winning_trades: u32,
    pub losing_trades: u32,
    pub win_rate: Decimal,
    pub total_profit: Decimal,
    pub average_profit: Decimal,
    pub profit_factor: Decimal,
    pub max_drawdown: Decimal,
    pub sharpe_ratio: Decimal,
    pub best_trade: TradeRef,
    pub worst_trade: TradeRef,
    pub monthly_returns: Vec<MonthlyReturn>,
    pub top_assets: Vec<AssetPerformance>,
}

// ---- notifications --------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationMetadata {
    pub symbol: Option<String>,
    pub price: Option<Decimal>,
    pub change: Option<Decimal>,
    pub signal_id: Option<String>,
    pub action_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub priority: NotificationPriority,
    pub is_read: bool,
    pub timestamp: DateTime<Utc>,
    pub metadata: Option<NotificationMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationGroup {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: &'static str,
    pub icon: &'static str,
    pub notifications: Vec<Notification>,
    pub count: usize,
}

// ---- settings -------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub country: String,
    pub avatar_url: Option<String>,
    pub member_since: NaiveDate,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(v) = update.name {
            self.name = v;
        }
        if let Some(v) = update.email {
            self.email = v;
        }
        if let Some(v) = update.phone {
            self.phone = Some(v);
        }
        if let Some(v) = update.country {
            self.country = v;
        }
        if let Some(v) = update.avatar_url {
            self.avatar_url = Some(v);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub biometric_enabled: bool,
    pub login_alerts: bool,
    pub session_timeout_minutes: u32,
    pub last_password_change: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityUpdate {
    pub two_factor_enabled: Option<bool>,
    pub biometric_enabled: Option<bool>,
    pub login_alerts: Option<bool>,
    pub session_timeout_minutes: Option<u32>,
}

impl SecuritySettings {
    pub fn merge(&mut self, update: SecurityUpdate) {
        if let Some(v) = update.two_factor_enabled {
            self.two_factor_enabled = v;
        }
        if let Some(v) = update.biometric_enabled {
            self.biometric_enabled = v;
        }
        if let Some(v) = update.login_alerts {
            self.login_alerts = v;
        }
        if let Some(v) = update.session_timeout_minutes {
            self.session_timeout_minutes = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub push: bool,
    pub email: bool,
    pub sms: bool,
    pub signals: bool,
    pub trades: bool,
    pub market: bool,
    pub news: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationPreferencesUpdate {
    pub push: Option<bool>,
    pub email: Option<bool>,
    pub sms: Option<bool>,
    pub signals: Option<bool>,
    pub trades: Option<bool>,
    pub market: Option<bool>,
    pub news: Option<bool>,
}

impl NotificationPreferences {
    pub fn merge(&mut self, u: NotificationPreferencesUpdate) {
        let fields = [
            (&mut self.push, u.push),
            (&mut self.email, u.email),
            (&mut self.sms, u.sms),
            (&mut self.signals, u.signals),
            (&mut self.trades, u.trades),
            (&mut self.market, u.market),
            (&mut self.news, u.news),
        ];
        for (slot, value) in fields {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingPreferences {
    pub default_lot_size: Decimal,
    pub risk_level: RiskLevel,
    pub confirm_orders: bool,
    pub show_profit_in_percent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingPreferencesUpdate {
    pub default_lot_size: Option<Decimal>,
    pub risk_level: Option<RiskLevel>,
    pub confirm_orders: Option<bool>,
    pub show_profit_in_percent: Option<bool>,
}

impl TradingPreferences {
    pub fn merge(&mut self, u: TradingPreferencesUpdate) {
        if let Some(v) = u.default_lot_size {
            self.default_lot_size = v;
        }
        if let Some(v) = u.risk_level {
            self.risk_level = v;
        }
        if let Some(v) = u.confirm_orders {
            self.confirm_orders = v;
        }
        if let Some(v) = u.show_profit_in_percent {
            self.show_profit_in_percent = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: String,
    pub currency: String,
    pub timezone: String,
    pub notifications: NotificationPreferences,
    pub trading: TradingPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    pub language: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub notifications: Option<NotificationPreferencesUpdate>,
    pub trading: Option<TradingPreferencesUpdate>,
}

impl Preferences {
    /// Top-level fields overwrite; nested sections merge field by field.
    pub fn merge(&mut self, update: PreferencesUpdate) {
        if let Some(v) = update.language {
            self.language = v;
        }
        if let Some(v) = update.currency {
            self.currency = v;
        }
        if let Some(v) = update.timezone {
            self.timezone = v;
        }
        if let Some(n) = update.notifications {
            self.notifications.merge(n);
        }
        if let Some(t) = update.trading {
            self.trading.merge(t);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub location: String,
    pub last_active: DateTime<Utc>,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub category: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub subject: String,
    pub description: String,
    pub category: String,
    pub priority: TicketPriority,
}

// ---- subscription ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub currency: String,
    pub interval: BillingInterval,
    pub features: Vec<String>,
    pub is_popular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub plan_id: String,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub auto_renew: bool,
    pub next_billing_date: DateTime<Utc>,
}

// ---- wallet ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletAsset {
    pub symbol: String,
    pub name: String,
    pub balance: Decimal,
    pub value: Decimal, // USD snapshot
    pub change_24h: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub asset: String,
    pub amount: Decimal,
    pub value: Decimal,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
    pub reference: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub asset: String,
    pub amount: Decimal,
    pub value: Decimal,
    pub reference: Option<String>,
    pub note: Option<String>,
}

// ---- theme ----------------------------------------------------------------

/// Persisted theme choice. Field names are part of the stored JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: ThemeMode,
    #[serde(rename = "isSystemTheme")]
    pub is_system_theme: bool,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            is_system_theme: true,
        }
    }
}
