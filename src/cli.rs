// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print JSON").action(ArgAction::SetTrue))
        .arg(arg!(--jsonl "Print JSON lines").action(ArgAction::SetTrue))
}

fn bool_opt(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .value_name("BOOL")
        .value_parser(value_parser!(bool))
        .help(help)
}

pub fn build_cli() -> Command {
    Command::new("fxdesk")
        .about("Forex signal desk: signals, notifications, wallet and account screens")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("FXDESK_DB")
                .value_name("PATH")
                .help("SQLite file holding persisted preferences"),
        )
        .arg(
            Arg::new("latency_ms")
                .long("latency-ms")
                .global(true)
                .env("FXDESK_LATENCY_MS")
                .value_name("MS")
                .help("Simulated backend round trip for plan changes"),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .global(true)
                .value_name("FILTER")
                .help("tracing filter, e.g. debug or fxdesk=trace (overrides RUST_LOG)"),
        )
        .subcommand(
            Command::new("signals")
                .about("Bot signals and performance")
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(arg!(--status <STATUS> "active|completed|cancelled|expired")),
                ))
                .subcommand(json_flags(Command::new("performance")))
                .subcommand(json_flags(Command::new("summary")))
                .subcommand(
                    Command::new("close")
                        .arg(arg!(--id <ID>).required(true))
                        .arg(arg!(--status <STATUS> "completed|cancelled|expired").required(true)),
                )
                .subcommand(
                    Command::new("export")
                        .arg(arg!(--format <FMT> "csv|json").default_value("csv"))
                        .arg(arg!(--out <DIR>).required(true)),
                )
                .subcommand(Command::new("copy").arg(arg!(--id <ID>).required(true))),
        )
        .subcommand(
            Command::new("notifications")
                .about("Notification center")
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .help("signal|trade|market|news|security|system"),
                        )
                        .arg(arg!(--unread "Only unread").action(ArgAction::SetTrue)),
                ))
                .subcommand(json_flags(Command::new("groups")))
                .subcommand(Command::new("read").arg(arg!(--id <ID>).required(true)))
                .subcommand(Command::new("read-all"))
                .subcommand(Command::new("rm").arg(arg!(--id <ID>).required(true)))
                .subcommand(Command::new("clear")),
        )
        .subcommand(
            Command::new("settings")
                .about("Profile, security and preferences")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("profile")
                        .arg(arg!(--name <NAME>))
                        .arg(arg!(--email <EMAIL>))
                        .arg(arg!(--phone <PHONE>))
                        .arg(arg!(--country <COUNTRY>)),
                )
                .subcommand(
                    Command::new("security")
                        .arg(bool_opt("biometric", "biometric", "Biometric unlock"))
                        .arg(bool_opt("login_alerts", "login-alerts", "Alert on new logins"))
                        .arg(
                            Arg::new("session_timeout")
                                .long("session-timeout")
                                .value_name("MINUTES")
                                .value_parser(value_parser!(u32)),
                        ),
                )
                .subcommand(
                    Command::new("prefs")
                        .arg(arg!(--language <LANG>))
                        .arg(arg!(--currency <CCY>))
                        .arg(arg!(--timezone <TZ>))
                        .arg(bool_opt("push", "push", "Push notifications"))
                        .arg(bool_opt("email_alerts", "email-alerts", "Email notifications"))
                        .arg(bool_opt("signal_alerts", "signal-alerts", "Signal notifications"))
                        .arg(bool_opt("news_alerts", "news-alerts", "News notifications"))
                        .arg(Arg::new("lot_size").long("lot-size").value_name("LOTS"))
                        .arg(Arg::new("risk_level").long("risk-level").value_name("LEVEL"))
                        .arg(bool_opt("confirm_orders", "confirm-orders", "Confirm before orders")),
                )
                .subcommand(Command::new("2fa").about("Toggle two-factor authentication"))
                .subcommand(json_flags(Command::new("devices")))
                .subcommand(Command::new("device-rm").arg(arg!(--id <ID>).required(true)))
                .subcommand(json_flags(Command::new("tickets")))
                .subcommand(
                    Command::new("ticket")
                        .arg(arg!(--subject <SUBJECT>).required(true))
                        .arg(arg!(--description <TEXT>).required(true))
                        .arg(arg!(--category <CATEGORY>).default_value("general"))
                        .arg(arg!(--priority <PRIORITY> "low|medium|high").default_value("medium")),
                ),
        )
        .subcommand(
            Command::new("plans")
                .about("Subscription plans")
                .subcommand(json_flags(Command::new("list")))
                .subcommand(json_flags(Command::new("current")))
                .subcommand(Command::new("select").arg(arg!(--id <PLAN>).required(true)))
                .subcommand(Command::new("cancel"))
                .subcommand(Command::new("reactivate")),
        )
        .subcommand(
            Command::new("wallet")
                .about("Wallet balances and transactions")
                .subcommand(json_flags(Command::new("assets")))
                .subcommand(json_flags(
                    Command::new("tx").arg(arg!(--status <STATUS> "pending|completed|failed|cancelled")),
                ))
                .subcommand(json_flags(Command::new("ledger")))
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--kind <KIND> "deposit|withdrawal|transfer|trade").required(true))
                        .arg(arg!(--asset <ASSET>).required(true))
                        .arg(arg!(--amount <AMOUNT>).required(true))
                        .arg(arg!(--value <USD> "USD value").required(true))
                        .arg(arg!(--note <NOTE>)),
                )
                .subcommand(
                    Command::new("settle")
                        .arg(arg!(--id <ID>).required(true))
                        .arg(arg!(--status <STATUS> "completed|failed|cancelled").required(true)),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about("Light/dark theme")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(Command::new("set").arg(arg!(<MODE> "light|dark")))
                .subcommand(Command::new("toggle"))
                .subcommand(Command::new("system").arg(arg!(<MODE> "current OS mode: light|dark"))),
        )
}
