// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::ThemeMode;
use crate::utils::{maybe_print_json, parse_enum, pretty_table, required};
use anyhow::Result;
use serde_json::json;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => {
            let pref = app.theme.preference();
            let theme = app.theme.theme();
            let v = json!({ "preference": pref, "theme": theme });
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &v)? {
                let rows = vec![
                    vec!["Mode".into(), pref.theme.to_string()],
                    vec!["Follows system".into(), pref.is_system_theme.to_string()],
                    vec!["Background".into(), theme.background.to_string()],
                    vec!["Surface".into(), theme.surface.to_string()],
                    vec!["Text".into(), theme.text.to_string()],
                    vec!["Primary".into(), theme.primary.to_string()],
                    vec!["Profit".into(), theme.profit.to_string()],
                    vec!["Loss".into(), theme.loss.to_string()],
                ];
                println!("{}", pretty_table(&["Theme", "Value"], rows));
            }
        }
        Some(("set", sub)) => {
            let mode = parse_enum::<ThemeMode>(&required(sub, "MODE")?)?;
            app.theme.set_mode(mode)?;
            println!("Theme set to {}", mode);
        }
        Some(("toggle", _)) => {
            let mode = app.theme.toggle()?;
            println!("Theme set to {}", mode);
        }
        Some(("system", sub)) => {
            let mode = parse_enum::<ThemeMode>(&required(sub, "MODE")?)?;
            app.theme.use_system_theme(mode)?;
            println!("Theme follows the system ({})", mode);
        }
        _ => {}
    }
    Ok(())
}
