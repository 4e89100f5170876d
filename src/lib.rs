// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod app;
pub mod cli;
pub mod clock;
pub mod collab;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod models;
pub mod seed;
pub mod stores;
pub mod utils;
