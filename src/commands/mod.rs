// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod notifications;
pub mod plans;
pub mod settings;
pub mod signals;
pub mod theme;
pub mod wallet;
