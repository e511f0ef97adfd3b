// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod agg;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod income;
pub mod models;
pub mod plan;
pub mod store;
pub mod utils;
