// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calculators;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod cost;
pub mod fees;
pub mod models;
pub mod pairs;
pub mod rates;
pub mod utils;
