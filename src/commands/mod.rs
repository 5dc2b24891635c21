// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod brokers;
pub mod costs;
pub mod margin;
pub mod pip;
pub mod position;
pub mod rates;
