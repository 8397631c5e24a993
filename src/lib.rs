// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cache;
pub mod cli;
pub mod models;
pub mod samples;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;
