// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod form;
pub mod guard;
pub mod http;
pub mod models;
pub mod navigation;
pub mod session;
pub mod storage;
pub mod utils;
