// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank tip server.
//!
//! Answers `POST /` tip requests with the pre-flop percentile strength of the
//! hero hand, and `GET /` with the service metadata.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod error;
pub mod metadata;
pub mod server;
pub use server::{Config, run};
pub mod tip;
