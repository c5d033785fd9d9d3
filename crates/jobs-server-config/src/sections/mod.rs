// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod http;
mod logging;

pub use http::{HttpConfig, HttpConfigLayer, DEFAULT_HOST, DEFAULT_PORT};
pub use logging::{LoggingConfig, LoggingConfigLayer};
