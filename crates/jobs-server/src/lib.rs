// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Jobs server.
//!
//! This crate provides an HTTP server exposing create, read, update and
//! delete operations over jobs held by a [`JobRepository`] backend.

pub mod api;
pub mod error;
pub mod routes;
pub mod service;

pub use api::{create_app_state, create_router, AppState};
pub use error::{ApiError, ErrorResponse};
pub use jobs_core::{InMemoryJobRepository, Job, JobId, JobRepository};
pub use jobs_server_config::ServerConfig;
pub use service::JobService;
