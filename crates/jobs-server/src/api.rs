// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use jobs_core::JobRepository;

use crate::routes;
use crate::service::JobService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
	pub jobs: JobService,
}

/// Wire a storage backend into the service layer.
pub fn create_app_state(repo: Arc<dyn JobRepository>) -> AppState {
	AppState {
		jobs: JobService::new(repo),
	}
}

/// Build the job routes.
///
/// - `POST /` create
/// - `GET /` list
/// - `GET /{id}` fetch
/// - `PUT /{id}` replace
/// - `DELETE /{id}` remove
///
/// Job bodies are unbounded in size, so axum's default body limit is lifted.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route(
			"/",
			get(routes::jobs::list_jobs).post(routes::jobs::create_job),
		)
		.route(
			"/{id}",
			get(routes::jobs::get_job)
				.put(routes::jobs::update_job)
				.delete(routes::jobs::delete_job),
		)
		.layer(DefaultBodyLimit::disable())
		.with_state(state)
}
