// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Job HTTP handlers.

use axum::{
	body::Bytes,
	extract::{rejection::PathRejection, Path, State},
	http::StatusCode,
	Json,
};
use jobs_core::{Job, JobId};
use tracing::{debug, info, instrument, Span};

use crate::api::AppState;
use crate::error::ApiError;

/// Path ids that fail to decode (e.g. invalid UTF-8) get the JSON error body
/// like every other bad request.
fn require_id(path: Result<Path<String>, PathRejection>) -> Result<JobId, ApiError> {
	let Path(id) = path.map_err(|rejection| {
		debug!(error = %rejection, "rejecting undecodable job id");
		ApiError::BadRequest(rejection.body_text())
	})?;
	if id.is_empty() {
		return Err(ApiError::no_id_given());
	}
	Span::current().record("job_id", id.as_str());
	Ok(JobId(id))
}

/// Bodies are decoded by hand so any content type is accepted and every
/// failure produces the same error body. Only the first JSON value is read;
/// anything after it is ignored.
fn decode_job(body: &[u8]) -> Result<Job, ApiError> {
	match serde_json::Deserializer::from_slice(body)
		.into_iter::<Job>()
		.next()
	{
		Some(Ok(job)) => Ok(job),
		Some(Err(e)) => {
			debug!(error = %e, "rejecting undecodable job body");
			Err(ApiError::invalid_body())
		}
		None => {
			debug!("rejecting empty job body");
			Err(ApiError::invalid_body())
		}
	}
}

/// GET /{id} - Fetch a single job.
#[instrument(skip_all, fields(job_id))]
pub async fn get_job(
	State(state): State<AppState>,
	path: Result<Path<String>, PathRejection>,
) -> Result<Json<Job>, ApiError> {
	let id = require_id(path)?;
	let job = state.jobs.get(&id).await?;
	Ok(Json(job))
}

/// GET / - List all jobs in insertion order.
#[instrument(skip(state))]
pub async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, ApiError> {
	let jobs = state.jobs.get_all().await?;
	Ok(Json(jobs))
}

/// POST / - Store a new job. The response body is empty.
#[instrument(skip(state, body))]
pub async fn create_job(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<StatusCode, ApiError> {
	let job = decode_job(&body)?;
	let job = state
		.jobs
		.create(job)
		.await
		.map_err(|e| ApiError::BadRequest(e.to_string()))?;

	info!(job_id = %job.id, "Job created");
	Ok(StatusCode::OK)
}

/// PUT /{id} - Replace the payload of an existing job.
#[instrument(skip_all, fields(job_id))]
pub async fn update_job(
	State(state): State<AppState>,
	path: Result<Path<String>, PathRejection>,
	body: Bytes,
) -> Result<StatusCode, ApiError> {
	let id = require_id(path)?;
	let job = decode_job(&body)?;
	state.jobs.update(&id, job).await?;

	info!(job_id = %id, "Job updated");
	Ok(StatusCode::OK)
}

/// DELETE /{id} - Remove a job.
#[instrument(skip_all, fields(job_id))]
pub async fn delete_job(
	State(state): State<AppState>,
	path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
	let id = require_id(path)?;
	state.jobs.delete(&id).await?;

	info!(job_id = %id, "Job deleted");
	Ok(StatusCode::OK)
}
