// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! API error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use jobs_core::JobsError;
use serde::{Deserialize, Serialize};

pub const NO_ID_GIVEN: &str = "no id given";
pub const INVALID_REQUEST_BODY: &str = "invalid request body";

/// Errors surfaced to HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	/// Missing path id or undecodable body.
	#[error("{0}")]
	BadRequest(String),

	/// No job with the requested id.
	#[error("{0}")]
	NotFound(String),

	/// Unexpected backend failure.
	#[error("{0}")]
	Internal(String),
}

impl ApiError {
	pub fn no_id_given() -> Self {
		ApiError::BadRequest(NO_ID_GIVEN.to_string())
	}

	pub fn invalid_body() -> Self {
		ApiError::BadRequest(INVALID_REQUEST_BODY.to_string())
	}

	pub fn status(&self) -> StatusCode {
		match self {
			ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ApiError::NotFound(_) => StatusCode::NOT_FOUND,
			ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<JobsError> for ApiError {
	fn from(e: JobsError) -> Self {
		match e {
			JobsError::NotFound(_) => ApiError::NotFound(e.to_string()),
			JobsError::Internal(_) => ApiError::Internal(e.to_string()),
		}
	}
}

/// Error response body: `{"error": "<message>"}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
	pub error: String,
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			tracing::error!(error = %self, "internal error");
		}
		(
			status,
			Json(ErrorResponse {
				error: self.to_string(),
			}),
		)
			.into_response()
	}
}
