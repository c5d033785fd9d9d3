// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for job storage.

use thiserror::Error;

use crate::job::JobId;

/// Result type for job storage operations.
pub type Result<T> = std::result::Result<T, JobsError>;

/// Errors that can occur in job storage operations.
#[derive(Debug, Error)]
pub enum JobsError {
	#[error("job not found: {0}")]
	NotFound(JobId),

	#[error("internal error: {0}")]
	Internal(String),
}

impl JobsError {
	pub fn is_not_found(&self) -> bool {
		matches!(self, JobsError::NotFound(_))
	}
}
