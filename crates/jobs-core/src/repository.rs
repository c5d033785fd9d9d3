// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Storage capability for jobs.

use async_trait::async_trait;

use crate::error::Result;
use crate::job::{Job, JobId};

/// Storage backend for jobs.
///
/// Implementations own the authoritative collection and hand out copies.
/// Every operation must be safe to call from concurrent request handlers.
#[async_trait]
pub trait JobRepository: Send + Sync {
	/// Fetch the job with the given ID, or `JobsError::NotFound`.
	async fn get(&self, id: &JobId) -> Result<Job>;

	/// All jobs in insertion order. Empty when nothing is stored.
	async fn get_all(&self) -> Result<Vec<Job>>;

	/// Store a new job. Any ID on the input is discarded and a fresh one is
	/// assigned; the stored job is returned.
	async fn create(&self, job: Job) -> Result<Job>;

	/// Replace the payload of an existing job in place. The stored job keeps
	/// `id` regardless of what `job.id` holds.
	async fn update(&self, id: &JobId, job: Job) -> Result<Job>;

	/// Remove a job. Later jobs keep their relative order.
	async fn delete(&self, id: &JobId) -> Result<()>;
}
