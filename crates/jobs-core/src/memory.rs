// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory job storage.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::{JobsError, Result};
use crate::job::{Job, JobId};
use crate::repository::JobRepository;

#[derive(Debug, Default)]
struct JobStore {
	jobs: Vec<Job>,
	next_id: u64,
}

impl JobStore {
	fn assign_id(&mut self) -> JobId {
		let id = JobId(self.next_id.to_string());
		self.next_id += 1;
		id
	}

	fn position(&self, id: &JobId) -> Option<usize> {
		self.jobs.iter().position(|j| &j.id == id)
	}
}

/// Job storage backed by an ordered `Vec` behind a single lock.
///
/// IDs come from a counter that starts at zero and never goes back, so an ID
/// is never handed out twice even after deletes.
#[derive(Debug, Default)]
pub struct InMemoryJobRepository {
	inner: RwLock<JobStore>,
}

impl InMemoryJobRepository {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed a store with existing jobs. IDs are reassigned in order.
	#[cfg(test)]
	pub fn with_jobs(jobs: Vec<Job>) -> Self {
		let mut store = JobStore::default();
		for job in jobs {
			let id = store.assign_id();
			store.jobs.push(job.with_id(id));
		}
		Self {
			inner: RwLock::new(store),
		}
	}

	pub async fn len(&self) -> usize {
		self.inner.read().await.jobs.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.inner.read().await.jobs.is_empty()
	}
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
	#[instrument(skip(self), fields(job_id = %id))]
	async fn get(&self, id: &JobId) -> Result<Job> {
		let store = self.inner.read().await;
		store
			.jobs
			.iter()
			.find(|j| &j.id == id)
			.cloned()
			.ok_or_else(|| JobsError::NotFound(id.clone()))
	}

	#[instrument(skip(self))]
	async fn get_all(&self) -> Result<Vec<Job>> {
		Ok(self.inner.read().await.jobs.clone())
	}

	#[instrument(skip(self, job))]
	async fn create(&self, job: Job) -> Result<Job> {
		let mut store = self.inner.write().await;
		let id = store.assign_id();
		let job = job.with_id(id);
		store.jobs.push(job.clone());
		debug!(job_id = %job.id, count = store.jobs.len(), "job stored");
		Ok(job)
	}

	#[instrument(skip(self, job), fields(job_id = %id))]
	async fn update(&self, id: &JobId, job: Job) -> Result<Job> {
		let mut store = self.inner.write().await;
		let index = store
			.position(id)
			.ok_or_else(|| JobsError::NotFound(id.clone()))?;
		let job = job.with_id(id.clone());
		store.jobs[index] = job.clone();
		Ok(job)
	}

	#[instrument(skip(self), fields(job_id = %id))]
	async fn delete(&self, id: &JobId) -> Result<()> {
		let mut store = self.inner.write().await;
		let index = store
			.position(id)
			.ok_or_else(|| JobsError::NotFound(id.clone()))?;
		store.jobs.remove(index);
		debug!(count = store.jobs.len(), "job removed");
		Ok(())
	}
}
