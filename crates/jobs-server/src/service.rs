// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Job service layer.

use std::sync::Arc;

use jobs_core::{Job, JobId, JobRepository, Result};

/// Forwards job operations to whichever [`JobRepository`] it was built with.
///
/// Handlers depend on this type rather than on a concrete backend, so the
/// storage can be swapped without touching the HTTP layer.
#[derive(Clone)]
pub struct JobService {
	repo: Arc<dyn JobRepository>,
}

impl JobService {
	pub fn new(repo: Arc<dyn JobRepository>) -> Self {
		Self { repo }
	}

	pub async fn get(&self, id: &JobId) -> Result<Job> {
		self.repo.get(id).await
	}

	pub async fn get_all(&self) -> Result<Vec<Job>> {
		self.repo.get_all().await
	}

	pub async fn create(&self, job: Job) -> Result<Job> {
		self.repo.create(job).await
	}

	pub async fn update(&self, id: &JobId, job: Job) -> Result<Job> {
		self.repo.update(id, job).await
	}

	pub async fn delete(&self, id: &JobId) -> Result<()> {
		self.repo.delete(id).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use jobs_core::{InMemoryJobRepository, JobsError};
	use std::sync::Mutex;

	/// Records each call and fails every lookup.
	#[derive(Default)]
	struct RecordingRepository {
		calls: Mutex<Vec<String>>,
	}

	impl RecordingRepository {
		fn record(&self, call: impl Into<String>) {
			self.calls.lock().unwrap().push(call.into());
		}
	}

	#[async_trait]
	impl JobRepository for RecordingRepository {
		async fn get(&self, id: &JobId) -> Result<Job> {
			self.record(format!("get:{id}"));
			Err(JobsError::NotFound(id.clone()))
		}

		async fn get_all(&self) -> Result<Vec<Job>> {
			self.record("get_all");
			Err(JobsError::Internal("offline".to_string()))
		}

		async fn create(&self, job: Job) -> Result<Job> {
			self.record("create");
			Ok(job)
		}

		async fn update(&self, id: &JobId, job: Job) -> Result<Job> {
			self.record(format!("update:{id}"));
			Ok(job)
		}

		async fn delete(&self, id: &JobId) -> Result<()> {
			self.record(format!("delete:{id}"));
			Ok(())
		}
	}

	#[tokio::test]
	async fn test_service_delegates_every_call() {
		let repo = Arc::new(RecordingRepository::default());
		let service = JobService::new(repo.clone());
		let id = JobId::from("3");

		assert!(service.get(&id).await.unwrap_err().is_not_found());
		assert!(matches!(
			service.get_all().await.unwrap_err(),
			JobsError::Internal(_)
		));
		service.create(Job::default()).await.unwrap();
		service.update(&id, Job::default()).await.unwrap();
		service.delete(&id).await.unwrap();

		assert_eq!(
			*repo.calls.lock().unwrap(),
			vec!["get:3", "get_all", "create", "update:3", "delete:3"]
		);
	}

	#[tokio::test]
	async fn test_service_over_in_memory_backend() {
		let service = JobService::new(Arc::new(InMemoryJobRepository::new()));

		let created = service.create(Job::default()).await.unwrap();
		assert_eq!(service.get(&created.id).await.unwrap(), created);
		assert_eq!(service.get_all().await.unwrap().len(), 1);

		service.delete(&created.id).await.unwrap();
		assert!(service.get_all().await.unwrap().is_empty());
	}
}
