// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The job record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier assigned to a job by the storage backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for JobId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for JobId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

impl From<&str> for JobId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

/// A stored job: an identifier plus an opaque JSON payload.
///
/// On the wire the payload fields sit next to `id`, so a job serializes as
/// `{"id": "0", "name": "build"}`. Any `id` sent by a client is replaced by the
/// backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
	#[serde(default)]
	pub id: JobId,
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}

impl Job {
	pub fn new(fields: Map<String, Value>) -> Self {
		Self {
			id: JobId::default(),
			fields,
		}
	}

	pub fn with_id(mut self, id: JobId) -> Self {
		self.id = id;
		self
	}
}
