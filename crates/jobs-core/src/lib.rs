// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the jobs service.
//!
//! This crate provides:
//! - The [`Job`] record and its [`JobId`]
//! - The [`JobRepository`] capability that storage backends implement
//! - [`InMemoryJobRepository`], the lock-guarded in-process backend

pub mod error;
pub mod job;
pub mod memory;
pub mod repository;

pub use error::{JobsError, Result};
pub use job::{Job, JobId};
pub use memory::InMemoryJobRepository;
pub use repository::JobRepository;
