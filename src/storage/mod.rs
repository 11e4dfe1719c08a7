//! Storage layer for the PropelMe backend
//!
//! Provides the storage abstraction and its SQLite implementation. The
//! relational store is the system of record for contacts, interactions, job
//! applications, and planner tasks; the scoring core never touches it.

pub mod sqlite;

use crate::error::Result;
use crate::types::{
    Contact, ContactCreate, Interaction, JobApplication, JobApplicationCreate, PlannerTask,
};
use async_trait::async_trait;

/// Storage backend trait defining all required operations
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Create the schema if it does not exist yet
    async fn init_schema(&self) -> Result<()>;

    /// Store a new contact
    async fn insert_contact(&self, contact: &ContactCreate) -> Result<Contact>;

    /// Retrieve a contact by id
    async fn get_contact(&self, id: i64) -> Result<Contact>;

    /// List all contacts, most recently created first
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Record an interaction and roll it up onto the contact
    async fn insert_interaction(&self, interaction: &Interaction) -> Result<Interaction>;

    /// List a contact's interactions, newest first
    async fn list_interactions(&self, contact_id: i64) -> Result<Vec<Interaction>>;

    /// Store a new job application
    async fn insert_job_application(&self, job: &JobApplicationCreate) -> Result<JobApplication>;

    /// List job applications, newest first
    async fn list_job_applications(&self) -> Result<Vec<JobApplication>>;

    /// Update a job application's status, optionally appending to its notes
    async fn update_job_status(
        &self,
        id: i64,
        status: &str,
        notes_append: Option<&str>,
    ) -> Result<JobApplication>;

    /// Store a planner task
    async fn insert_planner_task(&self, task: &PlannerTask) -> Result<PlannerTask>;

    /// List planner tasks ordered by due date
    async fn list_planner_tasks(&self) -> Result<Vec<PlannerTask>>;
}
