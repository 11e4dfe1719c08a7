//! SQLite storage backend implementation
//!
//! Persistent storage using sqlx with parameterized queries throughout. The
//! schema is bootstrapped on startup; there is no migration tooling.

use crate::error::{PropelError, Result};
use crate::storage::StorageBackend;
use crate::types::{
    Contact, ContactCreate, Interaction, JobApplication, JobApplicationCreate, PlannerTask,
};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use tracing::info;

/// SQLite storage backend
pub struct SqliteStorage {
    pool: SqlitePool,
}

/// Store a serde string-enum as its bare token (no JSON quotes)
fn enum_to_text<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.trim_matches('"').to_string())
}

/// Parse a bare token back into a serde string-enum
fn enum_from_text<T: serde::de::DeserializeOwned>(token: &str) -> Result<T> {
    Ok(serde_json::from_str(&format!("\"{}\"", token))?)
}

impl SqliteStorage {
    /// Connect to the database at `database_url` (e.g. `sqlite://propelme.db`),
    /// creating the file if missing.
    pub async fn new(database_url: &str) -> Result<Self> {
        info!("Connecting to SQLite database: {}", database_url);

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePool::connect_with(options).await?;

        info!("SQLite connection established");

        Ok(Self { pool })
    }

    fn row_to_contact(row: &SqliteRow) -> Result<Contact> {
        let relationship: Option<String> = row.try_get("relationship")?;
        let relationship = relationship.as_deref().map(enum_from_text).transpose()?;

        let warmth_bucket: Option<String> = row.try_get("warmth_bucket")?;
        let warmth_bucket = warmth_bucket.as_deref().map(enum_from_text).transpose()?;

        let source: String = row.try_get("source")?;
        let tags_json: String = row.try_get("tags")?;

        Ok(Contact {
            id: Some(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            linkedin_url: row.try_get("linkedin_url")?,
            company: row.try_get("company")?,
            title: row.try_get("title")?,
            location: row.try_get("location")?,
            relationship,
            last_interaction_date: row.try_get("last_interaction_date")?,
            interaction_count: row.try_get("interaction_count")?,
            warmth_score: row.try_get("warmth_score")?,
            warmth_bucket,
            priority_score: row.try_get("priority_score")?,
            source: enum_from_text(&source)?,
            tags: serde_json::from_str(&tags_json)?,
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn row_to_interaction(row: &SqliteRow) -> Result<Interaction> {
        let kind: String = row.try_get("kind")?;
        let sentiment: String = row.try_get("sentiment")?;

        Ok(Interaction {
            id: Some(row.try_get("id")?),
            contact_id: row.try_get("contact_id")?,
            date: row.try_get("date")?,
            kind: enum_from_text(&kind)?,
            notes: row.try_get("notes")?,
            sentiment: enum_from_text(&sentiment)?,
            follow_up_needed: row.try_get("follow_up_needed")?,
            follow_up_date: row.try_get("follow_up_date")?,
        })
    }

    fn row_to_job(row: &SqliteRow) -> Result<JobApplication> {
        Ok(JobApplication {
            id: row.try_get("id")?,
            company: row.try_get("company")?,
            role_title: row.try_get("role_title")?,
            link: row.try_get("link")?,
            status: row.try_get("status")?,
            contact_name: row.try_get("contact_name")?,
            contact_linkedin_url: row.try_get("contact_linkedin_url")?,
            notes: row.try_get("notes")?,
        })
    }

    fn row_to_task(row: &SqliteRow) -> Result<PlannerTask> {
        let action_type: String = row.try_get("action_type")?;
        let due_date: NaiveDate = row.try_get("due_date")?;

        Ok(PlannerTask {
            id: Some(row.try_get("id")?),
            contact_id: row.try_get("contact_id")?,
            action_type: enum_from_text(&action_type)?,
            due_date,
            completed: row.try_get("completed")?,
        })
    }

    async fn get_job(&self, id: i64) -> Result<JobApplication> {
        let row = sqlx::query("SELECT * FROM job_applications WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Self::row_to_job(&row),
            None => Err(PropelError::NotFound(format!("job application {}", id))),
        }
    }
}

#[async_trait]
impl StorageBackend for SqliteStorage {
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT,
                linkedin_url TEXT,
                company TEXT,
                title TEXT,
                location TEXT,
                relationship TEXT,
                last_interaction_date TEXT,
                interaction_count INTEGER NOT NULL DEFAULT 0,
                warmth_score REAL,
                warmth_bucket TEXT,
                priority_score REAL NOT NULL DEFAULT 0,
                source TEXT NOT NULL DEFAULT 'manual',
                tags TEXT NOT NULL DEFAULT '[]',
                notes TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS interactions (
                id TEXT PRIMARY KEY,
                contact_id INTEGER NOT NULL REFERENCES contacts(id),
                date TEXT NOT NULL,
                kind TEXT NOT NULL,
                notes TEXT NOT NULL DEFAULT '',
                sentiment TEXT NOT NULL DEFAULT 'neutral',
                follow_up_needed INTEGER NOT NULL DEFAULT 0,
                follow_up_date TEXT
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS job_applications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                company TEXT NOT NULL,
                role_title TEXT NOT NULL,
                link TEXT NOT NULL DEFAULT '',
                status TEXT NOT NULL DEFAULT 'Planned',
                contact_name TEXT NOT NULL DEFAULT '',
                contact_linkedin_url TEXT NOT NULL DEFAULT '',
                notes TEXT NOT NULL DEFAULT ''
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS planner_tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                contact_id INTEGER NOT NULL,
                action_type TEXT NOT NULL,
                due_date TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_contact(&self, contact: &ContactCreate) -> Result<Contact> {
        let now = Utc::now();
        let relationship = contact
            .relationship
            .map(|r| enum_to_text(&r))
            .transpose()?;
        let source = enum_to_text(&contact.source.unwrap_or_default())?;

        let result = sqlx::query(
            "INSERT INTO contacts (name, email, linkedin_url, company, title, location, \
             relationship, interaction_count, priority_score, source, tags, notes, \
             created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, 0, 0, ?, ?, ?, ?, ?)",
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.linkedin_url)
        .bind(&contact.company)
        .bind(&contact.title)
        .bind(&contact.location)
        .bind(relationship)
        .bind(source)
        .bind(serde_json::to_string(&contact.tags)?)
        .bind(&contact.notes)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_contact(result.last_insert_rowid()).await
    }

    async fn get_contact(&self, id: i64) -> Result<Contact> {
        let row = sqlx::query("SELECT * FROM contacts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Self::row_to_contact(&row),
            None => Err(PropelError::NotFound(format!("contact {}", id))),
        }
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let rows = sqlx::query("SELECT * FROM contacts ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_contact).collect()
    }

    async fn insert_interaction(&self, interaction: &Interaction) -> Result<Interaction> {
        // The referenced contact must exist; this also gives us the current
        // rollup state.
        let contact = self.get_contact(interaction.contact_id).await?;

        let mut stored = interaction.clone();
        if stored.id.is_none() {
            stored.id = Some(uuid::Uuid::new_v4().to_string());
        }

        sqlx::query(
            "INSERT INTO interactions (id, contact_id, date, kind, notes, sentiment, \
             follow_up_needed, follow_up_date) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(stored.id.as_deref())
        .bind(stored.contact_id)
        .bind(stored.date)
        .bind(enum_to_text(&stored.kind)?)
        .bind(&stored.notes)
        .bind(enum_to_text(&stored.sentiment)?)
        .bind(stored.follow_up_needed)
        .bind(stored.follow_up_date)
        .execute(&self.pool)
        .await?;

        let last_seen = match contact.last_interaction_date {
            Some(existing) if existing >= stored.date => existing,
            _ => stored.date,
        };

        sqlx::query(
            "UPDATE contacts SET interaction_count = interaction_count + 1, \
             last_interaction_date = ?, updated_at = ? WHERE id = ?",
        )
        .bind(last_seen)
        .bind(Utc::now())
        .bind(stored.contact_id)
        .execute(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_interactions(&self, contact_id: i64) -> Result<Vec<Interaction>> {
        let rows = sqlx::query("SELECT * FROM interactions WHERE contact_id = ? ORDER BY date DESC")
            .bind(contact_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_interaction).collect()
    }

    async fn insert_job_application(&self, job: &JobApplicationCreate) -> Result<JobApplication> {
        let result = sqlx::query(
            "INSERT INTO job_applications (company, role_title, link, status, contact_name, \
             contact_linkedin_url, notes) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&job.company)
        .bind(&job.role_title)
        .bind(&job.link)
        .bind(&job.status)
        .bind(&job.contact_name)
        .bind(&job.contact_linkedin_url)
        .bind(&job.notes)
        .execute(&self.pool)
        .await?;

        self.get_job(result.last_insert_rowid()).await
    }

    async fn list_job_applications(&self) -> Result<Vec<JobApplication>> {
        let rows = sqlx::query("SELECT * FROM job_applications ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_job).collect()
    }

    async fn update_job_status(
        &self,
        id: i64,
        status: &str,
        notes_append: Option<&str>,
    ) -> Result<JobApplication> {
        let job = self.get_job(id).await?;

        let notes = match notes_append {
            Some(extra) if !extra.is_empty() => {
                if job.notes.is_empty() {
                    extra.to_string()
                } else {
                    format!("{}\n{}", job.notes, extra)
                }
            }
            _ => job.notes,
        };

        sqlx::query("UPDATE job_applications SET status = ?, notes = ? WHERE id = ?")
            .bind(status)
            .bind(&notes)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get_job(id).await
    }

    async fn insert_planner_task(&self, task: &PlannerTask) -> Result<PlannerTask> {
        let result = sqlx::query(
            "INSERT INTO planner_tasks (contact_id, action_type, due_date, completed) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(task.contact_id)
        .bind(enum_to_text(&task.action_type)?)
        .bind(task.due_date)
        .bind(task.completed)
        .execute(&self.pool)
        .await?;

        let mut stored = task.clone();
        stored.id = Some(result.last_insert_rowid());
        Ok(stored)
    }

    async fn list_planner_tasks(&self) -> Result<Vec<PlannerTask>> {
        let rows = sqlx::query("SELECT * FROM planner_tasks ORDER BY due_date ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_task).collect()
    }
}
