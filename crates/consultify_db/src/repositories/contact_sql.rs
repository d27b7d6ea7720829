//! SQL implementation of the contact repository

use crate::error::DbError;
use crate::repositories::contact::{ContactRepository, ContactSubmission};
use crate::repositories::{format_timestamp, parse_timestamp};
use crate::DbClient;
use chrono::Utc;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the contact repository
#[derive(Debug, Clone)]
pub struct SqlContactRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlContactRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn submission_from_row(row: &AnyRow) -> Result<ContactSubmission, DbError> {
    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| DbError::DecodeError(e.to_string()))?;

    // preferred_days is stored as a JSON-encoded array
    let preferred_days: Option<String> = row.try_get("preferred_days").ok().flatten();
    let preferred_days = preferred_days
        .map(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| DbError::DecodeError(format!("invalid preferred_days: {}", e)))
        })
        .transpose()?;

    Ok(ContactSubmission {
        id: row.try_get("id").ok(),
        name: row.try_get("name").unwrap_or_default(),
        email: row.try_get("email").unwrap_or_default(),
        phone: row.try_get("phone").ok().flatten(),
        message: row.try_get("message").unwrap_or_default(),
        contact_preference: row.try_get("contact_preference").ok().flatten(),
        preferred_days,
        created_at: Some(parse_timestamp(&created_at)?),
    })
}

impl ContactRepository for SqlContactRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing contact submissions schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS contact_submissions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                message TEXT NOT NULL,
                contact_preference TEXT,
                preferred_days TEXT,
                created_at TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Contact submissions schema initialized successfully");
        Ok(())
    }

    async fn create(&self, submission: ContactSubmission) -> Result<ContactSubmission, DbError> {
        debug!("Creating contact submission from: {}", submission.email);

        let created_at = submission.created_at.unwrap_or_else(Utc::now);
        let preferred_days = submission
            .preferred_days
            .as_ref()
            .map(|days| {
                serde_json::to_string(days)
                    .map_err(|e| DbError::QueryError(format!("invalid preferred_days: {}", e)))
            })
            .transpose()?;

        let query = r#"
            INSERT INTO contact_submissions (name, email, phone, message, contact_preference, preferred_days, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(&submission.name)
            .bind(&submission.email)
            .bind(&submission.phone)
            .bind(&submission.message)
            .bind(&submission.contact_preference)
            .bind(preferred_days)
            .bind(format_timestamp(&created_at))
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert contact submission: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let inserted = ContactSubmission {
            id: row.try_get("id").ok(),
            created_at: Some(created_at),
            ..submission
        };

        info!("Contact submission created successfully");
        Ok(inserted)
    }

    async fn list_all(&self) -> Result<Vec<ContactSubmission>, DbError> {
        debug!("Listing all contact submissions");

        let query = r#"
            SELECT id, name, email, phone, message, contact_preference, preferred_days, created_at
            FROM contact_submissions
            ORDER BY created_at DESC, id DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list contact submissions: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(submission_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::NamedTempFile;

    async fn test_repository() -> (SqlContactRepository, NamedTempFile) {
        let db_file = NamedTempFile::new().expect("failed to create temp database file");
        let url = format!("sqlite:{}", db_file.path().display());
        let client = DbClient::from_url(&url).await.expect("failed to connect");
        let repository = SqlContactRepository::new(client);
        repository.init_schema().await.expect("schema init failed");
        (repository, db_file)
    }

    fn submission(name: &str) -> ContactSubmission {
        ContactSubmission {
            id: None,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            message: "Interested in a data-infrastructure review".to_string(),
            contact_preference: None,
            preferred_days: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn create_preserves_optional_fields() {
        let (repository, _db_file) = test_repository().await;

        let mut new_submission = submission("Alice");
        new_submission.phone = Some("(555) 867-5309".to_string());
        new_submission.contact_preference = Some("phone".to_string());
        new_submission.preferred_days = Some(vec!["Mon".to_string(), "Wed".to_string()]);

        let created = repository.create(new_submission).await.unwrap();
        assert!(created.id.is_some());

        let all = repository.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].phone.as_deref(), Some("(555) 867-5309"));
        assert_eq!(all[0].contact_preference.as_deref(), Some("phone"));
        assert_eq!(
            all[0].preferred_days,
            Some(vec!["Mon".to_string(), "Wed".to_string()])
        );
    }

    #[tokio::test]
    async fn absent_optional_fields_stay_absent() {
        let (repository, _db_file) = test_repository().await;

        repository.create(submission("Bob")).await.unwrap();

        let all = repository.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].phone.is_none());
        assert!(all[0].contact_preference.is_none());
        assert!(all[0].preferred_days.is_none());
    }

    #[tokio::test]
    async fn list_all_returns_newest_first() {
        let (repository, _db_file) = test_repository().await;

        let base = Utc.with_ymd_and_hms(2030, 6, 3, 12, 0, 0).unwrap();
        for (name, offset) in [("Alice", 0), ("Bob", 1), ("Carol", 2)] {
            let mut new_submission = submission(name);
            new_submission.created_at = Some(base + Duration::hours(offset));
            repository.create(new_submission).await.unwrap();
        }

        let all = repository.list_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
    }
}
