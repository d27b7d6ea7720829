//! SQL implementation of the booking repository

use crate::error::DbError;
use crate::repositories::booking::{Booking, BookingRepository};
use crate::repositories::{format_timestamp, parse_timestamp};
use crate::DbClient;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the booking repository
#[derive(Debug, Clone)]
pub struct SqlBookingRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlBookingRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn booking_from_row(row: &AnyRow) -> Result<Booking, DbError> {
    let start_time: String = row
        .try_get("start_time")
        .map_err(|e| DbError::DecodeError(e.to_string()))?;
    let end_time: String = row
        .try_get("end_time")
        .map_err(|e| DbError::DecodeError(e.to_string()))?;
    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| DbError::DecodeError(e.to_string()))?;

    Ok(Booking {
        id: row.try_get("id").ok(),
        slot_id: row.try_get("slot_id").unwrap_or_default(),
        start_time: parse_timestamp(&start_time)?,
        end_time: parse_timestamp(&end_time)?,
        name: row.try_get("name").unwrap_or_default(),
        email: row.try_get("email").unwrap_or_default(),
        phone: row.try_get("phone").unwrap_or_default(),
        notes: row.try_get("notes").ok().flatten(),
        created_at: Some(parse_timestamp(&created_at)?),
    })
}

impl BookingRepository for SqlBookingRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing bookings schema");

        // UNIQUE(slot_id) is the atomic slot-reservation guarantee
        let query = r#"
            CREATE TABLE IF NOT EXISTS bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                slot_id TEXT NOT NULL UNIQUE,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Bookings schema initialized successfully");
        Ok(())
    }

    async fn create(&self, booking: Booking) -> Result<Booking, DbError> {
        debug!("Creating booking for slot: {}", booking.slot_id);

        let created_at = booking.created_at.unwrap_or_else(Utc::now);

        let query = r#"
            INSERT INTO bookings (slot_id, start_time, end_time, name, email, phone, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(&booking.slot_id)
            .bind(format_timestamp(&booking.start_time))
            .bind(format_timestamp(&booking.end_time))
            .bind(&booking.name)
            .bind(&booking.email)
            .bind(&booking.phone)
            .bind(&booking.notes)
            .bind(format_timestamp(&created_at))
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert booking: {}", e);
                DbError::from_query_error(
                    e,
                    &format!("slot {} is already booked", booking.slot_id),
                )
            })?;

        let inserted = Booking {
            id: row.try_get("id").ok(),
            created_at: Some(created_at),
            ..booking
        };

        info!("Booking created successfully for slot: {}", inserted.slot_id);
        Ok(inserted)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, DbError> {
        debug!("Finding booking by id: {}", id);

        let query = r#"
            SELECT id, slot_id, start_time, end_time, name, email, phone, notes, created_at
            FROM bookings
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find booking: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        result.map(|row| booking_from_row(&row)).transpose()
    }

    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Booking>, DbError> {
        debug!("Listing bookings starting at or after {}", now);

        // Stored timestamps share one format, so text comparison is
        // chronological comparison.
        let query = r#"
            SELECT id, slot_id, start_time, end_time, name, email, phone, notes, created_at
            FROM bookings
            WHERE start_time >= $1
            ORDER BY start_time ASC
        "#;

        let rows = sqlx::query(query)
            .bind(format_timestamp(&now))
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list bookings: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(booking_from_row).collect()
    }

    async fn list_for_day(&self, day: NaiveDate) -> Result<Vec<Booking>, DbError> {
        debug!("Listing bookings for day: {}", day);

        let query = r#"
            SELECT id, slot_id, start_time, end_time, name, email, phone, notes, created_at
            FROM bookings
            WHERE slot_id LIKE $1
            ORDER BY start_time ASC
        "#;

        let rows = sqlx::query(query)
            .bind(format!("{}-%", day.format("%Y-%m-%d")))
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list bookings for day: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(booking_from_row).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, DbError> {
        debug!("Deleting booking with id: {}", id);

        let query = "DELETE FROM bookings WHERE id = $1";

        let result = sqlx::query(query)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete booking: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::NamedTempFile;

    async fn test_repository() -> (SqlBookingRepository, NamedTempFile) {
        let db_file = NamedTempFile::new().expect("failed to create temp database file");
        let url = format!("sqlite:{}", db_file.path().display());
        let client = DbClient::from_url(&url).await.expect("failed to connect");
        let repository = SqlBookingRepository::new(client);
        repository.init_schema().await.expect("schema init failed");
        (repository, db_file)
    }

    fn booking_at(start: DateTime<Utc>, name: &str) -> Booking {
        Booking {
            id: None,
            slot_id: start.format("%Y-%m-%d-%H-%M").to_string(),
            start_time: start,
            end_time: start + Duration::minutes(30),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "(555) 123-4567".to_string(),
            notes: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn create_find_delete_roundtrip() {
        let (repository, _db_file) = test_repository().await;

        let start = Utc.with_ymd_and_hms(2030, 6, 3, 9, 30, 0).unwrap();
        let created = repository.create(booking_at(start, "Alice")).await.unwrap();
        let id = created.id.expect("created booking should carry an id");
        assert!(created.created_at.is_some());

        let found = repository.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.slot_id, "2030-06-03-09-30");
        assert_eq!(found.start_time, start);
        assert_eq!(found.name, "Alice");

        assert!(repository.delete(id).await.unwrap());
        assert!(repository.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_slot_is_a_unique_violation() {
        let (repository, _db_file) = test_repository().await;

        let start = Utc.with_ymd_and_hms(2030, 6, 3, 10, 0, 0).unwrap();
        repository.create(booking_at(start, "Alice")).await.unwrap();

        let err = repository
            .create(booking_at(start, "Bob"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn delete_of_unknown_id_reports_not_found() {
        let (repository, _db_file) = test_repository().await;
        assert!(!repository.delete(12345).await.unwrap());
    }

    #[tokio::test]
    async fn list_upcoming_filters_and_sorts() {
        let (repository, _db_file) = test_repository().await;

        let now = Utc.with_ymd_and_hms(2030, 6, 3, 12, 0, 0).unwrap();
        let past = now - Duration::hours(3);
        let soon = now + Duration::hours(1);
        let later = now + Duration::days(1);

        repository.create(booking_at(later, "Carol")).await.unwrap();
        repository.create(booking_at(past, "Alice")).await.unwrap();
        repository.create(booking_at(soon, "Bob")).await.unwrap();

        let upcoming = repository.list_upcoming(now).await.unwrap();
        let names: Vec<&str> = upcoming.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol"]);
    }

    #[tokio::test]
    async fn list_for_day_matches_slot_date() {
        let (repository, _db_file) = test_repository().await;

        let monday = Utc.with_ymd_and_hms(2030, 6, 3, 9, 0, 0).unwrap();
        let tuesday = Utc.with_ymd_and_hms(2030, 6, 4, 9, 0, 0).unwrap();
        repository.create(booking_at(monday, "Alice")).await.unwrap();
        repository
            .create(booking_at(tuesday, "Bob"))
            .await
            .unwrap();

        let day = NaiveDate::from_ymd_opt(2030, 6, 3).unwrap();
        let bookings = repository.list_for_day(day).await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].name, "Alice");
    }
}
