//! ReservationRepository - the reservation store and its overlap queries.
//!
//! All interval comparisons use half-open `[from, to)` semantics: two
//! intervals overlap iff `a_from < b_to AND b_from < a_to`, so touching
//! endpoints never count as a conflict.

use super::Read;
use crate::dtos::CreateReservationDTO;
use crate::entities::{Reservation, ReservationStatus};
use chrono::{DateTime, Utc};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

/// One row of the booking report: a reservation joined with its booker and
/// room. Any status qualifies, the report is a historical record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportEntry {
    pub reservation_id: i64,
    pub username: String,
    pub reserved_from: DateTime<Utc>,
    pub reserved_to: DateTime<Utc>,
    pub purpose_of_booking: String,
    pub room_number: i64,
}

pub struct ReservationRepository {
    connection_pool: SqlitePool,
}

impl ReservationRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Conflict check: does any ACTIVE reservation for the room overlap
    /// the half-open window? Read-only, no side effects.
    #[instrument(skip(self), fields(room_id = %room_id))]
    pub async fn has_active_overlap(
        &self,
        room_id: i64,
        reserved_from: &DateTime<Utc>,
        reserved_to: &DateTime<Utc>,
    ) -> Result<bool, Error> {
        debug!("Checking room for overlapping active reservations");
        let busy = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM reservations
                WHERE room_id = ?
                  AND status = ?
                  AND reserved_from < ?
                  AND reserved_to > ?
            )
            "#,
        )
        .bind(room_id)
        .bind(ReservationStatus::Active)
        .bind(reserved_to)
        .bind(reserved_from)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(busy)
    }

    /// All ACTIVE reservations for the room overlapping the window, in
    /// stable start-time order. An inverted window matches nothing.
    #[instrument(skip(self), fields(room_id = %room_id))]
    pub async fn find_active_overlapping(
        &self,
        room_id: i64,
        reserved_from: &DateTime<Utc>,
        reserved_to: &DateTime<Utc>,
    ) -> Result<Vec<Reservation>, Error> {
        debug!("Listing active reservations overlapping window");
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT reservation_id, purpose_of_booking, reserved_from, reserved_to,
                   status, user_id, room_id, created_at, updated_at
            FROM reservations
            WHERE room_id = ?
              AND status = ?
              AND reserved_from < ?
              AND reserved_to > ?
            ORDER BY reserved_from, reservation_id
            "#,
        )
        .bind(room_id)
        .bind(ReservationStatus::Active)
        .bind(reserved_to)
        .bind(reserved_from)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} overlapping reservations", reservations.len());
        Ok(reservations)
    }

    /// Persists a new ACTIVE reservation. Callers must have already run
    /// the conflict check inside the room's critical section; this method
    /// only does the insert, in its own transaction.
    #[instrument(skip(self, data), fields(room_id = %data.room_id, user_id = %user_id))]
    pub async fn create_active(
        &self,
        user_id: i64,
        data: &CreateReservationDTO,
    ) -> Result<Reservation, Error> {
        debug!("Creating new reservation");
        let now = Utc::now();

        let mut tx = self.connection_pool.begin().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO reservations
                (purpose_of_booking, reserved_from, reserved_to, status,
                 user_id, room_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.purpose_of_booking)
        .bind(data.reserved_from)
        .bind(data.reserved_to)
        .bind(ReservationStatus::Active)
        .bind(user_id)
        .bind(data.room_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        let new_id = result.last_insert_rowid();
        info!("Reservation created with id {}", new_id);

        Ok(Reservation {
            reservation_id: new_id,
            purpose_of_booking: data.purpose_of_booking.clone(),
            reserved_from: data.reserved_from,
            reserved_to: data.reserved_to,
            status: ReservationStatus::Active,
            user_id,
            room_id: data.room_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Report query: reservations of any status overlapping the window,
    /// optionally scoped to one room, joined with booker and room.
    #[instrument(skip(self), fields(room_id = ?room_id))]
    pub async fn find_report_entries(
        &self,
        room_id: Option<i64>,
        reserved_from: &DateTime<Utc>,
        reserved_to: &DateTime<Utc>,
    ) -> Result<Vec<ReportEntry>, Error> {
        debug!("Collecting report entries");
        let mut query_builder = sqlx::QueryBuilder::new(
            r#"
            SELECT res.reservation_id, u.username, res.reserved_from, res.reserved_to,
                   res.purpose_of_booking, r.number AS room_number
            FROM reservations res
            JOIN users u ON u.user_id = res.user_id
            JOIN rooms r ON r.room_id = res.room_id
            WHERE res.reserved_from < "#,
        );
        query_builder.push_bind(reserved_to);
        query_builder.push(" AND res.reserved_to > ");
        query_builder.push_bind(reserved_from);
        if let Some(room_id) = room_id {
            query_builder.push(" AND res.room_id = ");
            query_builder.push_bind(room_id);
        }
        query_builder.push(" ORDER BY res.reservation_id");

        let entries = query_builder
            .build_query_as::<ReportEntry>()
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Report spans {} reservations", entries.len());
        Ok(entries)
    }
}

impl Read<Reservation, i64> for ReservationRepository {
    #[instrument(skip(self), fields(reservation_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Reservation>, Error> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT reservation_id, purpose_of_booking, reserved_from, reserved_to,
                   status, user_id, room_id, created_at, updated_at
            FROM reservations
            WHERE reservation_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(reservation)
    }
}
