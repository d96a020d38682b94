//! RoomRepository - administrative management of bookable rooms.

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreateRoomDTO, UpdateRoomDTO};
use crate::entities::Room;
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub struct RoomRepository {
    connection_pool: SqlitePool,
}

impl RoomRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// All rooms, in creation order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Room>, Error> {
        debug!("Listing all rooms");
        let rooms = sqlx::query_as::<_, Room>(
            "SELECT room_id, number, name, created_at, updated_at FROM rooms ORDER BY room_id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(rooms)
    }
}

impl Create<Room, CreateRoomDTO> for RoomRepository {
    #[instrument(skip(self, data), fields(number = %data.number))]
    async fn create(&self, data: &CreateRoomDTO) -> Result<Room, Error> {
        debug!("Creating new room");
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO rooms (number, name, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(data.number)
        .bind(&data.name)
        .bind(now)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid();
        info!("Room created with id {}", new_id);

        Ok(Room {
            room_id: new_id,
            number: data.number,
            name: data.name.clone(),
            created_at: now,
            updated_at: now,
        })
    }
}

impl Read<Room, i64> for RoomRepository {
    #[instrument(skip(self), fields(room_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Room>, Error> {
        let room = sqlx::query_as::<_, Room>(
            "SELECT room_id, number, name, created_at, updated_at FROM rooms WHERE room_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(room)
    }
}

impl Update<Room, UpdateRoomDTO, i64> for RoomRepository {
    #[instrument(skip(self, data), fields(room_id = %id))]
    async fn update(&self, id: &i64, data: &UpdateRoomDTO) -> Result<Room, Error> {
        debug!("Updating room");
        let current_room = self.read(id).await?.ok_or(Error::RowNotFound)?;

        if data.number.is_none() && data.name.is_none() {
            debug!("No fields to update, returning current room");
            return Ok(current_room);
        }

        // Build dynamic UPDATE query using QueryBuilder
        let mut query_builder = sqlx::QueryBuilder::new("UPDATE rooms SET ");

        let mut separated = query_builder.separated(", ");
        if let Some(number) = data.number {
            separated.push("number = ");
            separated.push_bind_unseparated(number);
        }
        if let Some(ref name) = data.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name);
        }
        separated.push("updated_at = ");
        separated.push_bind_unseparated(Utc::now());

        query_builder.push(" WHERE room_id = ");
        query_builder.push_bind(id);

        query_builder.build().execute(&self.connection_pool).await?;

        info!("Room updated successfully");

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i64> for RoomRepository {
    #[instrument(skip(self), fields(room_id = %id))]
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        debug!("Deleting room");
        sqlx::query("DELETE FROM rooms WHERE room_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        info!("Room deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test]
    async fn create_and_read_room(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = RoomRepository::new(pool);

        let created = repo
            .create(&CreateRoomDTO {
                number: 12,
                name: "Room_A".to_string(),
            })
            .await?;

        let room = repo.read(&created.room_id).await?.unwrap();
        assert_eq!(room.number, 12);
        assert_eq!(room.name, "Room_A");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("rooms")))]
    async fn list_all_returns_fixture_rooms_in_order(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = RoomRepository::new(pool);

        let rooms = repo.list_all().await?;

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "Room_A");
        assert_eq!(rooms[1].name, "Room_B");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("rooms")))]
    async fn update_changes_only_given_fields(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = RoomRepository::new(pool);

        let updated = repo
            .update(
                &1,
                &UpdateRoomDTO {
                    number: Some(42),
                    name: None,
                },
            )
            .await?;

        assert_eq!(updated.number, 42);
        assert_eq!(updated.name, "Room_A");
        assert!(updated.updated_at > updated.created_at);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("rooms")))]
    async fn update_nonexistent_room_is_row_not_found(pool: SqlitePool) {
        let repo = RoomRepository::new(pool);

        let result = repo
            .update(
                &999,
                &UpdateRoomDTO {
                    number: Some(1),
                    name: None,
                },
            )
            .await;

        assert!(matches!(result, Err(Error::RowNotFound)));
    }

    /// Deleting a room cascades to its reservations.
    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "rooms", "reservations")))]
    async fn delete_room_cascades_to_reservations(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = RoomRepository::new(pool.clone());

        repo.delete(&1).await?;

        assert!(repo.read(&1).await?.is_none());
        let remaining: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE room_id = 1")
                .fetch_one(&pool)
                .await?;
        assert_eq!(remaining, 0);

        // Room_B and its reservation are untouched
        let others: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE room_id = 2")
            .fetch_one(&pool)
            .await?;
        assert_eq!(others, 1);
        Ok(())
    }
}
