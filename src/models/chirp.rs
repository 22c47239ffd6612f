use crate::http::types::Timestamptz;
use crate::http::Result;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

/// Request body for `POST /api/chirps`. A missing `user_id` decodes as the nil UUID.
#[derive(serde::Deserialize, Default, Debug)]
#[serde(default)]
pub struct CreateChirp {
    pub body: String,
    pub user_id: Uuid,
}

/// Request body for `POST /api/validate_chirp`.
#[derive(serde::Deserialize, Default, Debug)]
#[serde(default)]
pub struct ValidateChirp {
    pub body: String,
}

/// A chirp ready to be stored. `body` has already been moderated.
#[cfg_attr(test, derive(PartialEq, Eq))]
#[derive(Debug)]
pub struct NewChirp {
    pub body: String,
    pub user_id: Uuid,
}

/// A row of the `chirps` table.
#[derive(FromRow, Debug, Clone)]
pub struct ChirpRecord {
    pub id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub body: String,
    pub user_id: Uuid,
}

#[derive(serde::Serialize, Debug)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: Timestamptz,
    pub updated_at: Timestamptz,
    pub body: String,
    pub user_id: Uuid,
}

impl ChirpRecord {
    pub fn into_chirp(self) -> Chirp {
        Chirp {
            id: self.id,
            created_at: Timestamptz(self.created_at),
            updated_at: Timestamptz(self.updated_at),
            body: self.body,
            user_id: self.user_id,
        }
    }
}

#[derive(Clone)]
pub struct ChirpController {
    pool: PgPool,
}

impl ChirpController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub type DynChirpCtrl = Arc<dyn ChirpCtrlTrait + Send + Sync>;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChirpCtrlTrait {
    async fn create_chirp(&self, new_chirp: NewChirp) -> Result<ChirpRecord>;
    /// All chirps, oldest first.
    async fn list_chirps(&self) -> Result<Vec<ChirpRecord>>;
}

#[async_trait]
impl ChirpCtrlTrait for ChirpController {
    async fn create_chirp(&self, new_chirp: NewChirp) -> Result<ChirpRecord> {
        let chirp = sqlx::query_as::<_, ChirpRecord>(
            r#"
                insert into chirps (body, user_id) values ($1, $2)
                returning id, created_at, updated_at, body, user_id
            "#,
        )
        .bind(new_chirp.body)
        .bind(new_chirp.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(chirp)
    }

    async fn list_chirps(&self) -> Result<Vec<ChirpRecord>> {
        // `id` breaks ties between chirps created in the same transaction.
        let chirps = sqlx::query_as::<_, ChirpRecord>(
            r#"
                select id, created_at, updated_at, body, user_id
                from chirps
                order by created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(chirps)
    }
}
