use crate::http::types::Timestamptz;
use crate::http::Result;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

/// Request body for `POST /api/users` and `POST /api/login`.
///
/// Missing fields decode as empty strings rather than failing.
#[derive(serde::Deserialize, Default, Debug)]
#[serde(default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[cfg_attr(test, derive(PartialEq, Eq))]
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub hashed_password: String,
}

/// A row of the `users` table. Deliberately not `Serialize`; see [`User::into_public`].
#[derive(FromRow, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub email: String,
    pub hashed_password: String,
}

/// What clients get to see of a user.
#[derive(serde::Serialize, Debug)]
pub struct PublicUser {
    pub id: Uuid,
    pub created_at: Timestamptz,
    pub updated_at: Timestamptz,
    pub email: String,
}

impl User {
    pub fn into_public(self) -> PublicUser {
        self.into_public_and_hash().0
    }

    /// Splits the row into what the client may see and the hash it must not.
    pub fn into_public_and_hash(self) -> (PublicUser, String) {
        let public = PublicUser {
            id: self.id,
            created_at: Timestamptz(self.created_at),
            updated_at: Timestamptz(self.updated_at),
            email: self.email,
        };

        (public, self.hashed_password)
    }
}

#[derive(Clone)]
pub struct UserController {
    pool: PgPool,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub type DynUserCtrl = Arc<dyn UserCtrlTrait + Send + Sync>;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserCtrlTrait {
    async fn create_user(&self, new_user: NewUser) -> Result<User>;
    async fn user_by_email(&self, email: &str) -> Result<User>;
    /// Removes every user, and by cascade every chirp.
    async fn delete_all_users(&self) -> Result<()>;
}

#[async_trait]
impl UserCtrlTrait for UserController {
    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
                insert into users (email, hashed_password) values ($1, $2)
                returning id, created_at, updated_at, email, hashed_password
            "#,
        )
        .bind(new_user.email)
        .bind(new_user.hashed_password)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
                select id, created_at, updated_at, email, hashed_password
                from users where email = $1
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn delete_all_users(&self) -> Result<()> {
        let deleted = sqlx::query("delete from users")
            .execute(&self.pool)
            .await?
            .rows_affected();

        log::debug!("deleted {} users", deleted);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_leaves_out_the_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
            email: "saul@bettercall.com".to_string(),
            hashed_password: "$argon2id$secret".to_string(),
        };
        let id = user.id;

        let json = serde_json::to_value(user.into_public()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": id,
                "created_at": "1970-01-01T00:00:00Z",
                "updated_at": "1970-01-01T00:00:00Z",
                "email": "saul@bettercall.com",
            })
        );
    }

    #[test]
    fn into_public_and_hash_moves_the_hash_out() {
        let user = User {
            id: Uuid::new_v4(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
            email: "kim@wexlermcgill.com".to_string(),
            hashed_password: "$argon2id$secret".to_string(),
        };

        let (public, hashed_password) = user.into_public_and_hash();

        assert_eq!(public.email, "kim@wexlermcgill.com");
        assert_eq!(hashed_password, "$argon2id$secret");
    }
}
