use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::UserStore;
use crate::error::AccountError;
use crate::models::User;

const USER_COLUMNS: &str = "id, email, password_hash, inserted_at, updated_at";

pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (id, email, password_hash)
         VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .fetch_one(executor)
    .await
}

pub async fn find_authenticatable_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users
         WHERE password_hash IS NOT NULL AND email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Postgres-backed [`UserStore`]. Uniqueness and timestamps are enforced by
/// the `users` table itself.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        PgUserStore { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert_user(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AccountError> {
        insert(&self.pool, id, email, password_hash)
            .await
            .map_err(AccountError::from)
    }

    async fn find_authenticatable_by_email(
        &self,
        email: &str,
    ) -> Result<Option<User>, AccountError> {
        find_authenticatable_by_email(&self.pool, email)
            .await
            .map_err(AccountError::from)
    }
}
