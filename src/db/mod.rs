pub mod memory;
pub mod users;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AccountError;
use crate::models::User;

/// Storage capability for account rows. Injected into the account service
/// so it can run against Postgres in production and an in-memory map in
/// tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user row. The store assigns both timestamps and
    /// enforces email uniqueness.
    async fn insert_user(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AccountError>;

    /// Look up a user by email, skipping rows without a password hash
    /// (those accounts cannot authenticate with a password).
    async fn find_authenticatable_by_email(
        &self,
        email: &str,
    ) -> Result<Option<User>, AccountError>;
}
