use uuid::Uuid;

use crate::auth::password;
use crate::config::HashingConfig;
use crate::db::UserStore;
use crate::error::AccountError;
use crate::models::User;

/// Account creation and password authentication over an injected store.
///
/// Each call is a synchronous validate → hash/verify → single-row query
/// sequence with no shared mutable state, so one instance can serve
/// concurrent requests.
pub struct AccountService<S> {
    store: S,
    hashing: HashingConfig,
}

impl<S: UserStore> AccountService<S> {
    pub fn new(store: S, hashing: HashingConfig) -> Self {
        AccountService { store, hashing }
    }

    /// Create a user with a freshly hashed password and a new UUIDv7 id.
    /// Returns the persisted row, timestamps included.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<User, AccountError> {
        if email.is_empty() {
            return Err(AccountError::Validation(
                "Email cannot be blank".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(AccountError::Validation(
                "Password cannot be blank".to_string(),
            ));
        }
        if password != password_confirmation {
            return Err(AccountError::Validation(
                "Passwords do not match".to_string(),
            ));
        }

        let password_hash = password::hash(password, &self.hashing).map_err(AccountError::Hash)?;

        let id = Uuid::now_v7();
        let user = self.store.insert_user(id, email, &password_hash).await?;

        tracing::info!(user_id = %user.id, "account created");
        Ok(user)
    }

    /// Authenticate by email and password against the stored hash.
    pub async fn authenticate_by_email_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        let user = self
            .store
            .find_authenticatable_by_email(email)
            .await?
            .ok_or_else(|| AccountError::NotFound("No account for that email".to_string()))?;

        let valid = password::verify(password, &user.password_hash).map_err(AccountError::Hash)?;
        if !valid {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(user)
    }
}
