use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::db::UserStore;
use crate::error::AccountError;
use crate::models::User;

/// In-process [`UserStore`] keyed by email. Mirrors the semantics of the
/// Postgres store: unique emails, timestamps assigned on insert.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AccountError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(email) {
            return Err(AccountError::Conflict(
                "Email is already registered".to_string(),
            ));
        }
        let now = Utc::now();
        let user = User {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            inserted_at: now,
            updated_at: now,
        };
        users.insert(email.to_string(), user.clone());
        Ok(user)
    }

    async fn find_authenticatable_by_email(
        &self,
        email: &str,
    ) -> Result<Option<User>, AccountError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .get(email)
            .filter(|u| !u.password_hash.is_empty())
            .cloned())
    }
}
