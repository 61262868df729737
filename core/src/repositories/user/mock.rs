//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository backing unit and integration tests.
///
/// Ids are assigned sequentially, mirroring an autoincrement column, and
/// the email-uniqueness constraint is enforced the way a database unique
/// index would surface it.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Unique index on email
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Store {
                message: format!("unique constraint violated on email: {}", user.email),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User::from_new(id, user);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::Store {
                message: format!("no user with id {}", user.id),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_page(&self, skip: u64, take: u64) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut page: Vec<User> = users.values().cloned().collect();
        page.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page
            .into_iter()
            .skip(skip as usize)
            .take(take as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.len() as u64)
    }
}
