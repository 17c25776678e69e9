use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{AuthError, AuthResult};
use crate::models::Manager;

/// Persistence port for managers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ManagerRepository: Send + Sync {
    /// Exact, case-sensitive email match
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Manager>>;

    /// Persist a manager whose password is already hashed
    async fn insert(&self, manager: &Manager) -> AuthResult<()>;

    async fn count(&self) -> AuthResult<u64>;
}

/// In-memory implementation of ManagerRepository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryManagerRepository {
    managers: Arc<RwLock<HashMap<String, Manager>>>,
}

impl InMemoryManagerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ManagerRepository for InMemoryManagerRepository {
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Manager>> {
        let managers = self.managers.read().await;
        Ok(managers.get(email).cloned())
    }

    async fn insert(&self, manager: &Manager) -> AuthResult<()> {
        let mut managers = self.managers.write().await;

        if managers.contains_key(&manager.email) {
            return Err(AuthError::Repository(format!(
                "manager with email '{}' already exists",
                manager.email
            )));
        }

        managers.insert(manager.email.clone(), manager.clone());
        Ok(())
    }

    async fn count(&self) -> AuthResult<u64> {
        Ok(self.managers.read().await.len() as u64)
    }
}
