use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{NewUser, User, ROLE_USER};
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::modules::collaborator::application::ports::outgoing::CollaboratorLookup;
use crate::modules::collaborator::domain::entities::Collaborator;
use crate::shared::persistence::{
    CrudRepository, Document, PageRequest, PageResult, RepositoryError,
};
use crate::tests::support::stubs::fixed_clock;

//
// ──────────────────────────────────────────────────────────
// Document store
// ──────────────────────────────────────────────────────────
//

/// Shared in-memory store. Clones see the same records; `writes` counts
/// every save and delete that reached the store.
pub struct InMemoryRepository<T> {
    records: Arc<Mutex<BTreeMap<Uuid, T>>>,
    writes: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(BTreeMap::new())),
            writes: Arc::new(AtomicUsize::new(0)),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            writes: Arc::clone(&self.writes),
            fail_writes: Arc::clone(&self.fail_writes),
        }
    }
}

impl<T: Document> InMemoryRepository<T> {
    /// Stores a fixture directly; not counted as a write.
    pub fn seed(&self, record: T) -> T {
        let id = record.id().unwrap_or_else(Uuid::new_v4);
        let stored = record.with_id(id);
        self.records.lock().unwrap().insert(id, stored.clone());
        stored
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.records.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Every later save or delete fails with a database error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::DatabaseError(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: Document> CrudRepository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn find_page(&self, page: PageRequest) -> Result<PageResult<T>, RepositoryError> {
        let records = self.records.lock().unwrap();
        let items = records
            .values()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .cloned()
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total: records.len() as u64,
        })
    }

    async fn save(&self, record: T) -> Result<T, RepositoryError> {
        self.check_writable()?;
        self.writes.fetch_add(1, Ordering::SeqCst);

        let id = record.id().unwrap_or_else(Uuid::new_v4);
        let stored = record.with_id(id);
        self.records.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.check_writable()?;
        self.writes.fetch_add(1, Ordering::SeqCst);

        self.records.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CollaboratorLookup for InMemoryRepository<Collaborator> {
    async fn find_by_cv_id(&self, cv_id: Uuid) -> Result<Option<Collaborator>, RepositoryError> {
        let records = self.records.lock().unwrap();
        Ok(records.values().find(|c| c.cv == Some(cv_id)).cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Collaborator>, RepositoryError> {
        let records = self.records.lock().unwrap();
        Ok(records.values().find(|c| c.user == user_id).cloned())
    }
}

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<BTreeMap<Uuid, User>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryUserRepository {
    /// Stores an activated account with the given login; not counted as a write.
    pub fn seed_login(&self, login: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            login: login.to_lowercase(),
            password_hash: "seeded-hash".to_string(),
            first_name: Some("Old".to_string()),
            last_name: Some("Name".to_string()),
            email: Some(login.to_string()),
            activated: true,
            lang_key: Some("en".to_string()),
            authorities: [ROLE_USER.to_string()].into_iter().collect(),
            created_by: Some("system".to_string()),
            created_date: fixed_clock().now(),
            last_modified_date: None,
        };
        self.users.lock().unwrap().insert(user.id, user.clone());
        user
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    pub fn find_login(&self, login: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.login == login)
            .cloned()
    }

    pub fn count_with_login(&self, login: &str) -> usize {
        self.users
            .lock()
            .unwrap()
            .values()
            .filter(|u| u.login == login)
            .count()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.get(user_id))
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.find_login(&login.to_lowercase()))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        if self.find_login(&user.login).is_some() {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);

        let created = User {
            id: Uuid::new_v4(),
            login: user.login,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            activated: user.activated,
            lang_key: user.lang_key,
            authorities: user.authorities,
            created_by: user.created_by,
            created_date: user.created_date,
            last_modified_date: None,
        };
        self.users
            .lock()
            .unwrap()
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(UserRepositoryError::UserNotFound);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);

        users.insert(user.id, user.clone());
        Ok(user)
    }
}
