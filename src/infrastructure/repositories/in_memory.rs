use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    models::{NewUser, User},
    repositories::UserRepository,
    value_objects::UserId,
};

const FIRST_ID: UserId = UserId(1);

struct UserTable {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

impl UserTable {
    fn insert(&mut self, new_user: NewUser) -> User {
        let user = new_user.into_user(self.next_id, Utc::now());
        self.next_id = self.next_id.next();
        self.users.push(user.clone());
        user
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two startup records, John Doe (1) and Jane Smith (2).
    pub fn seeded() -> Self {
        let mut table = UserTable::default();
        for (name, email) in [
            ("John Doe", "john@example.com"),
            ("Jane Smith", "jane@example.com"),
        ] {
            if let Ok(new_user) = NewUser::new(name, email) {
                table.insert(new_user);
            }
        }

        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.users.clone())
    }

    async fn create(&self, new_user: NewUser) -> anyhow::Result<User> {
        let mut table = self.table.write().await;
        Ok(table.insert(new_user))
    }

    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let table = self.table.read().await;
        Ok(table.users.iter().find(|u| u.id == id).cloned())
    }

    async fn delete_by_id(&self, id: UserId) -> anyhow::Result<bool> {
        let mut table = self.table.write().await;
        match table.position(id) {
            Some(index) => {
                table.users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser::new(name, format!("{}@example.com", name.to_lowercase())).unwrap()
    }

    #[tokio::test]
    async fn seeded_store_starts_with_two_records() {
        let repo = InMemoryUserRepository::seeded();
        let users = repo.list().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, UserId(1));
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].id, UserId(2));
        assert_eq!(users[1].email, "jane@example.com");

        let created = repo.create(new_user("Alice")).await.unwrap();
        assert_eq!(created.id, UserId(3));
    }

    #[tokio::test]
    async fn empty_store_assigns_from_one() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.list().await.unwrap().is_empty());

        let first = repo.create(new_user("Alice")).await.unwrap();
        let second = repo.create(new_user("Bob")).await.unwrap();
        assert_eq!(first.id, UserId(1));
        assert_eq!(second.id, UserId(2));
    }

    #[tokio::test]
    async fn identifiers_are_never_reused_after_delete() {
        let repo = InMemoryUserRepository::seeded();
        let alice = repo.create(new_user("Alice")).await.unwrap();

        assert!(repo.delete_by_id(alice.id).await.unwrap());
        let bob = repo.create(new_user("Bob")).await.unwrap();

        assert_eq!(alice.id, UserId(3));
        assert_eq!(bob.id, UserId(4));
    }

    #[tokio::test]
    async fn delete_preserves_order_of_remaining_records() {
        let repo = InMemoryUserRepository::seeded();
        repo.create(new_user("Alice")).await.unwrap();

        assert!(repo.delete_by_id(UserId(2)).await.unwrap());

        let ids: Vec<_> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![UserId(1), UserId(3)]);
    }

    #[tokio::test]
    async fn missing_records_report_absence() {
        let repo = InMemoryUserRepository::seeded();

        assert!(repo.find_by_id(UserId(99)).await.unwrap().is_none());
        assert!(!repo.delete_by_id(UserId(99)).await.unwrap());
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_returns_a_copy() {
        let repo = InMemoryUserRepository::seeded();
        let found = repo.find_by_id(UserId(1)).await.unwrap().unwrap();

        repo.delete_by_id(UserId(1)).await.unwrap();

        assert_eq!(found.name, "John Doe");
        assert!(repo.find_by_id(UserId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let repo = InMemoryUserRepository::seeded();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(new_user(&format!("user{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id.0);
        }
        ids.sort_unstable();

        assert_eq!(ids, (3..35).collect::<Vec<_>>());
        assert_eq!(repo.list().await.unwrap().len(), 34);
    }
}
