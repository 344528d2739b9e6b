use std::collections::HashMap;

use async_trait::async_trait;
use auth::PasswordHasher;

use crate::config::UserSeedConfig;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserRecord;
use crate::domain::user::models::Username;
use crate::domain::user::ports::CredentialStore;
use crate::user::errors::UserError;

/// Fixed user directory held in memory.
///
/// Built once before the server starts and only read afterwards.
pub struct InMemoryCredentialStore {
    users: HashMap<Username, UserRecord>,
}

impl InMemoryCredentialStore {
    /// Build a store from already hashed records.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Two records share a username
    pub fn new(records: Vec<UserRecord>) -> Result<Self, UserError> {
        let mut users = HashMap::with_capacity(records.len());

        for record in records {
            let username = record.username.clone();
            if users.insert(username.clone(), record).is_some() {
                return Err(UserError::UsernameAlreadyExists(username.to_string()));
            }
        }

        Ok(Self { users })
    }

    /// Validate and hash configured seeds into a store.
    ///
    /// # Errors
    /// * `InvalidUsername` / `InvalidEmail` - Seed fails validation
    /// * `Password` - Hashing failed
    /// * `UsernameAlreadyExists` - Two seeds share a username
    pub fn from_seeds(
        seeds: &[UserSeedConfig],
        hasher: &PasswordHasher,
    ) -> Result<Self, UserError> {
        let records = seeds
            .iter()
            .map(|seed| -> Result<UserRecord, UserError> {
                Ok(UserRecord {
                    username: Username::new(seed.username.clone())?,
                    email: EmailAddress::new(seed.email.clone())?,
                    password_hash: hasher.hash(&seed.password)?,
                    secret: seed.secret.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn lookup(&self, username: &Username) -> Result<Option<UserRecord>, UserError> {
        Ok(self.users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(username: &str, password: &str) -> UserSeedConfig {
        UserSeedConfig {
            username: username.to_string(),
            email: format!("{}@meetap.de", username),
            password: password.to_string(),
            secret: format!("secret of {}", username),
        }
    }

    fn username(name: &str) -> Username {
        Username::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_from_seeds_hashes_passwords() {
        let hasher = PasswordHasher::new();
        let store = InMemoryCredentialStore::from_seeds(&[seed("felix", "elm>javascript")], &hasher)
            .expect("Seeds should load");

        let record = store
            .lookup(&username("felix"))
            .await
            .unwrap()
            .expect("felix should exist");

        assert_ne!(record.password_hash, "elm>javascript");
        assert!(record.password_hash.starts_with("$argon2id$"));
        assert!(hasher.verify("elm>javascript", &record.password_hash));
        assert_eq!(record.secret, "secret of felix");
    }

    #[tokio::test]
    async fn test_lookup_is_exact_and_case_sensitive() {
        let store = InMemoryCredentialStore::new(vec![UserRecord {
            username: username("felix"),
            email: EmailAddress::new("felix@meetap.de".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            secret: "secret".to_string(),
        }])
        .unwrap();

        assert!(store.lookup(&username("felix")).await.unwrap().is_some());
        assert!(store.lookup(&username("Felix")).await.unwrap().is_none());
        assert!(store.lookup(&username("felix_")).await.unwrap().is_none());
    }

    #[test]
    fn test_duplicate_usernames_are_rejected() {
        let record = UserRecord {
            username: username("felix"),
            email: EmailAddress::new("felix@meetap.de".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            secret: "secret".to_string(),
        };

        let result = InMemoryCredentialStore::new(vec![record.clone(), record]);
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let hasher = PasswordHasher::new();

        let result = InMemoryCredentialStore::from_seeds(&[seed("f", "pw")], &hasher);
        assert!(matches!(result, Err(UserError::InvalidUsername(_))));
    }

    #[test]
    fn test_empty_directory() {
        let store = InMemoryCredentialStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
