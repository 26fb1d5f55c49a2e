use email_address::EmailAddress;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

use crate::modules::auth::application::domain::entities::{
    EmbeddedUser, NewUser, User, DEFAULT_LANG_KEY, ROLE_USER, SYSTEM_ACCOUNT,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserRepository, UserRepositoryError,
};
use crate::shared::clock::Clock;
use crate::shared::crud::UseCaseError;

pub const USER_REQUIRED: &str = "USER_REQUIRED";
pub const USER_ID_NULL: &str = "USER_ID_NULL";
pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
pub const PASSWORD_REQUIRED: &str = "PASSWORD_REQUIRED";
pub const LOGIN_ALREADY_USED: &str = "LOGIN_ALREADY_USED";

impl From<UserRepositoryError> for UseCaseError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserAlreadyExists => {
                UseCaseError::invalid(LOGIN_ALREADY_USED, "Login name already used")
            }
            UserRepositoryError::UserNotFound => UseCaseError::not_found("user"),
            other => UseCaseError::StoreFailure(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Validated input
// ──────────────────────────────────────────────────────────
//

/// Embedded user details that passed validation for account creation.
#[derive(Clone, PartialEq, Eq)]
pub struct NewIdentity {
    email: String,
    password: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl NewIdentity {
    pub fn from_embedded(user: Option<EmbeddedUser>) -> Result<Self, UseCaseError> {
        let user = user.ok_or_else(|| {
            UseCaseError::invalid(USER_REQUIRED, "An embedded user is required")
        })?;

        let email = user
            .email
            .filter(|e| EmailAddress::is_valid(e))
            .ok_or_else(|| UseCaseError::invalid(INVALID_EMAIL, "A valid email is required"))?;

        let password = user
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| UseCaseError::invalid(PASSWORD_REQUIRED, "A password is required"))?;

        Ok(Self {
            email,
            password,
            first_name: user.first_name,
            last_name: user.last_name,
        })
    }

    pub fn login(&self) -> String {
        self.email.to_lowercase()
    }
}

impl std::fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewIdentity")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

//
// ──────────────────────────────────────────────────────────
// Orchestrator
// ──────────────────────────────────────────────────────────
//

/// Creates and maintains the User account behind a Collaborator or HumanResource.
#[derive(Clone)]
pub struct UserProvisioner {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
}

impl UserProvisioner {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            hasher,
            clock,
        }
    }

    /// Persists a fresh activated account with login = lower-cased email and
    /// the `ROLE_USER` authority.
    pub async fn provision(&self, identity: NewIdentity) -> Result<User, UseCaseError> {
        let login = identity.login();
        debug!("Provisioning user for login {}", login);

        if self.users.find_by_login(&login).await?.is_some() {
            return Err(UseCaseError::invalid(
                LOGIN_ALREADY_USED,
                "Login name already used",
            ));
        }

        let password_hash = self
            .hasher
            .hash_password(&identity.password)
            .await
            .map_err(|e| UseCaseError::HashingFailed(e.to_string()))?;

        let new_user = NewUser {
            login,
            password_hash,
            first_name: identity.first_name,
            last_name: identity.last_name,
            email: Some(identity.email),
            activated: true,
            lang_key: Some(DEFAULT_LANG_KEY.to_string()),
            authorities: BTreeSet::from([ROLE_USER.to_string()]),
            created_by: Some(SYSTEM_ACCOUNT.to_string()),
            created_date: self.clock.now(),
        };

        let created = self.users.create_user(new_user).await?;
        info!("Created user {} with login {}", created.id, created.login);

        Ok(created)
    }

    /// Resolves the stored account referenced by an embedded user.
    pub async fn find_existing(&self, embedded: &EmbeddedUser) -> Result<User, UseCaseError> {
        let user_id = embedded.id.ok_or_else(|| {
            UseCaseError::invalid(USER_ID_NULL, "The embedded user must carry its id")
        })?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(UseCaseError::not_found("user"))
    }

    /// Overwrites first and last name from the payload. Login, email and
    /// credential are left alone.
    pub async fn rename(&self, user: User, embedded: &EmbeddedUser) -> Result<User, UseCaseError> {
        let renamed = User {
            first_name: embedded.first_name.clone(),
            last_name: embedded.last_name.clone(),
            last_modified_date: Some(self.clock.now()),
            ..user
        };

        Ok(self.users.update_user(renamed).await?)
    }
}
