//! Local email/password accounts
//!
//! Passwords are stored as bcrypt hashes. The session lives in memory only;
//! every process start begins signed out.

use crate::error::StorageError;
use crate::users;
use async_trait::async_trait;
use musichub_core::{AuthState, HubError, IdentityProvider, Result, Session, UserId};
use sqlx::SqlitePool;
use tokio::sync::watch;
use tracing::{info, warn};

/// Shortest accepted password
pub const MIN_PASSWORD_LEN: usize = 6;

const INVALID_EMAIL: &str = "The email address is not valid.";
const WEAK_PASSWORD: &str = "The password is too weak. It must be at least 6 characters long.";
const EMAIL_IN_USE: &str = "This email address is already in use by another account.";
const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";

/// Identity provider backed by the `users` table
pub struct LocalIdentity {
    pool: SqlitePool,
    state: watch::Sender<AuthState>,
    hash_cost: u32,
}

impl LocalIdentity {
    /// Create a provider in the unresolved state; call [`resolve`](Self::resolve)
    /// once the application is ready to accept sign-ins.
    pub fn new(pool: SqlitePool) -> Self {
        let (state, _) = watch::channel(AuthState::pending());
        Self {
            pool,
            state,
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Override the bcrypt cost (lower costs only make sense in tests)
    #[must_use]
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Finish startup: no remembered session, so resolve to signed out
    pub fn resolve(&self) {
        if !self.state.borrow().resolved {
            self.publish(Session::Anonymous);
        }
    }

    fn publish(&self, session: Session) {
        self.state.send_replace(AuthState::resolved(session));
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentity {
    fn current(&self) -> AuthState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserId> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(HubError::auth(INVALID_EMAIL));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(HubError::auth(WEAK_PASSWORD));
        }

        let password_hash = bcrypt::hash(password, self.hash_cost)
            .map_err(|e| HubError::Other(format!("Failed to hash password: {e}")))?;

        let user_id = match users::create(&self.pool, &email, &password_hash).await {
            Ok(id) => id,
            Err(StorageError::Duplicate(_)) => return Err(HubError::auth(EMAIL_IN_USE)),
            Err(e) => return Err(e.into()),
        };

        info!(user_id = %user_id, "Account created");
        self.publish(Session::Authenticated(user_id.clone()));
        Ok(user_id)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(HubError::auth(INVALID_EMAIL));
        }

        let Some(user) = users::find_by_email(&self.pool, &email).await? else {
            return Err(HubError::auth(INVALID_CREDENTIALS));
        };

        let valid = bcrypt::verify(password, &user.password_hash).unwrap_or_else(|e| {
            warn!(user_id = %user.id, error = %e, "Stored password hash is unreadable");
            false
        });
        if !valid {
            return Err(HubError::auth(INVALID_CREDENTIALS));
        }

        info!(user_id = %user.id, "Signed in");
        self.publish(Session::Authenticated(user.id.clone()));
        Ok(user.id)
    }

    async fn sign_out(&self) -> Result<()> {
        info!("Signed out");
        self.publish(Session::Anonymous);
        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'))
}
