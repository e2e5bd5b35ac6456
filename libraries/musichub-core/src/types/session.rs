use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// Who is using the application right now
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserId),
}

impl Session {
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Authenticated(id) => Some(id),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Snapshot published by an identity provider
///
/// `resolved` stays false until the provider has determined the initial
/// session; consumers must not act on `session` before then.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub resolved: bool,
    pub session: Session,
}

impl AuthState {
    /// Initial state before the provider has resolved anything
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn resolved(session: Session) -> Self {
        Self {
            resolved: true,
            session,
        }
    }
}
