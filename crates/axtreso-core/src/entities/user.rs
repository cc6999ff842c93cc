//! User entity - an account that signs in through one of two mechanisms

use std::fmt;

use chrono::{DateTime, Utc};

use crate::value_objects::Role;

/// How a user proves their identity
///
/// Administrators sign in through the external identity provider; salon
/// managers sign in with email and password. Exactly one applies per account.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    External { open_id: String },
    Password { password_hash: String },
}

impl Credential {
    /// Stored discriminator
    #[must_use]
    pub fn login_method(&self) -> &'static str {
        match self {
            Self::External { .. } => "external",
            Self::Password { .. } => "password",
        }
    }

    #[must_use]
    pub fn open_id(&self) -> Option<&str> {
        match self {
            Self::External { open_id } => Some(open_id),
            Self::Password { .. } => None,
        }
    }

    #[must_use]
    pub fn password_hash(&self) -> Option<&str> {
        match self {
            Self::External { .. } => None,
            Self::Password { password_hash } => Some(password_hash),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External { open_id } => f
                .debug_struct("External")
                .field("open_id", open_id)
                .finish(),
            Self::Password { .. } => f
                .debug_struct("Password")
                .field("password_hash", &"<redacted>")
                .finish(),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Role,
    pub credential: Credential,
    pub last_signed_in: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    #[inline]
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }

    /// Display name, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("")
    }
}

/// Values needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Role,
    pub credential: Credential,
}
