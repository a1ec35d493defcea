//! Identity capability
//!
//! Commands ask an [`IdentityProvider`] who is using the tool; the grade
//! engine never does. [`LocalIdentity`] keeps accounts and the current
//! session in the store database.

mod local;
mod hashing;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, UninotasError};
use crate::id::UserId;

pub use local::LocalIdentity;

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Who is at the keyboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum Session {
    SignedOut,
    Guest,
    SignedIn(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    /// The signed-in user, or an `AuthenticationRequired` error with `message`
    pub fn require_user(&self, message: &str) -> Result<&User> {
        self.user()
            .ok_or_else(|| UninotasError::AuthenticationRequired(message.to_string()))
    }
}

/// Sign-in, sign-up and session management
pub trait IdentityProvider {
    /// The full session state
    fn session(&self) -> Result<Session>;

    /// The signed-in user, if any. Guests have no user.
    fn current_user(&self) -> Result<Option<User>> {
        Ok(self.session()?.user().cloned())
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<User>;

    fn sign_up(&self, email: &str, password: &str) -> Result<User>;

    fn sign_out(&self) -> Result<()>;

    fn continue_as_guest(&self) -> Result<()>;
}

/// Trim and lowercase an email, rejecting obviously malformed input
pub fn normalize_email(raw: &str) -> Result<String> {
    let email = raw.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(email)
        }
        _ => Err(UninotasError::invalid_value("email", raw)),
    }
}
