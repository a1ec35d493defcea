use chrono::Utc;

use super::hashing;
use super::{normalize_email, IdentityProvider, Session, User};
use crate::config::AuthConfig;
use crate::db::{Account, Database, SessionRow};
use crate::error::{Result, UninotasError};
use crate::id::UserId;

/// Accounts and session kept in the store database
pub struct LocalIdentity<'a> {
    db: &'a Database,
    config: &'a AuthConfig,
}

impl<'a> LocalIdentity<'a> {
    pub fn new(db: &'a Database, config: &'a AuthConfig) -> Self {
        Self { db, config }
    }

    fn user_from_account(account: Account) -> User {
        User {
            id: account.id,
            email: account.email,
            created_at: account.created_at,
        }
    }
}

impl IdentityProvider for LocalIdentity<'_> {
    fn session(&self) -> Result<Session> {
        match self.db.load_session()? {
            None => Ok(Session::SignedOut),
            Some(SessionRow::Guest) => Ok(Session::Guest),
            Some(SessionRow::User(id)) => match self.db.find_account(&id)? {
                Some(account) => Ok(Session::SignedIn(Self::user_from_account(account))),
                None => {
                    tracing::warn!(user = %id, "session points at a missing account");
                    Ok(Session::SignedOut)
                }
            },
        }
    }

    #[tracing::instrument(skip(self, password))]
    fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email)?;
        let account = self
            .db
            .find_account_by_email(&email)?
            .ok_or(UninotasError::InvalidCredentials)?;

        if !hashing::verify(&account.salt, password, &account.password_hash) {
            tracing::debug!("password mismatch");
            return Err(UninotasError::InvalidCredentials);
        }

        self.db.save_session(&SessionRow::User(account.id.clone()))?;
        Ok(Self::user_from_account(account))
    }

    #[tracing::instrument(skip(self, password))]
    fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email)?;

        if password.chars().count() < self.config.min_password_len {
            return Err(UninotasError::invalid_value(
                "password",
                format!(
                    "must be at least {} characters",
                    self.config.min_password_len
                ),
            ));
        }

        let salt = hashing::generate_salt();
        let account = Account {
            id: UserId::generate(),
            email,
            password_hash: hashing::digest(&salt, password),
            salt,
            created_at: Utc::now(),
        };

        self.db.insert_account(&account)?;
        self.db.save_session(&SessionRow::User(account.id.clone()))?;
        tracing::info!(user = %account.id, "account created");

        Ok(Self::user_from_account(account))
    }

    fn sign_out(&self) -> Result<()> {
        self.db.clear_session()
    }

    fn continue_as_guest(&self) -> Result<()> {
        self.db.save_session(&SessionRow::Guest)
    }
}
