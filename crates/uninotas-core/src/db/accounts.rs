//! Local accounts and the current-session slot

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use super::{parse_timestamp, Database};
use crate::error::{Result, UninotasError};
use crate::id::UserId;

/// A stored local account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub created_at: DateTime<Utc>,
}

/// Contents of the session slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRow {
    Guest,
    User(UserId),
}

type AccountColumns = (String, String, String, String, String);

fn account_from_columns(cols: AccountColumns) -> Result<Account> {
    let (id, email, password_hash, salt, created_at) = cols;
    Ok(Account {
        id: UserId::parse(&id)?,
        email,
        password_hash,
        salt,
        created_at: parse_timestamp("created_at", &created_at)?,
    })
}

impl Database {
    /// Insert a new account. Fails if the email is taken.
    pub fn insert_account(&self, account: &Account) -> Result<()> {
        if self.find_account_by_email(&account.email)?.is_some() {
            return Err(UninotasError::already_exists("account", &account.email));
        }

        self.conn.execute(
            "INSERT INTO users (id, email, password_hash, salt, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                account.id.as_str(),
                account.email,
                account.password_hash,
                account.salt,
                account.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        self.conn
            .query_row(
                "SELECT id, email, password_hash, salt, created_at FROM users WHERE email = ?1",
                [email],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
            )
            .optional()?
            .map(account_from_columns)
            .transpose()
    }

    pub fn find_account(&self, id: &UserId) -> Result<Option<Account>> {
        self.conn
            .query_row(
                "SELECT id, email, password_hash, salt, created_at FROM users WHERE id = ?1",
                [id.as_str()],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
            )
            .optional()?
            .map(account_from_columns)
            .transpose()
    }

    /// Read the session slot
    pub fn load_session(&self) -> Result<Option<SessionRow>> {
        let row: Option<(String, Option<String>)> = self
            .conn
            .query_row("SELECT kind, user_id FROM session WHERE slot = 1", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .optional()?;

        match row {
            None => Ok(None),
            Some((kind, _)) if kind == "guest" => Ok(Some(SessionRow::Guest)),
            Some((kind, Some(user_id))) if kind == "user" => {
                Ok(Some(SessionRow::User(UserId::parse(&user_id)?)))
            }
            Some((kind, user_id)) => Err(UninotasError::InvalidStore {
                reason: format!("bad session row: kind={} user_id={:?}", kind, user_id),
            }),
        }
    }

    /// Replace the session slot
    pub fn save_session(&self, session: &SessionRow) -> Result<()> {
        let (kind, user_id) = match session {
            SessionRow::Guest => ("guest", None),
            SessionRow::User(id) => ("user", Some(id.as_str())),
        };

        self.conn.execute(
            "INSERT OR REPLACE INTO session (slot, kind, user_id, started_at)
             VALUES (1, ?1, ?2, ?3)",
            params![kind, user_id, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Empty the session slot
    pub fn clear_session(&self) -> Result<()> {
        self.conn.execute("DELETE FROM session", [])?;
        Ok(())
    }
}
