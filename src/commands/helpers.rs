//! Helpers shared by commands that act on a signed-in user

use uninotas_core::error::Result;
use uninotas_core::identity::{IdentityProvider, User};
use uninotas_core::store::Store;

/// The signed-in user, or an authentication error carrying `message`
pub fn signed_in_user(store: &Store, message: &str) -> Result<User> {
    let session = store.identity().session()?;
    session.require_user(message).cloned()
}
