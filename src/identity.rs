use chrono::Utc;
use rusqlite::Result as SqlResult;
use uuid::Uuid;

use crate::storage::LocalStore;
use crate::storage::local_store::{USER_ID_KEY, USERNAME_KEY};

/// Shown as the sender name until the user picks one.
pub const PLACEHOLDER_NAME: &str = "Guest";

/// The local user of this installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub username: Option<String>,
}

impl Identity {
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(PLACEHOLDER_NAME)
    }

    pub fn needs_name_prompt(&self) -> bool {
        self.username.is_none()
    }
}

/// Load the persisted identity, generating and storing a user id on first run.
pub fn resolve_identity(store: &LocalStore) -> SqlResult<Identity> {
    let user_id = match store.get(USER_ID_KEY)? {
        Some(user_id) => user_id,
        None => {
            let user_id = generate_user_id();
            store.set(USER_ID_KEY, &user_id)?;
            log::info!("Generated new user id {user_id}");
            user_id
        }
    };

    let username = store
        .get(USERNAME_KEY)?
        .filter(|name| !name.trim().is_empty());

    Ok(Identity { user_id, username })
}

/// Persist a new display name. Blank input is ignored and yields `Ok(None)`.
pub fn set_display_name(
    store: &LocalStore,
    identity: &mut Identity,
    input: &str,
) -> SqlResult<Option<String>> {
    let name = input.trim();
    if name.is_empty() {
        return Ok(None);
    }

    store.set(USERNAME_KEY, name)?;
    identity.username = Some(name.to_string());
    Ok(Some(name.to_string()))
}

/// `user_<unix millis>_<9 random chars>`
fn generate_user_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("user_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}
