//! Fabricated user record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::EMAIL_DOMAIN;

/// A simulated user, derived entirely from its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl UserRecord {
    /// Build the record for `id`. Callers are responsible for validating `id`.
    pub(crate) fn for_id(id: i64) -> Self {
        Self {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@{EMAIL_DOMAIN}"),
            active: true,
        }
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id: {}, name: {:?}, email: {:?}, active: {}}}",
            self.id, self.name, self.email, self.active
        )
    }
}
