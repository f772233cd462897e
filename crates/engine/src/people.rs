//! The module contains `Person` struct and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a [`Person`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub Uuid);

impl PersonId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A person.
///
/// A person is a friend in an account's private expense group. It carries no
/// behavior: the engine uses it as a key for balances and as a label in the
/// output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Informational only, never used for login.
    pub email: Option<String>,
    /// Username of the owning account.
    pub owner: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, owner: Option<&str>) -> Self {
        Self::with_id(PersonId::new(), name, owner)
    }

    pub fn with_id(id: PersonId, name: impl Into<String>, owner: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            owner: owner.map(ToString::to_string),
        }
    }

    /// Returns `true` when this person stands for the owning account itself.
    pub fn is_owner_self(&self) -> bool {
        self.owner
            .as_deref()
            .is_some_and(|owner| !owner.is_empty() && owner == self.name)
    }

    /// Label shown to the account owner: `Me (<username>)` for the self
    /// person, the plain name otherwise.
    pub fn display_name(&self) -> String {
        match self.owner.as_deref() {
            Some(owner) if self.is_owner_self() => format!("Me ({owner})"),
            _ => self.name.clone(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
