use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire;

/// Store-assigned contact identifier.
pub type ContactId = i64;

/// A person in the contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: Option<String>,
    pub number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Apply a patch in place. A null `name` is skipped here; callers reject
    /// it before the patch reaches the store.
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(Some(name)) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(number) = patch.number {
            self.number = number;
        }
    }
}

/// Body of a create request. Every field is optional on the wire so that a
/// missing `name` surfaces as a constraint violation rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "wire::text")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "wire::text")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "wire::text")]
    pub number: Option<String>,
}

impl NewContact {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }
}

/// Body of an update request.
///
/// Outer `None` means "leave unchanged"; `Some(None)` is an explicit JSON
/// `null`, which clears `email`/`number` and is rejected for `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "::serde_with::rust::double_option::serialize",
        deserialize_with = "wire::patch_text"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "::serde_with::rust::double_option::serialize",
        deserialize_with = "wire::patch_text"
    )]
    pub email: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "::serde_with::rust::double_option::serialize",
        deserialize_with = "wire::patch_text"
    )]
    pub number: Option<Option<String>>,
}

impl ContactPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(Some(name.into())),
            ..Default::default()
        }
    }

    /// A patch that rewrites every field to match `contact`.
    pub fn full(contact: &Contact) -> Self {
        Self {
            name: Some(Some(contact.name.clone())),
            email: Some(contact.email.clone()),
            number: Some(contact.number.clone()),
        }
    }
}

/// Reply to `PUT /contactlist/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub updated: usize,
}

/// Reply to `DELETE /contactlist/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub deleted: usize,
}
