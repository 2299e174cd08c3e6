//! User types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{Entity, EntityKind, Metadata};
use crate::validation::{check_email, require_text, ValidationResult};

/// A registered person. Owns places and writes reviews.
///
/// The password is stored but never serialized or printed. The place and
/// review lists are bookkeeping for the facade and stay out of responses too.
#[derive(Clone, Serialize, ToSchema)]
pub struct User {
    #[serde(flatten)]
    pub meta: Metadata,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    password: String,
    /// Places this user owns, in creation order
    #[serde(skip_serializing)]
    pub place_ids: Vec<String>,
    /// Reviews this user wrote, in creation order
    #[serde(skip_serializing)]
    pub review_ids: Vec<String>,
}

/// User creation request
#[derive(Clone, Deserialize, ToSchema)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Partial user update
#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl User {
    pub fn new(draft: NewUser) -> ValidationResult<Self> {
        require_text("first_name", &draft.first_name)?;
        require_text("last_name", &draft.last_name)?;
        check_email(&draft.email)?;
        require_text("password", &draft.password)?;

        Ok(Self {
            meta: Metadata::new(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            password: draft.password,
            place_ids: Vec::new(),
            review_ids: Vec::new(),
        })
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
    type Patch = UserPatch;

    fn meta(&self) -> &Metadata {
        &self.meta
    }

    fn apply(&mut self, patch: UserPatch) -> ValidationResult<()> {
        if let Some(first_name) = &patch.first_name {
            require_text("first_name", first_name)?;
        }
        if let Some(last_name) = &patch.last_name {
            require_text("last_name", last_name)?;
        }
        if let Some(email) = &patch.email {
            check_email(email)?;
        }
        if let Some(password) = &patch.password {
            require_text("password", password)?;
        }

        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        self.meta.touch();
        Ok(())
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("meta", &self.meta)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("place_ids", &self.place_ids)
            .field("review_ids", &self.review_ids)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for UserPatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPatch")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
