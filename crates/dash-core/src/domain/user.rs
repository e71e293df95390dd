// ============================================================================
// Dash Core - User Entity
// File: crates/dash-core/src/domain/user.rs
// Description: Admin-managed user with role and status
// ============================================================================

use chrono::NaiveDate;
use dash_shared::EntityId;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::{Validate, ValidationError};

use crate::store::Record;
use crate::validation::{field_error, is_blank, is_valid_email, FieldErrors};

/// User role enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Manager,
    User,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Manager, UserRole::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::User => "User",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Admin" => Some(UserRole::Admin),
            "Manager" => Some(UserRole::Manager),
            "User" => Some(UserRole::User),
            _ => None,
        }
    }
}

/// User status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Active" => Some(UserStatus::Active),
            "Inactive" => Some(UserStatus::Inactive),
            _ => None,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub join_date: String,
    pub status: UserStatus,
}

/// Everything a new user needs except the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub join_date: String,
}

/// Fields to overwrite on an existing user; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl Record for User {
    type Draft = NewUser;
    type Changes = UserChanges;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            join_date: draft.join_date,
            status: draft.status,
        }
    }

    fn merge(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
    }
}

/// Join dates are stored the way the table shows them, e.g. `Nov 15, 2024`.
pub fn format_join_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Raw user form as submitted from the page or the JSON API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserForm {
    /// Empty when the form creates a user.
    pub id: String,

    #[validate(custom(function = "validate_user_name"))]
    pub name: String,

    #[validate(custom(function = "validate_user_email"))]
    pub email: String,

    #[validate(custom(function = "validate_user_role"))]
    pub role: String,

    pub status: Option<String>,
}

const USER_FIELD_ORDER: [&str; 3] = ["name", "email", "role"];

fn validate_user_name(name: &str) -> Result<(), ValidationError> {
    if is_blank(name) {
        return Err(field_error("required", "Name is required"));
    }
    Ok(())
}

fn validate_user_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(field_error("required", "Email is required"));
    }
    if !is_valid_email(email) {
        return Err(field_error("email", "Invalid email format"));
    }
    Ok(())
}

fn validate_user_role(role: &str) -> Result<(), ValidationError> {
    if UserRole::parse(role).is_none() {
        return Err(field_error("required", "Role is required"));
    }
    Ok(())
}

/// A user form that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: Option<UserStatus>,
}

impl UserForm {
    /// Pre-filled form for the edit modal.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            status: Some(user.status.as_str().to_string()),
        }
    }

    /// Target id of an edit form. `None` means the form creates a record.
    pub fn target_id(&self) -> Option<EntityId> {
        self.id.trim().parse().ok()
    }

    /// Runs every rule and returns either the typed input or all failures.
    pub fn parse(&self) -> Result<UserInput, FieldErrors> {
        if let Err(errors) = self.validate() {
            return Err(FieldErrors::from_validation(&errors, &USER_FIELD_ORDER));
        }

        let role = UserRole::parse(&self.role)
            .ok_or_else(|| single_error("role", "Role is required"))?;
        let status = self
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| {
                let parsed = UserStatus::parse(s);
                if parsed.is_none() {
                    debug!("Ignoring unknown user status: {}", s);
                }
                parsed
            });

        Ok(UserInput {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role,
            status,
        })
    }
}

fn single_error(field: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.push(field, message);
    errors
}

impl UserInput {
    pub fn into_new_user(self, join_date: String) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status.unwrap_or_default(),
            join_date,
        }
    }

    pub fn into_changes(self) -> UserChanges {
        UserChanges {
            name: Some(self.name),
            email: Some(self.email),
            role: Some(self.role),
            status: self.status,
        }
    }
}
