use crate::domain::models::rows::TeacherRow;
use serde::{Deserialize, Serialize};

/// A schedulable resource: one grid row per teacher.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: String,
    pub name: String,
}

impl Teacher {
    pub fn from_row(row: &TeacherRow) -> Self {
        Self { id: row.id.clone(), name: row.name.clone() }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Parent,
    Student,
    Teacher,
}

impl Role {
    /// Sessions are locked for everyone but admins; teachers manage only
    /// their own availability blocks.
    pub fn can_edit_sessions(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Explicit caller identity, threaded into any operation that needs the
/// current user. Replaces the ambient auth store of the original UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: String,
    pub role: Role,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self { user_id: user_id.into(), role }
    }
}
