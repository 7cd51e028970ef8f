//! Error types for the StudyHub application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::study_group::GroupId;
use crate::subject::Subject;
use crate::user::UserId;

/// A shared error type for the entire StudyHub application.
///
/// Variants carry enough context that `Display` renders the exact
/// human-readable messages the request adapter returns to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudyGroupError {
    /// Group name failed the length policy after trimming.
    #[error("Group name must be between {min}-{max} characters.")]
    InvalidName { min: usize, max: usize },

    /// Subject string is not one of the recognized `Subject` values.
    #[error("Study group with {subject} subject can not be created as {subject} is invalid value.")]
    InvalidSubject { subject: String },

    /// Another live group already has this subject.
    #[error("A study group by {subject} subject already exists.")]
    DuplicateSubject { subject: Subject },

    /// Another live group already has this exact name.
    #[error("A study group with {name} name already exists.")]
    DuplicateName { name: String },

    /// The user is already a member of the group they tried to join.
    #[error("User is already inside this study group.")]
    AlreadyMember,

    /// No group with this id exists.
    #[error("Study group {group_id} does not exist.")]
    GroupNotFound { group_id: GroupId },

    /// Leave was attempted against a group that does not exist.
    #[error("Can not remove user {user_id} from group {group_id} as this group does not exist.")]
    LeaveGroupNotFound { group_id: GroupId, user_id: UserId },
}

impl StudyGroupError {
    /// Creates an InvalidName error carrying the policy bounds.
    pub fn invalid_name(min: usize, max: usize) -> Self {
        Self::InvalidName { min, max }
    }

    /// Creates an InvalidSubject error for an unrecognized subject string.
    pub fn invalid_subject(subject: impl Into<String>) -> Self {
        Self::InvalidSubject {
            subject: subject.into(),
        }
    }

    /// Creates a DuplicateSubject error.
    pub fn duplicate_subject(subject: Subject) -> Self {
        Self::DuplicateSubject { subject }
    }

    /// Creates a DuplicateName error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Creates a GroupNotFound error.
    pub fn group_not_found(group_id: GroupId) -> Self {
        Self::GroupNotFound { group_id }
    }

    /// Check if this is a conflict error (duplicate name/subject, member already present).
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateSubject { .. } | Self::DuplicateName { .. } | Self::AlreadyMember
        )
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GroupNotFound { .. } | Self::LeaveGroupNotFound { .. }
        )
    }

    /// Check if this is an input validation error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidName { .. } | Self::InvalidSubject { .. })
    }

    /// The HTTP status the request adapter maps this error to.
    ///
    /// Leave against a missing group is contractually a 400 (the adapter
    /// treats it as a bad request referencing user and group), while a plain
    /// group lookup miss is a 404.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidName { .. } | Self::InvalidSubject { .. } => 400,
            Self::DuplicateSubject { .. } | Self::DuplicateName { .. } | Self::AlreadyMember => 409,
            Self::GroupNotFound { .. } => 404,
            Self::LeaveGroupNotFound { .. } => 400,
        }
    }
}

/// A type alias for `Result<T, StudyGroupError>`.
pub type Result<T> = std::result::Result<T, StudyGroupError>;
