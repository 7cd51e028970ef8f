//! Study group repository trait.

use async_trait::async_trait;

use super::model::{GroupId, StudyGroup, StudyGroupDraft};
use crate::error::Result;
use crate::user::{User, UserId};

/// Repository trait owning all study group state.
///
/// Implementations guarantee the uniqueness and membership invariants
/// against arbitrary call sequences: group names and subjects stay unique
/// among live groups, member sets never hold duplicate user ids, and no
/// caller ever observes a partially applied mutation.
#[async_trait]
pub trait StudyGroupRepository: Send + Sync {
    /// Stores a new study group built from the draft.
    ///
    /// Assigns a fresh id, stamps the creation time, and returns the stored
    /// group. Fails with `DuplicateSubject` or `DuplicateName` when another
    /// live group already holds the subject or the exact name.
    async fn create_study_group(&self, draft: StudyGroupDraft) -> Result<StudyGroup>;

    /// Returns all groups currently stored, in insertion order.
    async fn get_study_groups(&self) -> Result<Vec<StudyGroup>>;

    /// Returns the groups whose subject name equals `subject` exactly.
    ///
    /// Case-sensitive; a string outside the subject set yields an empty
    /// list, never an error.
    async fn search_study_groups(&self, subject: &str) -> Result<Vec<StudyGroup>>;

    /// Adds a user to a group's member set.
    ///
    /// Fails with `GroupNotFound` when the group does not exist. Adding an
    /// already-present member is a no-op.
    async fn join_study_group(&self, group_id: GroupId, user: User) -> Result<()>;

    /// Removes a user from a group's member set.
    ///
    /// Fails with `GroupNotFound` when the group does not exist. Removing an
    /// absent member is a no-op, and the group survives even when the last
    /// member leaves.
    async fn leave_study_group(&self, group_id: GroupId, user_id: UserId) -> Result<()>;

    /// Whether the user is currently a member of the group.
    ///
    /// Returns `false` (not an error) when the group does not exist.
    async fn is_user_present_in_group(&self, group_id: GroupId, user_id: UserId) -> Result<bool>;
}
