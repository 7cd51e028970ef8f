//! Study group use case implementation.
//!
//! `StudyGroupService` is the boundary a request adapter talks to. It owns
//! the adapter-side checks (name length, subject parsing, the join conflict
//! pre-check) and delegates all state and uniqueness decisions to the
//! repository. Errors carry the client-facing message via `Display` and the
//! transport status via `StudyGroupError::http_status`.

use std::str::FromStr;
use std::sync::Arc;

use studyhub_core::config::GroupPolicy;
use studyhub_core::error::{Result, StudyGroupError};
use studyhub_core::study_group::{GroupId, StudyGroup, StudyGroupDraft, StudyGroupRepository};
use studyhub_core::subject::Subject;
use studyhub_core::user::{User, UserId};
use studyhub_infrastructure::MemoryStudyGroupRepository;

/// Use case layer for study group operations.
pub struct StudyGroupService {
    /// Repository owning all study group state.
    repository: Arc<dyn StudyGroupRepository>,
    /// Validation policy for group creation.
    policy: GroupPolicy,
}

impl StudyGroupService {
    /// Creates a new `StudyGroupService` with the default policy.
    pub fn new(repository: Arc<dyn StudyGroupRepository>) -> Self {
        Self::with_policy(repository, GroupPolicy::default())
    }

    /// Creates a new `StudyGroupService` with a custom validation policy.
    pub fn with_policy(repository: Arc<dyn StudyGroupRepository>, policy: GroupPolicy) -> Self {
        Self { repository, policy }
    }

    /// Creates a service backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStudyGroupRepository::new()))
    }

    /// Creates a study group from raw adapter input.
    ///
    /// The name is trimmed and checked against the policy bounds, the
    /// subject string must parse to a recognized `Subject`, then the
    /// repository enforces name/subject uniqueness.
    pub async fn create_study_group(
        &self,
        name: &str,
        subject: &str,
        members: Vec<User>,
    ) -> Result<StudyGroup> {
        let name = self.policy.validate_name(name)?;
        let subject = Subject::from_str(subject).map_err(|_| {
            tracing::info!("Rejected study group creation with subject {:?}", subject);
            StudyGroupError::invalid_subject(subject)
        })?;

        self.repository
            .create_study_group(StudyGroupDraft::new(name, subject, members))
            .await
    }

    /// Returns all study groups.
    pub async fn get_study_groups(&self) -> Result<Vec<StudyGroup>> {
        self.repository.get_study_groups().await
    }

    /// Returns the groups matching the subject string exactly.
    pub async fn search_study_groups(&self, subject: &str) -> Result<Vec<StudyGroup>> {
        self.repository.search_study_groups(subject).await
    }

    /// Adds a user to a group.
    ///
    /// Fails with `AlreadyMember` when the user is already inside the group,
    /// checked before the repository mutation as the adapter contract
    /// requires.
    pub async fn join_study_group(&self, group_id: GroupId, user: User) -> Result<()> {
        if self
            .repository
            .is_user_present_in_group(group_id, user.user_id)
            .await?
        {
            return Err(StudyGroupError::AlreadyMember);
        }
        self.repository.join_study_group(group_id, user).await
    }

    /// Removes a user from a group.
    ///
    /// A missing group surfaces as `LeaveGroupNotFound`, whose message
    /// references both the user and the group.
    pub async fn leave_study_group(&self, group_id: GroupId, user_id: UserId) -> Result<()> {
        self.repository
            .leave_study_group(group_id, user_id)
            .await
            .map_err(|err| match err {
                StudyGroupError::GroupNotFound { group_id } => {
                    StudyGroupError::LeaveGroupNotFound { group_id, user_id }
                }
                other => other,
            })
    }

    /// Whether the user is currently a member of the group.
    pub async fn is_user_present_in_group(
        &self,
        group_id: GroupId,
        user_id: UserId,
    ) -> Result<bool> {
        self.repository
            .is_user_present_in_group(group_id, user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill() -> User {
        User::new(1, "Bill The Tester")
    }

    fn bobby() -> User {
        User::new(2, "Bobby")
    }

    #[tokio::test]
    async fn test_create_with_allowed_name_and_subject() {
        let service = StudyGroupService::in_memory();

        let group = service
            .create_study_group("Group", "Chemistry", vec![bill()])
            .await
            .unwrap();
        assert_eq!(group.name, "Group");
        assert_eq!(group.subject, Subject::Chemistry);

        let group = service
            .create_study_group("I suspect this is 30 char long", "Physics", vec![])
            .await
            .unwrap();
        assert_eq!(group.subject, Subject::Physics);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_name_length() {
        let service = StudyGroupService::in_memory();

        for name in ["Math", "Mathematics study group for Algebra", ""] {
            let err = service
                .create_study_group(name, "Math", vec![bill()])
                .await
                .unwrap_err();
            assert_eq!(err.http_status(), 400);
            assert_eq!(
                err.to_string(),
                "Group name must be between 5-30 characters."
            );
        }
        assert!(service.get_study_groups().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_subject() {
        let service = StudyGroupService::in_memory();

        let err = service
            .create_study_group("Non-existing group", "Mathz", vec![])
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert_eq!(
            err.to_string(),
            "Study group with Mathz subject can not be created as Mathz is invalid value."
        );
    }

    #[tokio::test]
    async fn test_second_group_of_same_subject_conflicts() {
        let service = StudyGroupService::in_memory();

        service
            .create_study_group("Group 1", "Math", vec![bill()])
            .await
            .unwrap();
        let err = service
            .create_study_group("Group 2", "Math", vec![bill()])
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), 409);
        assert_eq!(
            err.to_string(),
            "A study group by Math subject already exists."
        );
    }

    #[tokio::test]
    async fn test_second_group_of_same_name_conflicts() {
        let service = StudyGroupService::in_memory();

        service
            .create_study_group("Maths club", "Physics", vec![bill()])
            .await
            .unwrap();
        let err = service
            .create_study_group("Maths club", "Chemistry", vec![bill()])
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), 409);
        assert_eq!(
            err.to_string(),
            "A study group with Maths club name already exists."
        );
    }

    #[tokio::test]
    async fn test_join_when_already_member_conflicts() {
        let service = StudyGroupService::in_memory();
        let group = service
            .create_study_group("This is a chemistry group", "Chemistry", vec![bill()])
            .await
            .unwrap();

        let err = service.join_study_group(group.id, bill()).await.unwrap_err();
        assert_eq!(err, StudyGroupError::AlreadyMember);
        assert_eq!(err.http_status(), 409);
        assert_eq!(err.to_string(), "User is already inside this study group.");
    }

    #[tokio::test]
    async fn test_join_then_membership_visible() {
        let service = StudyGroupService::in_memory();
        let group = service
            .create_study_group("This is a physics group", "Physics", vec![bill()])
            .await
            .unwrap();

        service.join_study_group(group.id, bobby()).await.unwrap();
        assert!(service.is_user_present_in_group(group.id, 2).await.unwrap());
    }

    #[tokio::test]
    async fn test_leave_succeeds_and_keeps_group() {
        let service = StudyGroupService::in_memory();
        let group = service
            .create_study_group("This is a physics group", "Physics", vec![bill()])
            .await
            .unwrap();

        service.leave_study_group(group.id, 1).await.unwrap();

        let groups = service.get_study_groups().await.unwrap();
        assert_eq!(groups.len(), 1);
        assert!(!groups[0].is_member(1));
    }

    #[tokio::test]
    async fn test_leave_missing_group_references_user_and_group() {
        let service = StudyGroupService::in_memory();

        let err = service.leave_study_group(77, 1).await.unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert_eq!(
            err.to_string(),
            "Can not remove user 1 from group 77 as this group does not exist."
        );
    }

    #[tokio::test]
    async fn test_search_matches_exact_subject_only() {
        let service = StudyGroupService::in_memory();
        service
            .create_study_group("Group 1", "Physics", vec![bill()])
            .await
            .unwrap();
        service
            .create_study_group("Group 2", "Chemistry", vec![bill()])
            .await
            .unwrap();
        service
            .create_study_group("Group 3", "Math", vec![bill()])
            .await
            .unwrap();

        for subject in ["Physics", "Chemistry", "Math"] {
            let found = service.search_study_groups(subject).await.unwrap();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].subject.to_string(), subject);
        }

        assert!(service.search_study_groups("Phys").await.unwrap().is_empty());
        assert!(
            service
                .search_study_groups("PHySIcS")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_created_name_is_stored_trimmed() {
        let service = StudyGroupService::in_memory();
        let group = service
            .create_study_group("  Group 1  ", "Math", vec![])
            .await
            .unwrap();
        assert_eq!(group.name, "Group 1");

        // The uniqueness check sees the trimmed form as well.
        let err = service
            .create_study_group("Group 1", "Physics", vec![])
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }
}
