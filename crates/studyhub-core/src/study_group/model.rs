//! Study group domain models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::subject::Subject;
use crate::user::{User, UserId};

/// Identifier for a study group, assigned by the store at creation.
pub type GroupId = i32;

/// A creation candidate for a study group.
///
/// The store assigns the `id` and stamps `created_at`; the draft carries
/// everything the caller decides: the (already validated) name, the subject
/// and the initial member list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGroupDraft {
    /// Group name, 5-30 characters after trimming.
    pub name: String,
    /// Topic the group is dedicated to.
    pub subject: Subject,
    /// Users the group starts out with. Duplicate ids collapse to one member.
    #[serde(default)]
    pub members: Vec<User>,
}

impl StudyGroupDraft {
    /// Creates a draft with an initial member list.
    pub fn new(name: impl Into<String>, subject: Subject, members: Vec<User>) -> Self {
        Self {
            name: name.into(),
            subject,
            members,
        }
    }

    /// Creates a draft with no initial members.
    pub fn empty(name: impl Into<String>, subject: Subject) -> Self {
        Self::new(name, subject, Vec::new())
    }
}

/// A named, subject-tagged collection of members with a creation timestamp.
///
/// Membership is a set keyed by user id, so joining twice or leaving twice
/// is naturally a no-op. The set serializes as a plain user list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGroup {
    /// Unique identifier, stable for the store's lifetime.
    pub id: GroupId,
    /// Unique group name (case-sensitive exact match).
    pub name: String,
    /// Unique subject among all live groups.
    pub subject: Subject,
    /// Creation timestamp, set once by the store and never mutated.
    pub created_at: DateTime<Utc>,
    /// Current members, keyed by user id.
    #[serde(
        serialize_with = "serialize_members",
        deserialize_with = "deserialize_members"
    )]
    members: BTreeMap<UserId, User>,
}

impl StudyGroup {
    /// Creates a group record from a draft plus the store-assigned fields.
    pub fn from_draft(id: GroupId, draft: StudyGroupDraft, created_at: DateTime<Utc>) -> Self {
        let members = draft
            .members
            .into_iter()
            .map(|user| (user.user_id, user))
            .collect();
        Self {
            id,
            name: draft.name,
            subject: draft.subject,
            created_at,
            members,
        }
    }

    /// Adds a user to the member set.
    ///
    /// Returns `false` when a member with the same id is already present,
    /// in which case the existing entry is left untouched.
    pub fn add_member(&mut self, user: User) -> bool {
        use std::collections::btree_map::Entry;
        match self.members.entry(user.user_id) {
            Entry::Vacant(slot) => {
                slot.insert(user);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Removes a user from the member set.
    ///
    /// Returns `false` when no member with that id was present.
    pub fn remove_member(&mut self, user_id: UserId) -> bool {
        self.members.remove(&user_id).is_some()
    }

    /// Whether a user with this id is currently a member.
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.members.contains_key(&user_id)
    }

    /// The current members, ordered by user id.
    pub fn members(&self) -> impl Iterator<Item = &User> {
        self.members.values()
    }

    /// Number of current members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

fn serialize_members<S>(members: &BTreeMap<UserId, User>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(members.values())
}

fn deserialize_members<'de, D>(deserializer: D) -> Result<BTreeMap<UserId, User>, D::Error>
where
    D: Deserializer<'de>,
{
    let users = Vec::<User>::deserialize(deserializer)?;
    Ok(users.into_iter().map(|user| (user.user_id, user)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_with(members: Vec<User>) -> StudyGroup {
        StudyGroup::from_draft(
            1,
            StudyGroupDraft::new("Group 1", Subject::Physics, members),
            Utc::now(),
        )
    }

    #[test]
    fn test_from_draft_collapses_duplicate_initial_members() {
        let group = group_with(vec![
            User::new(1, "Bill The Tester"),
            User::new(1, "Bill again"),
            User::new(2, "Bobby"),
        ]);
        assert_eq!(group.member_count(), 2);
        assert!(group.is_member(1));
        assert!(group.is_member(2));
    }

    #[test]
    fn test_add_member_is_idempotent() {
        let mut group = group_with(Vec::new());
        assert!(group.add_member(User::new(5, "Bobby")));
        assert!(!group.add_member(User::new(5, "Bobby")));
        assert_eq!(group.member_count(), 1);
    }

    #[test]
    fn test_remove_absent_member_is_noop() {
        let mut group = group_with(vec![User::new(1, "Bill The Tester")]);
        assert!(!group.remove_member(99));
        assert!(group.remove_member(1));
        assert_eq!(group.member_count(), 0);
    }

    #[test]
    fn test_members_serialize_as_list() {
        let group = group_with(vec![User::new(2, "Bobby"), User::new(1, "Bill")]);
        let json = serde_json::to_value(&group).unwrap();
        let members = json.get("members").unwrap().as_array().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].get("userId").unwrap(), 1);
        assert_eq!(members[1].get("userId").unwrap(), 2);

        let parsed: StudyGroup = serde_json::from_value(json).unwrap();
        assert!(parsed.is_member(1));
        assert!(parsed.is_member(2));
    }
}
