//! In-memory study group repository.
//!
//! Holds the full group collection behind a single `RwLock`, together with
//! two uniqueness indexes (name -> id, subject -> id) and the id counter.
//! Every mutating operation takes the write lock for its whole
//! check-and-apply sequence, so uniqueness checks and inserts are atomic
//! and readers never observe a torn write.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use studyhub_core::error::{Result, StudyGroupError};
use studyhub_core::study_group::{GroupId, StudyGroup, StudyGroupDraft, StudyGroupRepository};
use studyhub_core::subject::Subject;
use studyhub_core::user::{User, UserId};

/// Complete mutable state of the store.
///
/// The indexes are updated in the same critical section as the group map,
/// which keeps them consistent with it at every lock release.
#[derive(Default)]
struct StoreState {
    /// All live groups, keyed by id. Ids ascend in creation order, so
    /// iteration yields insertion order.
    groups: BTreeMap<GroupId, StudyGroup>,
    /// Name uniqueness index (case-sensitive exact match).
    by_name: HashMap<String, GroupId>,
    /// Subject uniqueness index (at most one live group per subject).
    by_subject: HashMap<Subject, GroupId>,
    /// Next id to assign.
    next_id: GroupId,
}

/// Thread-safe in-memory implementation of `StudyGroupRepository`.
///
/// Cloning is cheap and clones share the same underlying store.
#[derive(Clone)]
pub struct MemoryStudyGroupRepository {
    state: Arc<RwLock<StoreState>>,
}

impl Default for MemoryStudyGroupRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStudyGroupRepository {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                next_id: 1,
                ..StoreState::default()
            })),
        }
    }

    /// Number of groups currently stored.
    pub async fn len(&self) -> usize {
        self.state.read().await.groups.len()
    }

    /// Whether the store holds no groups.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.groups.is_empty()
    }
}

#[async_trait]
impl StudyGroupRepository for MemoryStudyGroupRepository {
    async fn create_study_group(&self, draft: StudyGroupDraft) -> Result<StudyGroup> {
        let mut state = self.state.write().await;

        if state.by_subject.contains_key(&draft.subject) {
            return Err(StudyGroupError::duplicate_subject(draft.subject));
        }
        if state.by_name.contains_key(&draft.name) {
            return Err(StudyGroupError::duplicate_name(draft.name));
        }

        let id = state.next_id;
        state.next_id += 1;

        let group = StudyGroup::from_draft(id, draft, Utc::now());
        state.by_name.insert(group.name.clone(), id);
        state.by_subject.insert(group.subject, id);
        state.groups.insert(id, group.clone());

        tracing::debug!(
            "Created study group {} ({}, {} initial members)",
            group.name,
            group.subject,
            group.member_count()
        );

        Ok(group)
    }

    async fn get_study_groups(&self) -> Result<Vec<StudyGroup>> {
        let state = self.state.read().await;
        Ok(state.groups.values().cloned().collect())
    }

    async fn search_study_groups(&self, subject: &str) -> Result<Vec<StudyGroup>> {
        // Strings outside the subject set simply match nothing.
        let Ok(subject) = Subject::from_str(subject) else {
            return Ok(Vec::new());
        };

        let state = self.state.read().await;
        Ok(state
            .groups
            .values()
            .filter(|group| group.subject == subject)
            .cloned()
            .collect())
    }

    async fn join_study_group(&self, group_id: GroupId, user: User) -> Result<()> {
        let mut state = self.state.write().await;
        let group = state
            .groups
            .get_mut(&group_id)
            .ok_or_else(|| StudyGroupError::group_not_found(group_id))?;

        let user_id = user.user_id;
        if group.add_member(user) {
            tracing::debug!("User {} joined study group {}", user_id, group_id);
        }
        Ok(())
    }

    async fn leave_study_group(&self, group_id: GroupId, user_id: UserId) -> Result<()> {
        let mut state = self.state.write().await;
        let group = state
            .groups
            .get_mut(&group_id)
            .ok_or_else(|| StudyGroupError::group_not_found(group_id))?;

        if group.remove_member(user_id) {
            tracing::debug!("User {} left study group {}", user_id, group_id);
        }
        Ok(())
    }

    async fn is_user_present_in_group(&self, group_id: GroupId, user_id: UserId) -> Result<bool> {
        let state = self.state.read().await;
        Ok(state
            .groups
            .get(&group_id)
            .is_some_and(|group| group.is_member(user_id)))
    }
}
