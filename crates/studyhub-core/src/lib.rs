pub mod config;
pub mod error;
pub mod study_group;
pub mod subject;
pub mod user;

// Re-export common error type
pub use error::StudyGroupError;
pub use study_group::{GroupId, StudyGroup, StudyGroupDraft, StudyGroupRepository};
pub use subject::Subject;
pub use user::{User, UserId};
