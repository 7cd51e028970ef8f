//! Study group domain models and repository trait.

mod model;
mod repository;

pub use model::{GroupId, StudyGroup, StudyGroupDraft};
pub use repository::StudyGroupRepository;
