pub mod memory_study_group_repository;

pub use crate::memory_study_group_repository::MemoryStudyGroupRepository;
