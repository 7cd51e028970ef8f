//! Application layer for StudyHub.
//!
//! This crate provides the use case implementation a request adapter calls
//! into, coordinating boundary validation with the study group repository.

pub mod study_group_service;

pub use study_group_service::StudyGroupService;
