//! Enroll core library: course/student domain types, the enrollment
//! registry, seed loading, and errors.
//!
//! - [`types`] — newtypes and entities
//! - [`error`] — [`RegistryError`]
//! - [`registry`] — [`Registry`] with register / drop / lookup / listing
//! - [`seed`] — YAML seed catalog and the built-in reference seed

pub mod error;
pub mod registry;
pub mod seed;
pub mod types;

pub use error::RegistryError;
pub use registry::{DropOutcome, RegisterOutcome, Registry};
pub use seed::Seed;
pub use types::{Course, CourseCode, CourseSummary, EntityKind, Student, StudentId};
