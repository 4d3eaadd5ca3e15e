//! Subcommands and the interactive shell.
//!
//! Outcome wording is shared here so one-shot commands and the shell report
//! register / drop results identically.

pub mod courses;
pub mod enroll;
pub mod roster;
pub mod shell;
pub mod students;

use enroll_core::{CourseCode, DropOutcome, RegisterOutcome, RegistryError};

pub const REGISTERED: &str = "Student registered successfully.";
pub const DROPPED: &str = "Student dropped the course successfully.";
pub const COURSE_FULL: &str = "Course is full.";
pub const INVALID_IDS: &str = "Invalid student ID or course code.";

/// Human-readable line for a registration attempt.
pub fn register_message(
    code: &CourseCode,
    result: &Result<RegisterOutcome, RegistryError>,
) -> String {
    match result {
        Ok(RegisterOutcome::Registered) => REGISTERED.to_string(),
        Ok(RegisterOutcome::AlreadyRegistered) => {
            format!("Student is already registered for {code}.")
        }
        Err(RegistryError::CourseFull { .. }) => COURSE_FULL.to_string(),
        Err(RegistryError::NotFound { .. }) => INVALID_IDS.to_string(),
        Err(other) => format!("Error: {other}"),
    }
}

/// Human-readable line for a drop attempt. Dropping a course the student
/// never took reads the same as a real drop.
pub fn drop_message(result: &Result<DropOutcome, RegistryError>) -> String {
    match result {
        Ok(DropOutcome::Dropped | DropOutcome::NotEnrolled) => DROPPED.to_string(),
        Err(RegistryError::NotFound { .. }) => INVALID_IDS.to_string(),
        Err(other) => format!("Error: {other}"),
    }
}
