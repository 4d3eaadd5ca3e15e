//! `enroll register <student> <course>` and `enroll drop <student> <course>`
//!
//! Nothing is persisted, so these act on the seeded catalog and are mostly
//! useful with a seed file or for checking whether a registration would fit.

use anyhow::{Context, Result};
use clap::Args;

use enroll_core::{CourseCode, Registry, StudentId};

use super::{drop_message, register_message};

/// Arguments shared by `enroll register` and `enroll drop`.
#[derive(Args, Debug)]
pub struct EnrollArgs {
    /// Student id (e.g. "S001").
    pub student: String,

    /// Course code (e.g. "C101").
    pub course: String,
}

impl EnrollArgs {
    fn ids(&self) -> (StudentId, CourseCode) {
        (
            StudentId::from(self.student.as_str()),
            CourseCode::from(self.course.as_str()),
        )
    }

    pub fn register(self, registry: &mut Registry) -> Result<()> {
        let (student, code) = self.ids();
        let result = registry.register_student_to_course(&student, &code);
        let message = register_message(&code, &result);
        result.with_context(|| format!("failed to register '{student}' for '{code}'"))?;

        println!("{message}");
        if let Some(course) = registry.find_course(&code) {
            println!("  {course}");
        }
        Ok(())
    }

    pub fn drop_course(self, registry: &mut Registry) -> Result<()> {
        let (student, code) = self.ids();
        let result = registry.remove_student_from_course(&student, &code);
        let message = drop_message(&result);
        result.with_context(|| format!("failed to drop '{student}' from '{code}'"))?;

        println!("{message}");
        Ok(())
    }
}
