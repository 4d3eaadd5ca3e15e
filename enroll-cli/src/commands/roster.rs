//! `enroll roster <course-code>`

use anyhow::{Context, Result};
use clap::Args;

use enroll_core::{CourseCode, Registry};

/// Arguments for `enroll roster`.
#[derive(Args, Debug)]
pub struct RosterArgs {
    /// Course code (e.g. "C101").
    pub course: String,
}

impl RosterArgs {
    pub fn run(self, registry: &Registry) -> Result<()> {
        let code = CourseCode::from(self.course);
        let students = registry
            .roster_of(&code)
            .with_context(|| format!("cannot show roster for '{code}'"))?;
        let course = registry
            .find_course(&code)
            .with_context(|| format!("course '{code}' vanished"))?;

        println!(
            "{} {} ({}/{} seats taken)",
            course.code(),
            course.title(),
            course.roster().len(),
            course.capacity()
        );
        if students.is_empty() {
            println!("  (no students registered)");
        }
        for student in students {
            println!("  {}  {}", student.id(), student.name());
        }
        Ok(())
    }
}
