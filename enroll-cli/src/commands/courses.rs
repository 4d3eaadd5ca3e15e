//! `enroll courses` — catalog listing with available seats.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use enroll_core::{CourseSummary, Registry};

/// Arguments for `enroll courses`.
#[derive(Args, Debug)]
pub struct CoursesArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct CourseTableRow {
    #[tabled(rename = "code")]
    code: String,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "schedule")]
    schedule: String,
    #[tabled(rename = "capacity")]
    capacity: u32,
    #[tabled(rename = "available")]
    available: u32,
}

impl CoursesArgs {
    pub fn run(self, registry: &Registry) -> Result<()> {
        let courses = registry.list_courses();
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&courses).context("failed to serialize courses JSON")?
            );
            return Ok(());
        }

        print_table(&courses);
        Ok(())
    }
}

fn print_table(courses: &[CourseSummary]) {
    println!("Available Courses: {}", courses.len());
    if courses.is_empty() {
        println!("No courses in the catalog.");
        return;
    }

    let rows: Vec<CourseTableRow> = courses
        .iter()
        .map(|c| CourseTableRow {
            code: c.code.to_string(),
            title: c.title.clone(),
            schedule: c.schedule.clone(),
            capacity: c.capacity,
            available: c.available_slots,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    let full: Vec<&str> = courses
        .iter()
        .filter(|c| c.available_slots == 0)
        .map(|c| c.code.0.as_str())
        .collect();
    if !full.is_empty() {
        println!("{} {}", "Full:".yellow().bold(), full.join(", "));
    }
}
