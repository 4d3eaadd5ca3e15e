//! `enroll students` — student directory with enrolled courses.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use enroll_core::Registry;

/// Arguments for `enroll students`.
#[derive(Args, Debug)]
pub struct StudentsArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StudentJson {
    id: String,
    name: String,
    enrolled: Vec<String>,
}

#[derive(Tabled)]
struct StudentTableRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "courses")]
    courses: String,
}

impl StudentsArgs {
    pub fn run(self, registry: &Registry) -> Result<()> {
        let students: Vec<StudentJson> = registry
            .list_students()
            .map(|s| StudentJson {
                id: s.id().to_string(),
                name: s.name().to_string(),
                enrolled: s.enrolled().iter().map(|c| c.to_string()).collect(),
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&students)
                    .context("failed to serialize students JSON")?
            );
            return Ok(());
        }

        if students.is_empty() {
            println!("No students registered.");
            return Ok(());
        }

        let rows: Vec<StudentTableRow> = students
            .into_iter()
            .map(|s| StudentTableRow {
                courses: if s.enrolled.is_empty() {
                    "-".to_string()
                } else {
                    s.enrolled.join(", ")
                },
                id: s.id,
                name: s.name,
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
