//! Startup catalog of courses, students, and optional enrollments.
//!
//! # Resolution
//!
//! ```text
//! <home>/.enroll/seed.yaml   (used when present)
//! built-in reference seed    (otherwise)
//! ```
//!
//! Like the registry API, lookups come in two forms: `fn_at(home, …)` with an
//! explicit home for tests, and `fn(…)` which derives home from
//! `dirs::home_dir()`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RegistryError;
use crate::types::{CourseCode, StudentId};

/// One course entry in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSeed {
    pub code: CourseCode,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub capacity: u32,
    #[serde(default)]
    pub schedule: String,
}

/// One student entry in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSeed {
    pub id: StudentId,
    pub name: String,
}

/// A registration applied after all courses and students exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentSeed {
    pub student: StudentId,
    pub course: CourseCode,
}

/// Root of a seed YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Seed {
    #[serde(default)]
    pub courses: Vec<CourseSeed>,
    #[serde(default)]
    pub students: Vec<StudentSeed>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentSeed>,
}

impl Seed {
    /// The built-in catalog: three courses, two students, no enrollments.
    pub fn reference() -> Self {
        let course = |code: &str, title: &str, description: &str, capacity: u32, schedule: &str| {
            CourseSeed {
                code: CourseCode::from(code),
                title: title.to_owned(),
                description: description.to_owned(),
                capacity,
                schedule: schedule.to_owned(),
            }
        };
        let student = |id: &str, name: &str| StudentSeed {
            id: StudentId::from(id),
            name: name.to_owned(),
        };
        Self {
            courses: vec![
                course("C101", "Math", "Basic math concepts", 30, "MWF 10-11"),
                course("C102", "Science", "Introduction to science", 25, "TTh 9-10:30"),
                course("C103", "History", "World history overview", 20, "MWF 11-12"),
            ],
            students: vec![student("S001", "Alice"), student("S002", "Bob")],
            enrollments: vec![],
        }
    }
}

/// `<home>/.enroll/seed.yaml`. Pure, no I/O.
pub fn default_path_at(home: &Path) -> PathBuf {
    home.join(".enroll").join("seed.yaml")
}

/// Load a seed file.
///
/// Returns `RegistryError::SeedNotFound` if absent,
/// `RegistryError::Parse` (with path + line context) if malformed YAML.
pub fn load(path: &Path) -> Result<Seed, RegistryError> {
    if !path.exists() {
        return Err(RegistryError::SeedNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let seed: Seed = serde_yaml::from_str(&contents).map_err(|e| RegistryError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(
        path = %path.display(),
        courses = seed.courses.len(),
        students = seed.students.len(),
        "loaded seed"
    );
    Ok(seed)
}

/// Use `<home>/.enroll/seed.yaml` if it exists, else the reference seed.
pub fn resolve_at(home: &Path) -> Result<Seed, RegistryError> {
    let path = default_path_at(home);
    if path.exists() {
        return load(&path);
    }
    Ok(Seed::reference())
}

/// `resolve_at` convenience wrapper.
pub fn resolve() -> Result<Seed, RegistryError> {
    resolve_at(&home()?)
}

fn home() -> Result<PathBuf, RegistryError> {
    dirs::home_dir().ok_or(RegistryError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_path_is_correct() {
        let home = TempDir::new().expect("tempdir");
        assert!(default_path_at(home.path()).ends_with(".enroll/seed.yaml"));
    }

    #[test]
    fn resolve_falls_back_to_reference() {
        let home = TempDir::new().expect("tempdir");
        let seed = resolve_at(home.path()).expect("resolve");
        assert_eq!(seed, Seed::reference());
        assert_eq!(seed.courses.len(), 3);
        assert_eq!(seed.students.len(), 2);
    }

    #[test]
    fn optional_fields_default() {
        let seed: Seed = serde_yaml::from_str(
            "courses:\n  - code: X1\n    title: Bare\n    capacity: 4\n",
        )
        .expect("parse");
        assert_eq!(seed.courses[0].description, "");
        assert_eq!(seed.courses[0].schedule, "");
        assert!(seed.students.is_empty());
        assert!(seed.enrollments.is_empty());
    }

    #[test]
    fn seed_not_found_message() {
        let home = TempDir::new().expect("tempdir");
        let err = load(&home.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("seed not found"));
    }
}
