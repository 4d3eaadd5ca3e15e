//! Domain types for the enrollment registry.
//!
//! Cross references between courses and students are identifier lists, never
//! object references. Only [`crate::registry::Registry`] mutates them, so the
//! entity-level mutators here are crate-private.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed course code (e.g. `C101`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(pub String);

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CourseCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CourseCode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed student identifier (e.g. `S001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which side of the registry a key belongs to. Used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Course,
    Student,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Course => write!(f, "course"),
            EntityKind::Student => write!(f, "student"),
        }
    }
}

// ---------------------------------------------------------------------------
// Course
// ---------------------------------------------------------------------------

/// A course with a fixed seating capacity.
///
/// `roster.len() <= capacity` holds for every course reachable through a
/// [`Registry`](crate::registry::Registry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    code: CourseCode,
    title: String,
    description: String,
    capacity: u32,
    schedule: String,
    roster: Vec<StudentId>,
}

impl Course {
    /// Create a course with an empty roster.
    ///
    /// Capacity is validated when the course is added to a registry.
    pub fn new(
        code: impl Into<CourseCode>,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: u32,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
            capacity,
            schedule: schedule.into(),
            roster: Vec::new(),
        }
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Registered students, in registration order.
    pub fn roster(&self) -> &[StudentId] {
        &self.roster
    }

    pub fn has_student(&self, id: &StudentId) -> bool {
        self.roster.contains(id)
    }

    pub fn is_full(&self) -> bool {
        self.roster.len() >= self.capacity as usize
    }

    /// Seats left. Saturates at zero.
    pub fn available_slots(&self) -> u32 {
        let taken = u32::try_from(self.roster.len()).unwrap_or(u32::MAX);
        self.capacity.saturating_sub(taken)
    }

    /// Append `id` to the roster unless the course is full.
    ///
    /// No duplicate check here; the registry checks enrollment first.
    pub(crate) fn add_student(&mut self, id: StudentId) -> bool {
        if self.is_full() {
            return false;
        }
        self.roster.push(id);
        true
    }

    pub(crate) fn remove_student(&mut self, id: &StudentId) {
        self.roster.retain(|s| s != id);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course Code: {}, Title: {}, Description: {}, Capacity: {}, Schedule: {}, Available Slots: {}",
            self.code,
            self.title,
            self.description,
            self.capacity,
            self.schedule,
            self.available_slots()
        )
    }
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// A student and the codes of the courses they are registered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    name: String,
    enrolled: Vec<CourseCode>,
}

impl Student {
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enrolled: Vec::new(),
        }
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrolled course codes, in registration order.
    pub fn enrolled(&self) -> &[CourseCode] {
        &self.enrolled
    }

    pub fn is_enrolled_in(&self, code: &CourseCode) -> bool {
        self.enrolled.contains(code)
    }

    /// Record `code` in the enrolled list. Returns `false` if it was already there.
    pub(crate) fn register(&mut self, code: CourseCode) -> bool {
        if self.is_enrolled_in(&code) {
            return false;
        }
        self.enrolled.push(code);
        true
    }

    /// Remove `code` from the enrolled list. Returns `false` if it was absent.
    pub(crate) fn drop_course(&mut self, code: &CourseCode) -> bool {
        let before = self.enrolled.len();
        self.enrolled.retain(|c| c != code);
        self.enrolled.len() != before
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student ID: {}, Name: {}", self.id, self.name)
    }
}

// ---------------------------------------------------------------------------
// Read models
// ---------------------------------------------------------------------------

/// A course listing row with its computed seat count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub code: CourseCode,
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub capacity: u32,
    pub enrolled: usize,
    pub available_slots: u32,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code.clone(),
            title: course.title.clone(),
            description: course.description.clone(),
            schedule: course.schedule.clone(),
            capacity: course.capacity,
            enrolled: course.roster.len(),
            available_slots: course.available_slots(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
