//! In-memory enrollment registry.
//!
//! # Ownership
//!
//! The [`Registry`] owns every [`Course`] and [`Student`]. Entities refer to
//! each other only by identifier (`roster` holds [`StudentId`]s, `enrolled`
//! holds [`CourseCode`]s), and every change to those lists goes through a
//! `Registry` method so both sides move together.
//!
//! Courses and students are kept in insertion order for listing, with a
//! key → index map for O(1) lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::error::RegistryError;
use crate::seed::Seed;
use crate::types::{Course, CourseCode, CourseSummary, EntityKind, Student, StudentId};

/// Result of a successful registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new link was created on both sides.
    Registered,
    /// The student was already in the course; nothing changed.
    AlreadyRegistered,
}

/// Result of a successful drop request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The link existed and was removed on both sides.
    Dropped,
    /// The student was not in the course. Reported as success; nothing changed.
    NotEnrolled,
}

/// Owning directory of courses and students.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    courses: Vec<Course>,
    course_index: HashMap<CourseCode, usize>,
    students: Vec<Student>,
    student_index: HashMap<StudentId, usize>,
}

// ---------------------------------------------------------------------------
// 1. Construction
// ---------------------------------------------------------------------------

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a seed catalog.
    ///
    /// Enrollments are applied through [`Registry::register_student_to_course`],
    /// so a seed that overfills a course fails with `CourseFull`.
    pub fn from_seed(seed: &Seed) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for c in &seed.courses {
            registry.add_course(Course::new(
                c.code.clone(),
                c.title.clone(),
                c.description.clone(),
                c.capacity,
                c.schedule.clone(),
            ))?;
        }
        for s in &seed.students {
            registry.add_student(Student::new(s.id.clone(), s.name.clone()))?;
        }
        for e in &seed.enrollments {
            registry.register_student_to_course(&e.student, &e.course)?;
        }
        Ok(registry)
    }

    /// Insert a course. Fails with `DuplicateKey` if the code is taken and
    /// `InvalidCapacity` if the course seats nobody.
    pub fn add_course(&mut self, course: Course) -> Result<(), RegistryError> {
        if course.capacity() == 0 {
            return Err(RegistryError::InvalidCapacity {
                code: course.code().clone(),
            });
        }
        if self.course_index.contains_key(course.code()) {
            return Err(RegistryError::duplicate(EntityKind::Course, course.code()));
        }
        self.course_index
            .insert(course.code().clone(), self.courses.len());
        self.courses.push(course);
        Ok(())
    }

    /// Insert a student. Fails with `DuplicateKey` if the id is taken.
    pub fn add_student(&mut self, student: Student) -> Result<(), RegistryError> {
        if self.student_index.contains_key(student.id()) {
            return Err(RegistryError::duplicate(EntityKind::Student, student.id()));
        }
        self.student_index
            .insert(student.id().clone(), self.students.len());
        self.students.push(student);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// 2. Lookup and listing
// ---------------------------------------------------------------------------

impl Registry {
    pub fn find_course(&self, code: &CourseCode) -> Option<&Course> {
        self.course_index.get(code).map(|&i| &self.courses[i])
    }

    pub fn find_student(&self, id: &StudentId) -> Option<&Student> {
        self.student_index.get(id).map(|&i| &self.students[i])
    }

    /// Every course in insertion order, with computed available slots.
    pub fn list_courses(&self) -> Vec<CourseSummary> {
        self.courses.iter().map(CourseSummary::from).collect()
    }

    /// Every student in insertion order.
    pub fn list_students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Students registered in `code`, in roster order.
    pub fn roster_of(&self, code: &CourseCode) -> Result<Vec<&Student>, RegistryError> {
        let course = self
            .find_course(code)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Course, code))?;
        course
            .roster()
            .iter()
            .map(|id| {
                self.find_student(id)
                    .ok_or_else(|| RegistryError::not_found(EntityKind::Student, id))
            })
            .collect()
    }

    /// Courses `student_id` is registered in, in registration order.
    pub fn courses_of(&self, student_id: &StudentId) -> Result<Vec<&Course>, RegistryError> {
        let student = self
            .find_student(student_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Student, student_id))?;
        student
            .enrolled()
            .iter()
            .map(|code| {
                self.find_course(code)
                    .ok_or_else(|| RegistryError::not_found(EntityKind::Course, code))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// 3. Register / drop
// ---------------------------------------------------------------------------

impl Registry {
    /// Register `student_id` in course `code`.
    ///
    /// The capacity check and both list updates happen here together; on any
    /// error neither side is touched. Re-registering is a no-op success and
    /// does not re-check capacity.
    pub fn register_student_to_course(
        &mut self,
        student_id: &StudentId,
        code: &CourseCode,
    ) -> Result<RegisterOutcome, RegistryError> {
        let (si, ci) = self.resolve(student_id, code)?;

        if self.students[si].is_enrolled_in(code) {
            debug!(student = %student_id, course = %code, "already registered");
            return Ok(RegisterOutcome::AlreadyRegistered);
        }

        if !self.courses[ci].add_student(student_id.clone()) {
            return Err(RegistryError::CourseFull { code: code.clone() });
        }
        self.students[si].register(code.clone());

        debug!(
            student = %student_id,
            course = %code,
            available = self.courses[ci].available_slots(),
            "registered"
        );
        Ok(RegisterOutcome::Registered)
    }

    /// Remove `student_id` from course `code`.
    ///
    /// Dropping a course the student never took is a successful no-op.
    pub fn remove_student_from_course(
        &mut self,
        student_id: &StudentId,
        code: &CourseCode,
    ) -> Result<DropOutcome, RegistryError> {
        let (si, ci) = self.resolve(student_id, code)?;

        if !self.students[si].drop_course(code) {
            debug!(student = %student_id, course = %code, "drop of unregistered course ignored");
            return Ok(DropOutcome::NotEnrolled);
        }
        self.courses[ci].remove_student(student_id);

        debug!(student = %student_id, course = %code, "dropped");
        Ok(DropOutcome::Dropped)
    }

    fn resolve(
        &self,
        student_id: &StudentId,
        code: &CourseCode,
    ) -> Result<(usize, usize), RegistryError> {
        let si = *self
            .student_index
            .get(student_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Student, student_id))?;
        let ci = *self
            .course_index
            .get(code)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Course, code))?;
        Ok((si, ci))
    }
}

// ---------------------------------------------------------------------------
// 4. Invariant check
// ---------------------------------------------------------------------------

impl Registry {
    /// Verify the capacity bound, duplicate-free lists, and that every roster
    /// entry is mirrored by an enrolled entry and vice versa.
    pub fn check_consistency(&self) -> Result<(), RegistryError> {
        for course in &self.courses {
            if course.roster().len() > course.capacity() as usize {
                return Err(RegistryError::Inconsistent(format!(
                    "course '{}' holds {} students over capacity {}",
                    course.code(),
                    course.roster().len(),
                    course.capacity()
                )));
            }
            for (i, id) in course.roster().iter().enumerate() {
                if course.roster()[..i].contains(id) {
                    return Err(RegistryError::Inconsistent(format!(
                        "student '{id}' listed twice in course '{}'",
                        course.code()
                    )));
                }
                match self.find_student(id) {
                    Some(s) if s.is_enrolled_in(course.code()) => {}
                    Some(_) => {
                        return Err(RegistryError::Inconsistent(format!(
                            "student '{id}' in roster of '{}' but not enrolled",
                            course.code()
                        )))
                    }
                    None => {
                        return Err(RegistryError::Inconsistent(format!(
                            "unknown student '{id}' in roster of '{}'",
                            course.code()
                        )))
                    }
                }
            }
        }

        for student in &self.students {
            for (i, code) in student.enrolled().iter().enumerate() {
                if student.enrolled()[..i].contains(code) {
                    return Err(RegistryError::Inconsistent(format!(
                        "course '{code}' listed twice for student '{}'",
                        student.id()
                    )));
                }
                match self.find_course(code) {
                    Some(c) if c.has_student(student.id()) => {}
                    Some(_) => {
                        return Err(RegistryError::Inconsistent(format!(
                            "student '{}' enrolled in '{code}' but missing from its roster",
                            student.id()
                        )))
                    }
                    None => {
                        return Err(RegistryError::Inconsistent(format!(
                            "student '{}' enrolled in unknown course '{code}'",
                            student.id()
                        )))
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
