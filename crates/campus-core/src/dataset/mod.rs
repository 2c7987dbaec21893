//! In-memory student/course/university tables built from flat CSV sources.
//!
//! | Table              | Key                    | Order              |
//! |--------------------|------------------------|--------------------|
//! | students by name   | lowercase name         | -                  |
//! | students by id     | uppercase id           | -                  |
//! | students by dept   | department code        | student file order |
//! | courses by dept    | derived code prefix    | course file order  |

mod loader;

use std::collections::HashMap;
use std::path::PathBuf;

pub use loader::department_prefix;

/// Locations of the three tabular sources.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub students: PathBuf,
    pub courses: PathBuf,
    pub university: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub code: String,
    pub number: String,
    pub url: String,
    /// Leading non-digit run of `code`, uppercased.
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub id: String,
    pub mail: String,
    /// Uppercased; empty when the source row has none.
    pub department: String,
    /// Empty when the source row has none.
    pub advisor: String,
    /// Every course of `department`, filled by [`Dataset::assign_courses`].
    pub courses: Vec<Course>,
}

impl Student {
    pub fn advisor(&self) -> Option<&str> {
        Some(self.advisor.as_str()).filter(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversityInfo {
    pub name: String,
    pub url: String,
}

impl UniversityInfo {
    pub const PLACEHOLDER_NAME: &'static str = "the university";

    pub fn placeholder() -> Self {
        Self {
            name: Self::PLACEHOLDER_NAME.to_string(),
            url: String::new(),
        }
    }
}

/// Read-only lookup tables. Populated once by [`Dataset::load`], queried many times.
#[derive(Debug, Default)]
pub struct Dataset {
    students: Vec<Student>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
    students_by_dept: HashMap<String, Vec<usize>>,
    courses_by_dept: HashMap<String, Vec<Course>>,
    university: Option<UniversityInfo>,
}

impl Dataset {
    /// Finds a student by ID (case-insensitive), then by full name (case-insensitive).
    /// Exact matches only.
    pub fn find_student(&self, name_or_id: &str) -> Option<&Student> {
        let name_or_id = name_or_id.trim();
        if name_or_id.is_empty() {
            return None;
        }
        self.by_id
            .get(&name_or_id.to_uppercase())
            .or_else(|| self.by_name.get(&name_or_id.to_lowercase()))
            .map(|&idx| &self.students[idx])
    }

    /// Students registered under `department`, in load order.
    pub fn students_in(&self, department: &str) -> Vec<&Student> {
        self.students_by_dept
            .get(department)
            .map(|ids| ids.iter().map(|&idx| &self.students[idx]).collect())
            .unwrap_or_default()
    }

    /// Courses whose code prefix is `department`, in load order.
    pub fn courses_in(&self, department: &str) -> &[Course] {
        self.courses_by_dept
            .get(department)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `None` only when the university file exists but holds no usable row.
    pub fn university(&self) -> Option<&UniversityInfo> {
        self.university.as_ref()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses_by_dept.values().map(Vec::len).sum()
    }

    /// Replaces every student's course list with a snapshot of their department's courses.
    /// Department-based only: there is no enrollment record.
    pub fn assign_courses(&mut self) {
        let courses_by_dept = &self.courses_by_dept;
        for student in &mut self.students {
            student.courses = courses_by_dept
                .get(&student.department)
                .cloned()
                .unwrap_or_default();
        }
    }
}
