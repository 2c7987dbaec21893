//! Plain-text reply blocks.

use crate::dataset::{Course, Student};

pub(crate) fn student_details(student: &Student) -> String {
    let mut lines = vec![
        format!("Student: {} ({})", student.name, student.id),
        format!("Department: {}", student.department),
        format!("Email: {}", student.mail),
    ];
    if let Some(advisor) = student.advisor() {
        lines.push(format!("Advisor: {}", advisor));
    }
    lines.join("\n")
}

pub(crate) fn course_list(courses: &[Course], header: Option<&str>) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }
    header
        .map(str::to_string)
        .into_iter()
        .chain(courses.iter().map(|c| format!("- {} ({})", c.name, c.code)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn student_list(code: &str, students: &[&Student]) -> String {
    std::iter::once(format!("Students in {} department:", code))
        .chain(students.iter().map(|s| format!("- {} ({})", s.name, s.id)))
        .collect::<Vec<_>>()
        .join("\n")
}
