//! Pattern-question engine over the dataset tables.
//!
//! A [`Responder`] holds an ordered route table. Each [`Route`] pairs a matcher with a
//! handler; the first route whose matcher accepts the lowercased question answers it.

mod format;

use regex::Regex;

use crate::dataset::Dataset;
use crate::department::map_department_name;

pub const EMPTY_QUESTION_REPLY: &str = "Please type a question about students, courses or departments.";
pub const FAREWELL_REPLY: &str = "Thank you for your questions. Goodbye!";
pub const FALLBACK_REPLY: &str = "I can help with questions related to Bennett University. \
Ask me about admissions, programs, fees, hostels, scholarships, placements or campus life.";

type Handler = fn(&Dataset, &str) -> String;

/// How a route recognises a question.
#[derive(Debug)]
pub enum Matcher {
    /// Unanchored pattern with one capture group naming a student or department.
    Capture(Regex),
    /// Fires when any phrase occurs in the question; captures nothing.
    Contains(&'static [&'static str]),
}

impl Matcher {
    /// Returns the captured term (stripped of spaces, `?` and `.`) when the matcher fires.
    pub fn capture<'a>(&self, question: &'a str) -> Option<&'a str> {
        match self {
            Self::Capture(re) => re
                .captures(question)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim_matches(|c: char| matches!(c, ' ' | '?' | '.'))),
            Self::Contains(phrases) => phrases.iter().any(|p| question.contains(p)).then_some(""),
        }
    }
}

pub struct Route {
    name: &'static str,
    matcher: Matcher,
    handler: Handler,
}

impl Route {
    fn capture(name: &'static str, pattern: &str, handler: Handler) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            matcher: Matcher::Capture(Regex::new(pattern)?),
            handler,
        })
    }

    fn contains(name: &'static str, phrases: &'static [&'static str], handler: Handler) -> Self {
        Self {
            name,
            matcher: Matcher::Contains(phrases),
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .finish()
    }
}

#[derive(Debug)]
pub struct Responder {
    routes: Vec<Route>,
}

impl Responder {
    /// Builds the route table in priority order.
    pub fn new() -> Result<Self, regex::Error> {
        let routes = vec![
            Route::capture("student_id", r"what is the student id of (.+)", student_id)?,
            Route::capture("advisor", r"who is the advisor of (.+)", advisor)?,
            Route::capture("courses_taken", r"which courses does (.+) take", courses_taken)?,
            Route::capture("courses_taken", r"which courses did (.+) take", courses_taken)?,
            Route::capture("department_students", r"show students in (.+) department", department_students)?,
            Route::capture("department_students", r"list students in (.+) department", department_students)?,
            Route::capture("department_courses", r"list courses offered by (.+) department", department_courses)?,
            Route::capture("department_courses", r"which courses are offered by (.+) department", department_courses)?,
            Route::contains("university", &["which university", "what is the university"], university),
        ];
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Answers `text` from the dataset. Never fails: misses become textual replies.
    pub fn respond(&self, dataset: &Dataset, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return EMPTY_QUESTION_REPLY.to_string();
        }
        let question = text.to_lowercase();
        if question == "quit" {
            return FAREWELL_REPLY.to_string();
        }

        for route in &self.routes {
            if let Some(term) = route.matcher.capture(&question) {
                tracing::debug!(target: "campus::responder", route = route.name, term, "Route matched");
                return (route.handler)(dataset, term);
            }
        }
        FALLBACK_REPLY.to_string()
    }
}

fn student_id(dataset: &Dataset, term: &str) -> String {
    match dataset.find_student(term) {
        Some(student) => format!("Student: {}\nStudent ID: {}", student.name, student.id),
        None => format!("I couldn't find any student named '{}'.", term),
    }
}

fn advisor(dataset: &Dataset, term: &str) -> String {
    let Some(student) = dataset.find_student(term) else {
        return format!("I couldn't find any student matching '{}'.", term);
    };
    match student.advisor() {
        Some(advisor) => format!("Student: {} ({})\nAdvisor: {}", student.name, student.id, advisor),
        None => format!("No advisor information found for {}.", student.name),
    }
}

fn courses_taken(dataset: &Dataset, term: &str) -> String {
    let Some(student) = dataset.find_student(term) else {
        return format!("I couldn't find any student matching '{}'.", term);
    };
    if student.courses.is_empty() {
        return format!("No course information found for {}.", student.name);
    }
    let header = format!("Courses for {} ({}):", student.name, student.id);
    format!(
        "{}\n{}",
        format::student_details(student),
        format::course_list(&student.courses, Some(header.as_str()))
    )
}

fn department_students(dataset: &Dataset, term: &str) -> String {
    let code = map_department_name(term);
    let students = dataset.students_in(&code);
    if students.is_empty() {
        return format!("No students found in department '{}'.", term);
    }
    format::student_list(&code, &students)
}

fn department_courses(dataset: &Dataset, term: &str) -> String {
    let code = map_department_name(term);
    let courses = dataset.courses_in(&code);
    if courses.is_empty() {
        return format!("No courses found for department '{}'.", term);
    }
    let header = format!("Courses offered by {} department:", code);
    format::course_list(courses, Some(header.as_str()))
}

fn university(dataset: &Dataset, _: &str) -> String {
    match dataset.university() {
        Some(info) if info.url.is_empty() => format!("University: {}", info.name),
        Some(info) => format!("University: {}\nWebsite: {}", info.name, info.url),
        None => "University information is not available.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::sample_dataset;

    fn responder() -> Responder {
        Responder::new().unwrap()
    }

    #[test]
    fn route_table_order_is_fixed() {
        let names: Vec<&str> = responder().routes().iter().map(Route::name).collect();
        assert_eq!(
            names,
            [
                "student_id",
                "advisor",
                "courses_taken",
                "courses_taken",
                "department_students",
                "department_students",
                "department_courses",
                "department_courses",
                "university",
            ]
        );
    }

    #[test]
    fn capture_strips_trailing_punctuation() {
        let r = responder();
        let term = r.routes()[1].matcher().capture("who is the advisor of  s02 ?.");
        assert_eq!(term, Some("s02"));
    }

    #[tokio::test]
    async fn student_id_by_name() {
        let ds = sample_dataset().await;
        let reply = responder().respond(&ds, "What is the student id of Asha Singh?");
        assert_eq!(reply, "Student: Asha Singh\nStudent ID: S01");
    }

    #[tokio::test]
    async fn student_id_miss_names_the_lowercased_term() {
        let ds = sample_dataset().await;
        let reply = responder().respond(&ds, "What is the student id of Bob?");
        assert_eq!(reply, "I couldn't find any student named 'bob'.");
    }

    #[tokio::test]
    async fn advisor_absent_and_present() {
        let ds = sample_dataset().await;
        let r = responder();
        assert_eq!(
            r.respond(&ds, "who is the advisor of S01"),
            "No advisor information found for Asha Singh."
        );
        assert_eq!(
            r.respond(&ds, "Who is the advisor of Rahul Verma?"),
            "Student: Rahul Verma (S02)\nAdvisor: Dr. Mehta"
        );
        assert_eq!(
            r.respond(&ds, "who is the advisor of S99"),
            "I couldn't find any student matching 's99'."
        );
    }

    #[tokio::test]
    async fn courses_taken_lists_details_and_department_courses() {
        let ds = sample_dataset().await;
        let reply = responder().respond(&ds, "Which courses did Rahul Verma take?");
        assert_eq!(
            reply,
            "Student: Rahul Verma (S02)\n\
             Department: CSE\n\
             Email: rahul@example.edu\n\
             Advisor: Dr. Mehta\n\
             Courses for Rahul Verma (S02):\n\
             - Data Structures (CSE201)\n\
             - Operating Systems (CSE301)"
        );
    }

    #[tokio::test]
    async fn courses_taken_without_courses() {
        let ds = sample_dataset().await;
        let reply = responder().respond(&ds, "which courses does imran khan take");
        assert_eq!(reply, "No course information found for Imran Khan.");
    }

    #[tokio::test]
    async fn students_in_mapped_department() {
        let ds = sample_dataset().await;
        let reply = responder().respond(&ds, "show students in computer science department");
        assert_eq!(
            reply,
            "Students in CSE department:\n- Asha Singh (S01)\n- Rahul Verma (S02)"
        );
        assert_eq!(
            responder().respond(&ds, "List students in Civil department."),
            "No students found in department 'civil'."
        );
    }

    #[tokio::test]
    async fn courses_offered_by_department() {
        let ds = sample_dataset().await;
        let reply = responder().respond(&ds, "Which courses are offered by AI department?");
        assert_eq!(reply, "Courses offered by AIML department:\n- Machine Learning (AIML210)");
        assert_eq!(
            responder().respond(&ds, "list courses offered by mechanical department"),
            "No courses found for department 'mechanical'."
        );
    }

    #[tokio::test]
    async fn university_info() {
        let mut ds = sample_dataset().await;
        let r = responder();
        assert_eq!(
            r.respond(&ds, "Which university is this?"),
            "University: Bennett University\nWebsite: https://www.bennett.edu.in"
        );
        let dir = tempfile::tempdir().unwrap();
        ds.load_university(&dir.path().join("missing.csv")).await.unwrap();
        assert_eq!(r.respond(&ds, "what is the university name"), "University: the university");
    }

    #[tokio::test]
    async fn fixed_replies() {
        let ds = sample_dataset().await;
        let r = responder();
        assert_eq!(r.respond(&ds, "   "), EMPTY_QUESTION_REPLY);
        assert_eq!(r.respond(&ds, "QUIT"), FAREWELL_REPLY);
        assert_eq!(r.respond(&ds, "quit now"), FALLBACK_REPLY);
        assert_eq!(r.respond(&ds, "tell me a joke"), FALLBACK_REPLY);
    }
}
