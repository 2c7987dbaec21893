//! CSV loading for the dataset tables. Course and student sources are required;
//! the university source falls back to a placeholder when it is missing.

use csv_async::{AsyncReaderBuilder, StringRecord};
use std::io::ErrorKind;
use std::path::Path;

use super::{Course, DataPaths, Dataset, Student, UniversityInfo};
use crate::error::LoadError;

const REQUIRED_STUDENT_COLUMNS: [&str; 3] = ["name", "id", "mail"];

/// Department code of a course: the leading non-digit run of `code`, uppercased.
/// `"cse201"` -> `"CSE"`, `"201"` -> `""`.
pub fn department_prefix(code: &str) -> String {
    code.chars()
        .take_while(|c| !c.is_ascii_digit())
        .collect::<String>()
        .to_uppercase()
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

async fn open(path: &Path) -> Result<tokio::fs::File, LoadError> {
    tokio::fs::File::open(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

async fn read_rows(
    path: &Path,
    file: tokio::fs::File,
    has_headers: bool,
) -> Result<(StringRecord, Vec<StringRecord>), LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = AsyncReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .create_reader(file);
    let headers = if has_headers {
        reader.headers().await.map_err(csv_err)?.clone()
    } else {
        StringRecord::new()
    };
    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).await.map_err(csv_err)? {
        rows.push(record.clone());
    }
    Ok((headers, rows))
}

impl Dataset {
    /// Loads every source in dependency order and runs the course assignment pass.
    pub async fn load(paths: &DataPaths) -> Result<Self, LoadError> {
        let mut dataset = Self::default();
        dataset.load_courses(&paths.courses).await?;
        dataset.load_students(&paths.students).await?;
        dataset.assign_courses();
        dataset.load_university(&paths.university).await?;
        tracing::info!(
            target: "campus::dataset",
            students = dataset.student_count(),
            courses = dataset.course_count(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Headerless `name,code,number,url` rows. Rows with fewer than four fields are skipped.
    pub async fn load_courses(&mut self, path: &Path) -> Result<usize, LoadError> {
        let file = open(path).await?;
        let (_, rows) = read_rows(path, file, false).await?;

        self.courses_by_dept.clear();
        let mut loaded = 0;
        for row in rows {
            if row.len() < 4 {
                tracing::debug!(target: "campus::dataset", line = line_of(&row), "Skipping short course row");
                continue;
            }
            let code = field(&row, 1).to_string();
            let course = Course {
                name: field(&row, 0).to_string(),
                department: department_prefix(&code),
                code,
                number: field(&row, 2).to_string(),
                url: field(&row, 3).to_string(),
            };
            self.courses_by_dept
                .entry(course.department.clone())
                .or_default()
                .push(course);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Header-keyed rows with required `name,id,mail` and optional `department,advisor`.
    ///
    /// Name and id collisions overwrite the earlier index entry (last write wins);
    /// each collision is logged.
    pub async fn load_students(&mut self, path: &Path) -> Result<usize, LoadError> {
        let file = open(path).await?;
        let (headers, rows) = read_rows(path, file, true).await?;

        let column = |name: &str| headers.iter().position(|h| h.trim() == name);
        let mut required = [0usize; 3];
        for (slot, name) in required.iter_mut().zip(REQUIRED_STUDENT_COLUMNS) {
            *slot = column(name).ok_or_else(|| LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })?;
        }
        let department_col = column("department");
        let advisor_col = column("advisor");

        self.students.clear();
        self.by_name.clear();
        self.by_id.clear();
        self.students_by_dept.clear();

        for row in rows {
            for (&idx, name) in required.iter().zip(REQUIRED_STUDENT_COLUMNS) {
                if row.get(idx).is_none() {
                    return Err(LoadError::MalformedRow {
                        path: path.to_path_buf(),
                        line: line_of(&row),
                        column: name,
                    });
                }
            }
            let optional = |col: Option<usize>| col.map(|idx| field(&row, idx)).unwrap_or("");
            let student = Student {
                name: field(&row, required[0]).to_string(),
                id: field(&row, required[1]).to_string(),
                mail: field(&row, required[2]).to_string(),
                department: optional(department_col).to_uppercase(),
                advisor: optional(advisor_col).to_string(),
                courses: Vec::new(),
            };

            let idx = self.students.len();
            if let Some(prev) = self.by_name.insert(student.name.to_lowercase(), idx) {
                tracing::warn!(
                    target: "campus::dataset",
                    name = %student.name,
                    shadowed_id = %self.students[prev].id,
                    "Duplicate student name; keeping the later record in the name index"
                );
            }
            if let Some(prev) = self.by_id.insert(student.id.to_uppercase(), idx) {
                tracing::warn!(
                    target: "campus::dataset",
                    id = %student.id,
                    shadowed_name = %self.students[prev].name,
                    "Duplicate student id; keeping the later record in the id index"
                );
            }
            if !student.department.is_empty() {
                self.students_by_dept
                    .entry(student.department.clone())
                    .or_default()
                    .push(idx);
            }
            self.students.push(student);
        }
        Ok(self.students.len())
    }

    /// First headerless `name,url` row. A missing file yields the placeholder;
    /// a file with no usable row leaves the university unset.
    pub async fn load_university(&mut self, path: &Path) -> Result<(), LoadError> {
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    target: "campus::dataset",
                    path = %path.display(),
                    "University file not found; using placeholder"
                );
                self.university = Some(UniversityInfo::placeholder());
                return Ok(());
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let (_, rows) = read_rows(path, file, false).await?;
        self.university = rows.iter().find(|row| row.len() >= 2).map(|row| UniversityInfo {
            name: field(row, 0).to_string(),
            url: field(row, 1).to_string(),
        });
        Ok(())
    }
}
