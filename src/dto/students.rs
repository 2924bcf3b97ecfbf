//! DTOs used in student pages.

use serde::{Deserialize, Serialize};

use crate::domain::student::Student;
use crate::pagination::Paginated;

/// Query parameters accepted by the student index page.
#[derive(Debug, Default, Deserialize)]
pub struct StudentIndexQuery {
    /// Optional search string matched against student names.
    pub q: Option<String>,
    /// Sort token taken from the column header links.
    pub sort: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render the student index template.
#[derive(Debug)]
pub struct StudentIndexData {
    /// Paginated list of students to show in the table.
    pub students: Paginated<Student>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    /// Sort token the page is currently ordered by.
    pub sort: String,
    /// Token the last-name column header should link to.
    pub name_sort: String,
    /// Token the enrollment-date column header should link to.
    pub date_sort: String,
}

/// One enrollment line on the student details page.
#[derive(Debug, Serialize)]
pub struct StudentEnrollmentRow {
    pub course_title: String,
    /// Letter grade, empty until one is assigned.
    pub grade: Option<String>,
}

/// Data required to render the student details template.
#[derive(Debug)]
pub struct StudentDetailsData {
    pub student: Student,
    pub enrollments: Vec<StudentEnrollmentRow>,
}
