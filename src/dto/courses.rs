//! DTOs used in course pages.

use serde::Serialize;

use crate::domain::course::Course;
use crate::domain::department::Department;

/// One row of the courses table, carrying the department name for display.
#[derive(Debug, Serialize)]
pub struct CourseRow {
    pub course: Course,
    pub department_name: String,
}

impl From<(Course, Department)> for CourseRow {
    fn from((course, department): (Course, Department)) -> Self {
        Self {
            course,
            department_name: department.name,
        }
    }
}

/// Data required to render the course create and edit forms.
#[derive(Debug)]
pub struct CourseFormData {
    /// Course being edited, absent on the create form.
    pub course: Option<Course>,
    /// Departments offered in the select box.
    pub departments: Vec<Department>,
}
