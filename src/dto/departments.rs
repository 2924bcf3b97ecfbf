//! DTOs used in department pages.

use serde::Serialize;

use crate::domain::department::Department;
use crate::domain::instructor::Instructor;

/// One row of the departments table.
#[derive(Debug, Serialize)]
pub struct DepartmentRow {
    pub department: Department,
    /// Administrator, empty when the position is vacant.
    pub administrator: Option<Instructor>,
}

impl From<(Department, Option<Instructor>)> for DepartmentRow {
    fn from((department, administrator): (Department, Option<Instructor>)) -> Self {
        Self {
            department,
            administrator,
        }
    }
}

/// Data required to render the department create and edit forms.
#[derive(Debug)]
pub struct DepartmentFormData {
    /// Department being edited, absent on the create form.
    pub department: Option<Department>,
    /// Instructors offered in the administrator select box.
    pub instructors: Vec<Instructor>,
}
