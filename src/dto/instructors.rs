//! DTOs used in instructor pages.

use serde::{Deserialize, Serialize};

use crate::domain::course::Course;
use crate::domain::instructor::Instructor;
use crate::dto::courses::CourseRow;

/// Query parameters accepted by the instructor index page.
#[derive(Debug, Default, Deserialize)]
pub struct InstructorIndexQuery {
    /// Selected instructor whose courses are expanded below the table.
    pub id: Option<i32>,
    /// Selected course whose roster is expanded below the courses.
    pub course_id: Option<i32>,
}

/// One row of the instructors table.
#[derive(Debug, Serialize)]
pub struct InstructorRow {
    pub instructor: Instructor,
    /// Office location, empty when the instructor has no office.
    pub office_location: Option<String>,
    /// Courses taught by this instructor.
    pub courses: Vec<Course>,
    /// Whether this row is the selected one.
    pub selected: bool,
}

/// One course taught by the selected instructor.
#[derive(Debug, Serialize)]
pub struct TaughtCourseRow {
    pub course: Course,
    pub department_name: String,
    pub selected: bool,
}

/// One student enrolled in the selected course.
#[derive(Debug, Serialize)]
pub struct EnrolledStudentRow {
    pub student_name: String,
    pub grade: Option<String>,
}

/// Data required to render the instructor index template.
#[derive(Debug)]
pub struct InstructorIndexData {
    pub instructors: Vec<InstructorRow>,
    /// Courses of the selected instructor, empty when none is selected.
    pub courses: Vec<TaughtCourseRow>,
    /// Roster of the selected course, empty when none is selected.
    pub enrollments: Vec<EnrolledStudentRow>,
}

/// Data required to render the instructor details template.
#[derive(Debug)]
pub struct InstructorDetailsData {
    pub instructor: Instructor,
    pub office_location: Option<String>,
    /// Courses taught by the instructor with their department names.
    pub courses: Vec<CourseRow>,
}

/// One course checkbox on the instructor create and edit forms.
#[derive(Debug, Serialize)]
pub struct AssignedCourseOption {
    pub course: Course,
    pub assigned: bool,
}

/// Data required to render the instructor create and edit forms.
#[derive(Debug)]
pub struct InstructorFormData {
    /// Instructor being edited, absent on the create form.
    pub instructor: Option<Instructor>,
    /// Current office location of the edited instructor.
    pub office_location: Option<String>,
    /// All courses with their assignment state.
    pub courses: Vec<AssignedCourseOption>,
}
