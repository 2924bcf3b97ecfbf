use crate::{
    db::{DbConnection, DbPool},
    domain::{
        course::{Course, NewCourse, UpdateCourse},
        department::{Department, NewDepartment, UpdateDepartment},
        enrollment::{Enrollment, NewEnrollment},
        instructor::{Instructor, NewInstructor, OfficeAssignment, UpdateInstructor},
        student::{EnrollmentDateGroup, NewStudent, Student, StudentSort, UpdateStudent},
    },
    repository::errors::RepositoryResult,
};

pub mod course;
pub mod department;
pub mod enrollment;
pub mod errors;
pub mod instructor;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod student;

/// Diesel-backed implementation of the repository traits. Cheap to clone,
/// every clone shares the same connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filtering, ordering and paging options for the student list.
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub search: Option<String>,
    pub sort: StudentSort,
    pub pagination: Option<Pagination>,
}

impl StudentListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(mut self, sort: StudentSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait StudentReader {
    fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>>;
    fn list_students(&self, query: StudentListQuery) -> RepositoryResult<(usize, Vec<Student>)>;
    fn enrollment_date_groups(&self) -> RepositoryResult<Vec<EnrollmentDateGroup>>;
}

pub trait StudentWriter {
    fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student>;
    fn update_student(&self, student_id: i32, updates: &UpdateStudent)
    -> RepositoryResult<Student>;
    fn delete_student(&self, student_id: i32) -> RepositoryResult<()>;
}

pub trait CourseReader {
    fn get_course_by_id(&self, id: i32) -> RepositoryResult<Option<Course>>;
    fn get_course_with_department(&self, id: i32)
    -> RepositoryResult<Option<(Course, Department)>>;
    fn list_courses(&self) -> RepositoryResult<Vec<(Course, Department)>>;
    fn list_courses_for_instructor(
        &self,
        instructor_id: i32,
    ) -> RepositoryResult<Vec<(Course, Department)>>;
}

pub trait CourseWriter {
    fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course>;
    fn update_course(&self, course_id: i32, updates: &UpdateCourse) -> RepositoryResult<Course>;
    fn delete_course(&self, course_id: i32) -> RepositoryResult<()>;
}

pub trait InstructorReader {
    fn get_instructor_by_id(&self, id: i32) -> RepositoryResult<Option<Instructor>>;
    fn get_office_assignment(
        &self,
        instructor_id: i32,
    ) -> RepositoryResult<Option<OfficeAssignment>>;
    fn list_instructors(&self) -> RepositoryResult<Vec<Instructor>>;
    fn list_instructors_with_details(
        &self,
    ) -> RepositoryResult<Vec<(Instructor, Option<OfficeAssignment>, Vec<Course>)>>;
    fn list_assigned_course_ids(&self, instructor_id: i32) -> RepositoryResult<Vec<i32>>;
}

pub trait InstructorWriter {
    fn create_instructor(&self, new_instructor: &NewInstructor) -> RepositoryResult<Instructor>;
    fn update_instructor(
        &self,
        instructor_id: i32,
        updates: &UpdateInstructor,
    ) -> RepositoryResult<Instructor>;
    fn delete_instructor(&self, instructor_id: i32) -> RepositoryResult<()>;
    fn set_office_assignment(
        &self,
        instructor_id: i32,
        location: Option<&str>,
    ) -> RepositoryResult<()>;
    fn set_course_assignments(
        &self,
        instructor_id: i32,
        course_ids: &[i32],
    ) -> RepositoryResult<usize>;
}

pub trait DepartmentReader {
    fn get_department_by_id(&self, id: i32) -> RepositoryResult<Option<Department>>;
    fn list_departments(&self) -> RepositoryResult<Vec<Department>>;
    fn list_departments_with_administrators(
        &self,
    ) -> RepositoryResult<Vec<(Department, Option<Instructor>)>>;
}

pub trait DepartmentWriter {
    fn create_department(&self, new_department: &NewDepartment) -> RepositoryResult<Department>;
    fn update_department(
        &self,
        department_id: i32,
        updates: &UpdateDepartment,
    ) -> RepositoryResult<Department>;
    fn delete_department(&self, department_id: i32) -> RepositoryResult<()>;
}

pub trait EnrollmentReader {
    fn list_enrollments_for_student(
        &self,
        student_id: i32,
    ) -> RepositoryResult<Vec<(Enrollment, Course)>>;
    fn list_enrollments_for_course(
        &self,
        course_id: i32,
    ) -> RepositoryResult<Vec<(Enrollment, Student)>>;
}

pub trait EnrollmentWriter {
    fn create_enrollment(&self, new_enrollment: &NewEnrollment) -> RepositoryResult<Enrollment>;
}
