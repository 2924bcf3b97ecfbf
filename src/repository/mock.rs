//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::course::{Course, NewCourse, UpdateCourse};
use crate::domain::department::{Department, NewDepartment, UpdateDepartment};
use crate::domain::enrollment::{Enrollment, NewEnrollment};
use crate::domain::instructor::{Instructor, NewInstructor, OfficeAssignment, UpdateInstructor};
use crate::domain::student::{EnrollmentDateGroup, NewStudent, Student, UpdateStudent};
use crate::repository::{
    CourseReader, CourseWriter, DepartmentReader, DepartmentWriter, EnrollmentReader,
    EnrollmentWriter, InstructorReader, InstructorWriter, StudentListQuery, StudentReader,
    StudentWriter, errors::RepositoryResult,
};

mock! {
    pub Repository {}

    impl StudentReader for Repository {
        fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>>;
        fn list_students(&self, query: StudentListQuery) -> RepositoryResult<(usize, Vec<Student>)>;
        fn enrollment_date_groups(&self) -> RepositoryResult<Vec<EnrollmentDateGroup>>;
    }

    impl StudentWriter for Repository {
        fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student>;
        fn update_student(
            &self,
            student_id: i32,
            updates: &UpdateStudent,
        ) -> RepositoryResult<Student>;
        fn delete_student(&self, student_id: i32) -> RepositoryResult<()>;
    }

    impl CourseReader for Repository {
        fn get_course_by_id(&self, id: i32) -> RepositoryResult<Option<Course>>;
        fn get_course_with_department(
            &self,
            id: i32,
        ) -> RepositoryResult<Option<(Course, Department)>>;
        fn list_courses(&self) -> RepositoryResult<Vec<(Course, Department)>>;
        fn list_courses_for_instructor(
            &self,
            instructor_id: i32,
        ) -> RepositoryResult<Vec<(Course, Department)>>;
    }

    impl CourseWriter for Repository {
        fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course>;
        fn update_course(&self, course_id: i32, updates: &UpdateCourse) -> RepositoryResult<Course>;
        fn delete_course(&self, course_id: i32) -> RepositoryResult<()>;
    }

    impl InstructorReader for Repository {
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

    impl InstructorWriter for Repository {
        fn create_instructor(&self, new_instructor: &NewInstructor) -> RepositoryResult<Instructor>;
        fn update_instructor(
            &self,
            instructor_id: i32,
            updates: &UpdateInstructor,
        ) -> RepositoryResult<Instructor>;
        fn delete_instructor(&self, instructor_id: i32) -> RepositoryResult<()>;
        fn set_office_assignment<'a>(
            &self,
            instructor_id: i32,
            location: Option<&'a str>,
        ) -> RepositoryResult<()>;
        fn set_course_assignments(
            &self,
            instructor_id: i32,
            course_ids: &[i32],
        ) -> RepositoryResult<usize>;
    }

    impl DepartmentReader for Repository {
        fn get_department_by_id(&self, id: i32) -> RepositoryResult<Option<Department>>;
        fn list_departments(&self) -> RepositoryResult<Vec<Department>>;
        fn list_departments_with_administrators(
            &self,
        ) -> RepositoryResult<Vec<(Department, Option<Instructor>)>>;
    }

    impl DepartmentWriter for Repository {
        fn create_department(&self, new_department: &NewDepartment) -> RepositoryResult<Department>;
        fn update_department(
            &self,
            department_id: i32,
            updates: &UpdateDepartment,
        ) -> RepositoryResult<Department>;
        fn delete_department(&self, department_id: i32) -> RepositoryResult<()>;
    }

    impl EnrollmentReader for Repository {
        fn list_enrollments_for_student(
            &self,
            student_id: i32,
        ) -> RepositoryResult<Vec<(Enrollment, Course)>>;
        fn list_enrollments_for_course(
            &self,
            course_id: i32,
        ) -> RepositoryResult<Vec<(Enrollment, Student)>>;
    }

    impl EnrollmentWriter for Repository {
        fn create_enrollment(&self, new_enrollment: &NewEnrollment) -> RepositoryResult<Enrollment>;
    }
}
