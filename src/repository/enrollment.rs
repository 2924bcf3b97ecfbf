//! Repository implementation for enrollments.

use diesel::prelude::*;

use crate::{
    domain::{
        course::Course,
        enrollment::{Enrollment, NewEnrollment},
        student::Student,
    },
    models::{
        course::Course as DbCourse,
        enrollment::{Enrollment as DbEnrollment, NewEnrollment as DbNewEnrollment},
        student::Student as DbStudent,
    },
    repository::{DieselRepository, EnrollmentReader, EnrollmentWriter, errors::RepositoryResult},
};

impl EnrollmentReader for DieselRepository {
    fn list_enrollments_for_student(
        &self,
        student_id: i32,
    ) -> RepositoryResult<Vec<(Enrollment, Course)>> {
        use crate::schema::{courses, enrollments};

        let mut conn = self.conn()?;
        let rows = enrollments::table
            .inner_join(courses::table)
            .filter(enrollments::student_id.eq(student_id))
            .order(courses::title.asc())
            .select((enrollments::all_columns, courses::all_columns))
            .load::<(DbEnrollment, DbCourse)>(&mut conn)?
            .into_iter()
            .map(|(enrollment, course)| (enrollment.into(), course.into()))
            .collect();

        Ok(rows)
    }

    fn list_enrollments_for_course(
        &self,
        course_id: i32,
    ) -> RepositoryResult<Vec<(Enrollment, Student)>> {
        use crate::schema::{enrollments, students};

        let mut conn = self.conn()?;
        let rows = enrollments::table
            .inner_join(students::table)
            .filter(enrollments::course_id.eq(course_id))
            .order(students::last_name.asc())
            .then_order_by(students::id.asc())
            .select((enrollments::all_columns, students::all_columns))
            .load::<(DbEnrollment, DbStudent)>(&mut conn)?
            .into_iter()
            .map(|(enrollment, student)| (enrollment.into(), student.into()))
            .collect();

        Ok(rows)
    }
}

impl EnrollmentWriter for DieselRepository {
    fn create_enrollment(&self, new_enrollment: &NewEnrollment) -> RepositoryResult<Enrollment> {
        use crate::schema::enrollments;

        let mut conn = self.conn()?;
        let db_new_enrollment: DbNewEnrollment = new_enrollment.into();

        let enrollment = diesel::insert_into(enrollments::table)
            .values(&db_new_enrollment)
            .get_result::<DbEnrollment>(&mut conn)?;

        Ok(enrollment.into())
    }
}
