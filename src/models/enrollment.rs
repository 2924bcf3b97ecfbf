use diesel::prelude::*;

use crate::domain::enrollment::{
    Enrollment as DomainEnrollment, Grade, NewEnrollment as DomainNewEnrollment,
};
use crate::models::course::Course;
use crate::models::student::Student;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Course, foreign_key = course_id))]
#[diesel(belongs_to(Student, foreign_key = student_id))]
#[diesel(table_name = crate::schema::enrollments)]
/// Diesel model for [`crate::domain::enrollment::Enrollment`]. Grades are
/// stored as their letter form, `NULL` until one is assigned.
pub struct Enrollment {
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
    pub grade: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::enrollments)]
/// Insertable form of [`Enrollment`].
pub struct NewEnrollment {
    pub course_id: i32,
    pub student_id: i32,
    pub grade: Option<String>,
}

impl From<Enrollment> for DomainEnrollment {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id,
            course_id: enrollment.course_id,
            student_id: enrollment.student_id,
            grade: enrollment.grade.as_deref().and_then(Grade::from_letter),
        }
    }
}

impl From<&DomainNewEnrollment> for NewEnrollment {
    fn from(enrollment: &DomainNewEnrollment) -> Self {
        Self {
            course_id: enrollment.course_id,
            student_id: enrollment.student_id,
            grade: enrollment.grade.map(|g| g.to_string()),
        }
    }
}
