use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::instructor::{
    Instructor as DomainInstructor, NewInstructor as DomainNewInstructor,
    OfficeAssignment as DomainOfficeAssignment, UpdateInstructor as DomainUpdateInstructor,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::instructors)]
/// Diesel model for [`crate::domain::instructor::Instructor`].
pub struct Instructor {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub hire_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::instructors)]
/// Insertable form of [`Instructor`].
pub struct NewInstructor<'a> {
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub hire_date: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::instructors)]
/// Data used when updating an [`Instructor`] record.
pub struct UpdateInstructor<'a> {
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, Identifiable, Queryable, Insertable)]
#[diesel(table_name = crate::schema::office_assignments)]
#[diesel(primary_key(instructor_id))]
/// Office location keyed by instructor. The row exists only while the
/// instructor has an office.
pub struct OfficeAssignment {
    pub instructor_id: i32,
    pub location: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Insertable, Associations)]
#[diesel(belongs_to(Instructor, foreign_key = instructor_id))]
#[diesel(table_name = crate::schema::course_assignments)]
#[diesel(primary_key(course_id, instructor_id))]
/// Join row linking an instructor to a course they teach.
pub struct CourseAssignment {
    pub course_id: i32,
    pub instructor_id: i32,
}

impl From<Instructor> for DomainInstructor {
    fn from(instructor: Instructor) -> Self {
        Self {
            id: instructor.id,
            last_name: instructor.last_name,
            first_name: instructor.first_name,
            hire_date: instructor.hire_date,
        }
    }
}

impl<'a> From<&'a DomainNewInstructor> for NewInstructor<'a> {
    fn from(instructor: &'a DomainNewInstructor) -> Self {
        Self {
            last_name: instructor.last_name.as_str(),
            first_name: instructor.first_name.as_str(),
            hire_date: instructor.hire_date,
        }
    }
}

impl<'a> From<&'a DomainUpdateInstructor> for UpdateInstructor<'a> {
    fn from(instructor: &'a DomainUpdateInstructor) -> Self {
        Self {
            last_name: instructor.last_name.as_str(),
            first_name: instructor.first_name.as_str(),
            hire_date: instructor.hire_date,
        }
    }
}

impl From<OfficeAssignment> for DomainOfficeAssignment {
    fn from(office: OfficeAssignment) -> Self {
        Self {
            instructor_id: office.instructor_id,
            location: office.location,
        }
    }
}
