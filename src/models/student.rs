use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::student::{
    Student as DomainStudent, NewStudent as DomainNewStudent, UpdateStudent as DomainUpdateStudent,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::students)]
/// Diesel model for [`crate::domain::student::Student`].
pub struct Student {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub enrollment_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::students)]
/// Insertable form of [`Student`].
pub struct NewStudent<'a> {
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub enrollment_date: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::students)]
/// Data used when updating a [`Student`] record.
pub struct UpdateStudent<'a> {
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub enrollment_date: NaiveDate,
}

impl From<Student> for DomainStudent {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            last_name: student.last_name,
            first_name: student.first_name,
            enrollment_date: student.enrollment_date,
        }
    }
}

impl<'a> From<&'a DomainNewStudent> for NewStudent<'a> {
    fn from(student: &'a DomainNewStudent) -> Self {
        Self {
            last_name: student.last_name.as_str(),
            first_name: student.first_name.as_str(),
            enrollment_date: student.enrollment_date,
        }
    }
}

impl<'a> From<&'a DomainUpdateStudent> for UpdateStudent<'a> {
    fn from(student: &'a DomainUpdateStudent) -> Self {
        Self {
            last_name: student.last_name.as_str(),
            first_name: student.first_name.as_str(),
            enrollment_date: student.enrollment_date,
        }
    }
}
