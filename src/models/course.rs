use diesel::prelude::*;

use crate::domain::course::{
    Course as DomainCourse, NewCourse as DomainNewCourse, UpdateCourse as DomainUpdateCourse,
};
use crate::models::department::Department;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Department, foreign_key = department_id))]
#[diesel(table_name = crate::schema::courses)]
/// Diesel model for [`crate::domain::course::Course`].
pub struct Course {
    pub id: i32,
    pub title: String,
    pub credits: i32,
    pub department_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::courses)]
/// Insertable form of [`Course`]. The id column carries the user-entered
/// course number.
pub struct NewCourse<'a> {
    pub id: i32,
    pub title: &'a str,
    pub credits: i32,
    pub department_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::courses)]
/// Data used when updating a [`Course`] record.
pub struct UpdateCourse<'a> {
    pub title: &'a str,
    pub credits: i32,
    pub department_id: i32,
}

impl From<Course> for DomainCourse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            credits: course.credits,
            department_id: course.department_id,
        }
    }
}

impl<'a> From<&'a DomainNewCourse> for NewCourse<'a> {
    fn from(course: &'a DomainNewCourse) -> Self {
        Self {
            id: course.id,
            title: course.title.as_str(),
            credits: course.credits,
            department_id: course.department_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateCourse> for UpdateCourse<'a> {
    fn from(course: &'a DomainUpdateCourse) -> Self {
        Self {
            title: course.title.as_str(),
            credits: course.credits,
            department_id: course.department_id,
        }
    }
}
