//! Repository implementation for courses.

use diesel::prelude::*;

use crate::{
    domain::{
        course::{Course, NewCourse, UpdateCourse},
        department::Department,
    },
    models::{
        course::{Course as DbCourse, NewCourse as DbNewCourse, UpdateCourse as DbUpdateCourse},
        department::Department as DbDepartment,
    },
    repository::{
        CourseReader, CourseWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl CourseReader for DieselRepository {
    fn get_course_by_id(&self, id: i32) -> RepositoryResult<Option<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let course = courses::table
            .find(id)
            .first::<DbCourse>(&mut conn)
            .optional()?;

        Ok(course.map(Into::into))
    }

    fn get_course_with_department(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<(Course, Department)>> {
        use crate::schema::{courses, departments};

        let mut conn = self.conn()?;
        let row = courses::table
            .inner_join(departments::table)
            .filter(courses::id.eq(id))
            .select((courses::all_columns, departments::all_columns))
            .first::<(DbCourse, DbDepartment)>(&mut conn)
            .optional()?;

        Ok(row.map(|(course, department)| (course.into(), department.into())))
    }

    fn list_courses(&self) -> RepositoryResult<Vec<(Course, Department)>> {
        use crate::schema::{courses, departments};

        let mut conn = self.conn()?;
        let rows = courses::table
            .inner_join(departments::table)
            .order(courses::id.asc())
            .select((courses::all_columns, departments::all_columns))
            .load::<(DbCourse, DbDepartment)>(&mut conn)?
            .into_iter()
            .map(|(course, department)| (course.into(), department.into()))
            .collect();

        Ok(rows)
    }

    fn list_courses_for_instructor(
        &self,
        instructor_id: i32,
    ) -> RepositoryResult<Vec<(Course, Department)>> {
        use crate::schema::{course_assignments, courses, departments};

        let mut conn = self.conn()?;
        let rows = courses::table
            .inner_join(course_assignments::table)
            .inner_join(departments::table)
            .filter(course_assignments::instructor_id.eq(instructor_id))
            .order(courses::id.asc())
            .select((courses::all_columns, departments::all_columns))
            .load::<(DbCourse, DbDepartment)>(&mut conn)?
            .into_iter()
            .map(|(course, department)| (course.into(), department.into()))
            .collect();

        Ok(rows)
    }
}

impl CourseWriter for DieselRepository {
    fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let db_new_course: DbNewCourse = new_course.into();

        let course = diesel::insert_into(courses::table)
            .values(&db_new_course)
            .get_result::<DbCourse>(&mut conn)?;

        Ok(course.into())
    }

    fn update_course(&self, course_id: i32, updates: &UpdateCourse) -> RepositoryResult<Course> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCourse = updates.into();

        let updated = diesel::update(courses::table.find(course_id))
            .set(&db_updates)
            .get_result::<DbCourse>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_course(&self, course_id: i32) -> RepositoryResult<()> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let affected = diesel::delete(courses::table.find(course_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
