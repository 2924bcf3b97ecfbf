//! Repository implementation for instructors, their offices and teaching
//! assignments.

use diesel::{Connection, prelude::*, upsert::excluded};

use crate::{
    domain::{
        course::Course,
        instructor::{Instructor, NewInstructor, OfficeAssignment, UpdateInstructor},
    },
    models::{
        course::Course as DbCourse,
        instructor::{
            CourseAssignment as DbCourseAssignment, Instructor as DbInstructor,
            NewInstructor as DbNewInstructor, OfficeAssignment as DbOfficeAssignment,
            UpdateInstructor as DbUpdateInstructor,
        },
    },
    repository::{
        DieselRepository, InstructorReader, InstructorWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl InstructorReader for DieselRepository {
    fn get_instructor_by_id(&self, id: i32) -> RepositoryResult<Option<Instructor>> {
        use crate::schema::instructors;

        let mut conn = self.conn()?;
        let instructor = instructors::table
            .find(id)
            .first::<DbInstructor>(&mut conn)
            .optional()?;

        Ok(instructor.map(Into::into))
    }

    fn get_office_assignment(
        &self,
        instructor_id: i32,
    ) -> RepositoryResult<Option<OfficeAssignment>> {
        use crate::schema::office_assignments;

        let mut conn = self.conn()?;
        let office = office_assignments::table
            .find(instructor_id)
            .first::<DbOfficeAssignment>(&mut conn)
            .optional()?;

        Ok(office.map(Into::into))
    }

    fn list_instructors(&self) -> RepositoryResult<Vec<Instructor>> {
        use crate::schema::instructors;

        let mut conn = self.conn()?;
        let instructors = instructors::table
            .order(instructors::last_name.asc())
            .then_order_by(instructors::id.asc())
            .load::<DbInstructor>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(instructors)
    }

    fn list_instructors_with_details(
        &self,
    ) -> RepositoryResult<Vec<(Instructor, Option<OfficeAssignment>, Vec<Course>)>> {
        use crate::schema::{course_assignments, courses, instructors, office_assignments};
        use std::collections::HashMap;

        let mut conn = self.conn()?;
        let instructors = instructors::table
            .left_join(office_assignments::table)
            .order(instructors::last_name.asc())
            .then_order_by(instructors::id.asc())
            .load::<(DbInstructor, Option<DbOfficeAssignment>)>(&mut conn)?;

        let instructor_ids = instructors
            .iter()
            .map(|(instructor, _)| instructor.id)
            .collect::<Vec<i32>>();

        let assigned_courses = course_assignments::table
            .inner_join(courses::table)
            .filter(course_assignments::instructor_id.eq_any(instructor_ids))
            .order(courses::id.asc())
            .select((course_assignments::instructor_id, courses::all_columns))
            .load::<(i32, DbCourse)>(&mut conn)?;

        let mut courses_by_instructor: HashMap<i32, Vec<Course>> = HashMap::new();
        for (instructor_id, course) in assigned_courses {
            courses_by_instructor
                .entry(instructor_id)
                .or_default()
                .push(course.into());
        }

        let rows = instructors
            .into_iter()
            .map(|(instructor, office)| {
                let courses = courses_by_instructor
                    .remove(&instructor.id)
                    .unwrap_or_default();
                (instructor.into(), office.map(Into::into), courses)
            })
            .collect();

        Ok(rows)
    }

    fn list_assigned_course_ids(&self, instructor_id: i32) -> RepositoryResult<Vec<i32>> {
        use crate::schema::course_assignments;

        let mut conn = self.conn()?;
        let course_ids = course_assignments::table
            .filter(course_assignments::instructor_id.eq(instructor_id))
            .select(course_assignments::course_id)
            .order(course_assignments::course_id.asc())
            .load::<i32>(&mut conn)?;

        Ok(course_ids)
    }
}

impl InstructorWriter for DieselRepository {
    fn create_instructor(&self, new_instructor: &NewInstructor) -> RepositoryResult<Instructor> {
        use crate::schema::instructors;

        let mut conn = self.conn()?;
        let db_new_instructor: DbNewInstructor = new_instructor.into();

        let instructor = diesel::insert_into(instructors::table)
            .values(&db_new_instructor)
            .get_result::<DbInstructor>(&mut conn)?;

        Ok(instructor.into())
    }

    fn update_instructor(
        &self,
        instructor_id: i32,
        updates: &UpdateInstructor,
    ) -> RepositoryResult<Instructor> {
        use crate::schema::instructors;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateInstructor = updates.into();

        let updated = diesel::update(instructors::table.find(instructor_id))
            .set(&db_updates)
            .get_result::<DbInstructor>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_instructor(&self, instructor_id: i32) -> RepositoryResult<()> {
        use crate::schema::instructors;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(instructors::table.find(instructor_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn set_office_assignment(
        &self,
        instructor_id: i32,
        location: Option<&str>,
    ) -> RepositoryResult<()> {
        use crate::schema::office_assignments;

        let mut conn = self.conn()?;

        match location {
            Some(location) => {
                let assignment = DbOfficeAssignment {
                    instructor_id,
                    location: location.to_string(),
                };
                diesel::insert_into(office_assignments::table)
                    .values(&assignment)
                    .on_conflict(office_assignments::instructor_id)
                    .do_update()
                    .set(office_assignments::location.eq(excluded(office_assignments::location)))
                    .execute(&mut conn)?;
            }
            None => {
                diesel::delete(
                    office_assignments::table
                        .filter(office_assignments::instructor_id.eq(instructor_id)),
                )
                .execute(&mut conn)?;
            }
        }

        Ok(())
    }

    fn set_course_assignments(
        &self,
        instructor_id: i32,
        course_ids: &[i32],
    ) -> RepositoryResult<usize> {
        use crate::schema::course_assignments;

        let mut conn = self.conn()?;

        let assignments = course_ids
            .iter()
            .map(|course_id| DbCourseAssignment {
                course_id: *course_id,
                instructor_id,
            })
            .collect::<Vec<_>>();

        conn.transaction::<usize, diesel::result::Error, _>(move |conn| {
            diesel::delete(
                course_assignments::table
                    .filter(course_assignments::instructor_id.eq(instructor_id)),
            )
            .execute(conn)?;

            let result = diesel::insert_into(course_assignments::table)
                .values(assignments)
                .execute(conn)?;

            Ok(result)
        })
        .map_err(RepositoryError::from)
    }
}
