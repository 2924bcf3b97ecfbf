//! Repository implementation for students.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::{
    domain::student::{EnrollmentDateGroup, NewStudent, Student, StudentSort, UpdateStudent},
    models::student::{
        NewStudent as DbNewStudent, Student as DbStudent, UpdateStudent as DbUpdateStudent,
    },
    repository::{
        DieselRepository, StudentListQuery, StudentReader, StudentWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl StudentReader for DieselRepository {
    fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>> {
        use crate::schema::students;

        let mut conn = self.conn()?;
        let student = students::table
            .find(id)
            .first::<DbStudent>(&mut conn)
            .optional()?;

        Ok(student.map(Into::into))
    }

    fn list_students(&self, query: StudentListQuery) -> RepositoryResult<(usize, Vec<Student>)> {
        use crate::schema::students;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = students::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                items = items.filter(
                    students::last_name
                        .like(pattern.clone())
                        .or(students::first_name.like(pattern)),
                );
            }
            items
        };

        // Count the full match before the page is sliced off.
        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = match query.sort {
            StudentSort::LastNameAsc => query_builder().order(students::last_name.asc()),
            StudentSort::LastNameDesc => query_builder().order(students::last_name.desc()),
            StudentSort::EnrollmentDateAsc => {
                query_builder().order(students::enrollment_date.asc())
            }
            StudentSort::EnrollmentDateDesc => {
                query_builder().order(students::enrollment_date.desc())
            }
        }
        .then_order_by(students::id.asc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let students = items
            .load::<DbStudent>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Student>>();

        Ok((total, students))
    }

    fn enrollment_date_groups(&self) -> RepositoryResult<Vec<EnrollmentDateGroup>> {
        use crate::schema::students;

        let mut conn = self.conn()?;
        let groups = students::table
            .group_by(students::enrollment_date)
            .select((students::enrollment_date, diesel::dsl::count_star()))
            .order(students::enrollment_date.asc())
            .load::<(NaiveDate, i64)>(&mut conn)?
            .into_iter()
            .map(|(enrollment_date, student_count)| EnrollmentDateGroup {
                enrollment_date,
                student_count,
            })
            .collect();

        Ok(groups)
    }
}

impl StudentWriter for DieselRepository {
    fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student> {
        use crate::schema::students;

        let mut conn = self.conn()?;
        let db_new_student: DbNewStudent = new_student.into();

        let student = diesel::insert_into(students::table)
            .values(&db_new_student)
            .get_result::<DbStudent>(&mut conn)?;

        Ok(student.into())
    }

    fn update_student(
        &self,
        student_id: i32,
        updates: &UpdateStudent,
    ) -> RepositoryResult<Student> {
        use crate::schema::students;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateStudent = updates.into();

        let updated = diesel::update(students::table.find(student_id))
            .set(&db_updates)
            .get_result::<DbStudent>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_student(&self, student_id: i32) -> RepositoryResult<()> {
        use crate::schema::students;

        let mut conn = self.conn()?;
        let affected = diesel::delete(students::table.find(student_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
