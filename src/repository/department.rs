//! Repository implementation for departments.

use diesel::prelude::*;

use crate::{
    domain::{
        department::{Department, NewDepartment, UpdateDepartment},
        instructor::Instructor,
    },
    models::{
        department::{
            Department as DbDepartment, NewDepartment as DbNewDepartment,
            UpdateDepartment as DbUpdateDepartment,
        },
        instructor::Instructor as DbInstructor,
    },
    repository::{
        DepartmentReader, DepartmentWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl DepartmentReader for DieselRepository {
    fn get_department_by_id(&self, id: i32) -> RepositoryResult<Option<Department>> {
        use crate::schema::departments;

        let mut conn = self.conn()?;
        let department = departments::table
            .find(id)
            .first::<DbDepartment>(&mut conn)
            .optional()?;

        Ok(department.map(Into::into))
    }

    fn list_departments(&self) -> RepositoryResult<Vec<Department>> {
        use crate::schema::departments;

        let mut conn = self.conn()?;
        let departments = departments::table
            .order(departments::name.asc())
            .load::<DbDepartment>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(departments)
    }

    fn list_departments_with_administrators(
        &self,
    ) -> RepositoryResult<Vec<(Department, Option<Instructor>)>> {
        use crate::schema::{departments, instructors};

        let mut conn = self.conn()?;
        let rows = departments::table
            .left_join(instructors::table)
            .order(departments::name.asc())
            .load::<(DbDepartment, Option<DbInstructor>)>(&mut conn)?
            .into_iter()
            .map(|(department, administrator)| (department.into(), administrator.map(Into::into)))
            .collect();

        Ok(rows)
    }
}

impl DepartmentWriter for DieselRepository {
    fn create_department(&self, new_department: &NewDepartment) -> RepositoryResult<Department> {
        use crate::schema::departments;

        let mut conn = self.conn()?;
        let db_new_department: DbNewDepartment = new_department.into();

        let department = diesel::insert_into(departments::table)
            .values(&db_new_department)
            .get_result::<DbDepartment>(&mut conn)?;

        Ok(department.into())
    }

    fn update_department(
        &self,
        department_id: i32,
        updates: &UpdateDepartment,
    ) -> RepositoryResult<Department> {
        use crate::schema::departments;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateDepartment = updates.into();

        let updated = diesel::update(departments::table.find(department_id))
            .set(&db_updates)
            .get_result::<DbDepartment>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_department(&self, department_id: i32) -> RepositoryResult<()> {
        use crate::schema::departments;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(departments::table.find(department_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
