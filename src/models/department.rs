use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::department::{
    Department as DomainDepartment, NewDepartment as DomainNewDepartment,
    UpdateDepartment as DomainUpdateDepartment,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::departments)]
/// Diesel model for [`crate::domain::department::Department`].
pub struct Department {
    pub id: i32,
    pub name: String,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub instructor_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::departments)]
/// Insertable form of [`Department`].
pub struct NewDepartment<'a> {
    pub name: &'a str,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub instructor_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::departments)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Department`] record. `None` for the
/// administrator clears the column rather than leaving it untouched.
pub struct UpdateDepartment<'a> {
    pub name: &'a str,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub instructor_id: Option<i32>,
}

impl From<Department> for DomainDepartment {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            budget: department.budget,
            start_date: department.start_date,
            instructor_id: department.instructor_id,
        }
    }
}

impl<'a> From<&'a DomainNewDepartment> for NewDepartment<'a> {
    fn from(department: &'a DomainNewDepartment) -> Self {
        Self {
            name: department.name.as_str(),
            budget: department.budget,
            start_date: department.start_date,
            instructor_id: department.instructor_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateDepartment> for UpdateDepartment<'a> {
    fn from(department: &'a DomainUpdateDepartment) -> Self {
        Self {
            name: department.name.as_str(),
            budget: department.budget,
            start_date: department.start_date,
            instructor_id: department.instructor_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_changeset_carries_cleared_administrator() {
        let domain = DomainUpdateDepartment::new(
            "English".to_string(),
            350_000.0,
            "2007-09-01".parse().unwrap(),
            None,
        );
        let update = UpdateDepartment::from(&domain);
        assert_eq!(update.name, "English");
        assert!(update.instructor_id.is_none());
    }
}
