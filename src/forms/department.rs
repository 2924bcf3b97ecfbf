use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::department::{NewDepartment, UpdateDepartment};
use crate::forms::empty_string_as_none;

#[derive(Deserialize, Validate)]
/// Form data for creating or editing a department. An empty administrator
/// select leaves the position vacant.
pub struct DepartmentForm {
    #[validate(length(min = 3, max = 50))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub budget: f64,
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub instructor_id: Option<i32>,
}

impl From<&DepartmentForm> for NewDepartment {
    fn from(form: &DepartmentForm) -> Self {
        NewDepartment::new(
            form.name.clone(),
            form.budget,
            form.start_date,
            form.instructor_id,
        )
    }
}

impl From<&DepartmentForm> for UpdateDepartment {
    fn from(form: &DepartmentForm) -> Self {
        UpdateDepartment::new(
            form.name.clone(),
            form.budget,
            form.start_date,
            form.instructor_id,
        )
    }
}
