use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::student::{NewStudent, UpdateStudent};

#[derive(Deserialize, Validate)]
/// Form data for creating or editing a student.
pub struct StudentForm {
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    pub enrollment_date: NaiveDate,
}

impl From<&StudentForm> for NewStudent {
    fn from(form: &StudentForm) -> Self {
        NewStudent::new(
            form.last_name.clone(),
            form.first_name.clone(),
            form.enrollment_date,
        )
    }
}

impl From<&StudentForm> for UpdateStudent {
    fn from(form: &StudentForm) -> Self {
        UpdateStudent::new(
            form.last_name.clone(),
            form.first_name.clone(),
            form.enrollment_date,
        )
    }
}
