use serde::Deserialize;
use validator::Validate;

use crate::domain::course::{NewCourse, UpdateCourse};

#[derive(Deserialize, Validate)]
/// Form data for creating a course. The number is chosen by the registrar
/// and becomes the primary key.
pub struct AddCourseForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 3, max = 50))]
    pub title: String,
    #[validate(range(min = 0, max = 5))]
    pub credits: i32,
    pub department_id: i32,
}

#[derive(Deserialize, Validate)]
/// Form data for editing a course. The number cannot be changed.
pub struct EditCourseForm {
    #[validate(length(min = 3, max = 50))]
    pub title: String,
    #[validate(range(min = 0, max = 5))]
    pub credits: i32,
    pub department_id: i32,
}

impl From<&AddCourseForm> for NewCourse {
    fn from(form: &AddCourseForm) -> Self {
        NewCourse::new(
            form.id,
            form.title.clone(),
            form.credits,
            form.department_id,
        )
    }
}

impl From<&EditCourseForm> for UpdateCourse {
    fn from(form: &EditCourseForm) -> Self {
        UpdateCourse::new(form.title.clone(), form.credits, form.department_id)
    }
}
