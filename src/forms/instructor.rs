use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::instructor::{NewInstructor, UpdateInstructor};
use crate::forms::empty_string_as_none;

#[derive(Deserialize, Validate)]
/// Form data for creating or editing an instructor. Parsed from the raw
/// body because the course checkboxes submit one `course_ids` pair per
/// checked box.
pub struct InstructorForm {
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    pub hire_date: NaiveDate,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub office_location: Option<String>,
    #[serde(default)]
    pub course_ids: Vec<i32>,
}

impl InstructorForm {
    pub fn parse(body: &[u8]) -> Result<Self, serde_html_form::de::Error> {
        serde_html_form::from_bytes(body)
    }
}

impl From<&InstructorForm> for NewInstructor {
    fn from(form: &InstructorForm) -> Self {
        NewInstructor::new(
            form.last_name.clone(),
            form.first_name.clone(),
            form.hire_date,
        )
    }
}

impl From<&InstructorForm> for UpdateInstructor {
    fn from(form: &InstructorForm) -> Self {
        UpdateInstructor::new(
            form.last_name.clone(),
            form.first_name.clone(),
            form.hire_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_course_ids_collect_into_a_vec() {
        let form = InstructorForm::parse(
            b"last_name=Harui&first_name=Roger&hire_date=1998-07-01&office_location=Gowan+27&course_ids=1050&course_ids=3141",
        )
        .unwrap();

        assert_eq!(form.course_ids, vec![1050, 3141]);
        assert_eq!(form.office_location.as_deref(), Some("Gowan 27"));
    }

    #[test]
    fn unchecked_boxes_and_blank_office_are_empty() {
        let form = InstructorForm::parse(
            b"last_name=Zheng&first_name=Roger&hire_date=2004-02-12&office_location=",
        )
        .unwrap();

        assert!(form.course_ids.is_empty());
        assert!(form.office_location.is_none());
    }
}
