use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Instructor {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub hire_date: NaiveDate,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInstructor {
    pub last_name: String,
    pub first_name: String,
    pub hire_date: NaiveDate,
}

impl NewInstructor {
    #[must_use]
    pub fn new(last_name: String, first_name: String, hire_date: NaiveDate) -> Self {
        Self {
            last_name: last_name.trim().to_string(),
            first_name: first_name.trim().to_string(),
            hire_date,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateInstructor {
    pub last_name: String,
    pub first_name: String,
    pub hire_date: NaiveDate,
}

impl UpdateInstructor {
    #[must_use]
    pub fn new(last_name: String, first_name: String, hire_date: NaiveDate) -> Self {
        Self {
            last_name: last_name.trim().to_string(),
            first_name: first_name.trim().to_string(),
            hire_date,
        }
    }
}

/// An instructor's office, at most one per instructor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OfficeAssignment {
    pub instructor_id: i32,
    pub location: String,
}
